const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;

/// 速度格式化：按量级选择 B/s、KB/s 或 MB/s，保留两位小数。
pub fn format_speed(bytes_per_second: f64) -> String {
    if bytes_per_second < KB {
        format!("{:.2} B/s", bytes_per_second)
    } else if bytes_per_second < MB {
        format!("{:.2} KB/s", bytes_per_second / KB)
    } else {
        format!("{:.2} MB/s", bytes_per_second / MB)
    }
}

use serde::Serialize;

use crate::internal::fetcher::functions::format_speed::format_speed;

/// 一次测速采样；每个任务每秒最多产生一次，不做保留。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSample {
    pub task_order: usize,
    /// 采样时刻的累计字节数
    pub bytes_transferred: u64,
    /// 距上次采样的平均速度（字节/秒）
    pub bytes_per_second: f64,
}

impl ProgressSample {
    /// 人类可读的速度，如 `1.50 KB/s`
    pub fn speed_label(&self) -> String {
        format_speed(self.bytes_per_second)
    }
}

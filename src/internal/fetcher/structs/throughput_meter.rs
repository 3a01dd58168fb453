use std::time::{Duration, Instant};

use super::progress_sample::ProgressSample;

/// 测速器：距上次采样不足一个间隔时不产出，保证每个任务每秒最多一次采样。
///
/// 时间由调用方传入，便于测试时构造任意时刻。
#[derive(Debug, Clone)]
pub struct ThroughputMeter {
    task_order: usize,
    interval: Duration,
    last_at: Instant,
    last_bytes: u64,
}

impl ThroughputMeter {
    /// `started_at` 为开始传输的时刻，首个采样不会早于 `started_at + interval`。
    pub fn new(task_order: usize, interval: Duration, started_at: Instant) -> Self {
        Self {
            task_order,
            interval,
            last_at: started_at,
            last_bytes: 0,
        }
    }

    /// 记录累计字节数；满足间隔时返回本次采样。
    pub fn observe(&mut self, bytes_transferred: u64, now: Instant) -> Option<ProgressSample> {
        let elapsed = now.saturating_duration_since(self.last_at);
        if elapsed < self.interval || elapsed.is_zero() {
            return None;
        }

        let delta = bytes_transferred.saturating_sub(self.last_bytes);
        let bytes_per_second = delta as f64 / elapsed.as_secs_f64();

        self.last_at = now;
        self.last_bytes = bytes_transferred;

        Some(ProgressSample {
            task_order: self.task_order,
            bytes_transferred,
            bytes_per_second,
        })
    }
}

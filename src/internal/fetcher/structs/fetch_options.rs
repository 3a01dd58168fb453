use std::time::Duration;

use crate::internal::config::structs::{DEFAULT_CHUNK_SIZE, DEFAULT_SAMPLE_INTERVAL};

/// 单次下载的参数。
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// 每次写盘的最大字节数；网络层送来的数据块超过该值时会被切开
    pub chunk_size: usize,
    /// 测速采样的最小间隔
    pub sample_interval: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

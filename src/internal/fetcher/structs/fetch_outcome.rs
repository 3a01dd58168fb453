use std::path::PathBuf;

use serde::Serialize;

/// 单个任务成功结束后的结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchOutcome {
    pub order: usize,
    /// 已保存到的本地文件
    pub destination_path: PathBuf,
    /// 实际写入的字节数
    pub bytes_transferred: u64,
    /// 响应头声明的总大小
    pub total_bytes: Option<u64>,
}

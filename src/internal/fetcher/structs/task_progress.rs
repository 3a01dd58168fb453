use serde::Serialize;

/// 单个任务的下载进度：响应式状态，由任务自身写入，展示层只读。
///
/// 总大小来自响应头 `Content-Length`，缺失时为 `None`，此时不报告百分比。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskProgress {
    /// 任务序号（从 1 开始）
    pub order: usize,
    /// 已写入本地文件的字节数
    pub bytes_transferred: u64,
    /// 文件总大小（字节），未知时为 `None`
    pub total_bytes: Option<u64>,
}

impl TaskProgress {
    /// 进度百分比（0～100）；总大小未知或为 0 时返回 `None`。
    pub fn percentage(&self) -> Option<f64> {
        self.total_bytes
            .filter(|&t| t > 0)
            .map(|t| (self.bytes_transferred as f64 / t as f64) * 100.0)
    }

    /// 总大小已知且已全部写入
    pub fn is_complete(&self) -> bool {
        self.total_bytes == Some(self.bytes_transferred)
    }
}

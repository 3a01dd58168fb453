//! 下载相关错误类型。

use thiserror::Error;

/// 下载失败的原因；对所在任务都是终止性的，不做重试。
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    /// 连接失败或传输中断
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回异常状态: HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    /// 下载任务 panic 或被中止
    #[error("下载任务异常退出: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl FetchError {
    /// 出错阶段，用于日志
    pub fn phase(&self) -> &'static str {
        match self {
            FetchError::CreateFile(_) => "create",
            FetchError::Request(_) | FetchError::Status(_) => "network",
            FetchError::WriteFile(_) => "write",
            FetchError::TaskJoin(_) => "task",
        }
    }
}

//! 配置相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("基础 URL 为空")]
    EmptyBaseUrl,

    #[error("基础 URL 格式错误: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// 文件名必须是单级路径，不能为空、不能包含分隔符或 `..`
    #[error("文件名不合法: {0:?}")]
    InvalidFileName(String),

    #[error("分块大小必须大于 0")]
    ZeroChunkSize,
}

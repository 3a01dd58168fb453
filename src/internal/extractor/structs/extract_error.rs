//! 解压相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

/// 解压失败的原因；出现后立即中止当前归档，剩余条目不再处理。
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("打开归档失败: {0}")]
    OpenSource(std::io::Error),

    /// 文件不是合法的 gzip 流
    #[error("初始化解压失败: {0}")]
    DecompressionInit(std::io::Error),

    /// 归档损坏或条目无法读取
    #[error("读取归档失败: {0}")]
    ArchiveRead(std::io::Error),

    #[error("创建目录失败 {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("写入文件失败 {}: {source}", path.display())]
    EntryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解压任务异常退出: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

use std::path::{Path, PathBuf};

use url::Url;

use crate::internal::config::structs::ConfigError;
use crate::internal::extractor::functions::extract::is_archive;
use crate::internal::states::reactive_core::ReactiveProperty;

use super::task_progress::TaskProgress;

/// 下载任务：一个配置文件名对应一个任务，开始前一次性创建，解压结束后丢弃。
///
/// 进度（已传输字节、总大小）放在响应式属性里，只由本任务的下载流程写入；
/// 外部通过 [`DownloadTask::progress`] 拿到共享句柄后 `.watch()` 监听。
#[derive(Debug, Clone)]
pub struct DownloadTask {
    /// 序号（从 1 开始）
    pub order: usize,
    /// 文件名
    pub name: String,
    /// 下载地址：基础 URL + 文件名
    pub source_url: Url,
    /// 本地保存路径：目标目录 + 文件名
    pub destination_path: PathBuf,
    pub(crate) progress_state: ReactiveProperty<TaskProgress>,
}

impl DownloadTask {
    /// `base_url` 需以 `/` 结尾，见 [`crate::config::PatchConfig`]。
    pub fn new(
        order: usize,
        name: &str,
        base_url: &Url,
        destination_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let source_url = base_url.join(name)?;

        Ok(Self {
            order,
            name: name.to_string(),
            source_url,
            destination_path: destination_dir.join(name),
            progress_state: ReactiveProperty::new(TaskProgress {
                order,
                bytes_transferred: 0,
                total_bytes: None,
            }),
        })
    }

    /// 内置的进度状态，返回可共享句柄。
    pub fn progress(&self) -> ReactiveProperty<TaskProgress> {
        self.progress_state.clone()
    }

    /// 响应头声明的总大小，未知（或尚未收到响应）时为 `None`
    pub fn total_bytes(&self) -> Option<u64> {
        self.progress_state.map(|p| p.total_bytes)
    }

    /// 已写入本地文件的字节数
    pub fn bytes_transferred(&self) -> u64 {
        self.progress_state.map(|p| p.bytes_transferred)
    }

    /// 下载完成后是否需要解压
    pub fn is_archive(&self) -> bool {
        is_archive(&self.destination_path)
    }
}

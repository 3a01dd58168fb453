use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::internal::config::manifest;
use crate::internal::fetcher::structs::{DownloadTask, FetchOptions};

use super::config_error::ConfigError;

/// 默认分块大小：32KB
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

/// 默认测速间隔：1 秒
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// 一次补丁下载的完整配置，构造调度器时传入。
#[derive(Debug, Clone)]
pub struct PatchConfig {
    /// 应用名称，仅用于展示
    pub app_name: String,
    /// 基础 URL，保证以 `/` 结尾
    pub base_url: Url,
    /// 文件名列表，顺序即任务序号
    pub files: Vec<String>,
    /// 下载与解压的目标目录
    pub destination_dir: PathBuf,
    /// 写盘分块大小（字节）
    pub chunk_size: usize,
    /// 测速采样的最小间隔
    pub sample_interval: Duration,
}

impl PatchConfig {
    /// 使用自定义基础 URL 与文件列表创建配置，目标目录默认为当前目录。
    pub fn new<I, S>(base_url: &str, files: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            app_name: manifest::APP_NAME.to_string(),
            base_url: format_base_url(base_url)?,
            files: files.into_iter().map(Into::into).collect(),
            destination_dir: PathBuf::from("."),
            chunk_size: DEFAULT_CHUNK_SIZE,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        })
    }

    /// 使用编译期清单（patches.toml）创建配置。
    pub fn from_manifest() -> Result<Self, ConfigError> {
        Self::new(manifest::BASE_URL, manifest::FILES.iter().copied())
    }

    /// 设置目标目录
    pub fn save_to(mut self, dir: impl AsRef<Path>) -> Self {
        self.destination_dir = dir.as_ref().to_path_buf();
        self
    }

    /// 替换基础 URL（测试时指向本地服务）
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = format_base_url(base_url)?;
        Ok(self)
    }

    /// 替换文件列表
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// 设置写盘分块大小（字节），必须大于 0
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// 设置测速采样间隔
    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// 单文件下载需要的参数
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            chunk_size: self.chunk_size,
            sample_interval: self.sample_interval,
        }
    }

    /// 校验配置并为每个文件创建下载任务（序号从 1 开始）。
    pub fn tasks(&self) -> Result<Vec<DownloadTask>, ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }

        self.files
            .iter()
            .enumerate()
            .map(|(i, name)| {
                validate_file_name(name)?;
                DownloadTask::new(i + 1, name, &self.base_url, &self.destination_dir)
            })
            .collect()
    }

    /// 最长文件名的字符数，展示层用于对齐
    pub fn max_name_width(&self) -> usize {
        self.files
            .iter()
            .map(|f| f.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// 解析基础 URL，并保证 path 以 `/` 结尾，否则 join 会吃掉最后一级目录。
pub(crate) fn format_base_url(url: &str) -> Result<Url, ConfigError> {
    if url.trim().is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }

    let mut base_url = Url::parse(url.trim())?;

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 文件会直接落在目标目录下，所以只接受单级普通文件名。
pub(crate) fn validate_file_name(name: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidFileName(name.to_string());

    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(invalid());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

use crate::{
    config::{ConfigError, PatchConfig},
    driver::{PatchDriver, PipelineReport, TaskReport},
};

/// 本库主入口之一：按配置并发下载全部文件，不解压。
///
/// 需要进度时请直接使用 [`PatchDriver`] 注册观察者。
pub async fn download_all(config: PatchConfig) -> Result<Vec<TaskReport>, ConfigError> {
    let driver = PatchDriver::new(config);
    let tasks = driver.tasks()?;
    Ok(driver.run_all(&tasks).await)
}

/// 本库主入口之一：按配置并发下载全部文件，全部结束后顺序解压其中的 `.tar.gz`。
///
/// example:
/// ```no_run
/// use patch_fetch::config::PatchConfig;
/// use patch_fetch::download_and_extract;
///
/// # async fn run() -> Result<(), patch_fetch::config::ConfigError> {
/// let config = PatchConfig::from_manifest()?.save_to("./client");
/// let report = download_and_extract(config).await?;
/// println!("全部成功: {}", report.is_success());
/// # Ok(())
/// # }
/// ```
pub async fn download_and_extract(config: PatchConfig) -> Result<PipelineReport, ConfigError> {
    PatchDriver::new(config).run().await
}

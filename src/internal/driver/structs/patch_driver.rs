use std::sync::Arc;

use futures_util::future::join_all;
use reqwest::Client;
use tracing::{info, warn};

use crate::internal::config::structs::{ConfigError, PatchConfig};
use crate::internal::extractor::functions::extract::extract;
use crate::internal::extractor::structs::ExtractError;
use crate::internal::fetcher::functions::fetch::fetch;
use crate::internal::fetcher::structs::observer_adapters::{
    OnFinishAdapter, OnProgressAdapter, OnSampleAdapter,
};
use crate::internal::fetcher::structs::{
    DownloadTask, FetchError, FetchOutcome, ObserverSet, ProgressSample, TaskProgress,
};
use crate::internal::fetcher::traits::ProgressObserver;

use super::reports::{ExtractReport, PipelineReport, TaskReport};

/// 补丁调度器：持有配置、HTTP 客户端与观察者。
///
/// 下载阶段每个文件一个 tokio 任务，互不影响，没有并发上限；
/// 全部任务结束后才进入解压阶段，解压逐个顺序执行。
#[derive(Debug)]
pub struct PatchDriver {
    client: Client,
    config: PatchConfig,
    observers: ObserverSet,
}

impl PatchDriver {
    pub fn new(config: PatchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            observers: ObserverSet::default(),
        }
    }

    /// 替换 HTTP 客户端（如需自定义代理）
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// 添加完整观察者，可链式多次调用。
    pub fn with_observer(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.observers.add(observer);
        self
    }

    /// 添加共享观察者，调用方保留 Arc 以便事后读取其状态。
    pub fn with_shared_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observers.add_shared(observer);
        self
    }

    /// 注册「进度」钩子；每写入一个分块调用一次。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&TaskProgress) + Send + Sync + 'static,
    {
        self.observers.add(OnProgressAdapter(f));
        self
    }

    /// 注册「测速」钩子；每个任务每秒最多一次。
    pub fn with_on_sample_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&ProgressSample) + Send + Sync + 'static,
    {
        self.observers.add(OnSampleAdapter(f));
        self
    }

    /// 注册「结束」钩子；每个任务恰好一次。
    pub fn with_on_finish_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, &str, Result<&FetchOutcome, &FetchError>) + Send + Sync + 'static,
    {
        self.observers.add(OnFinishAdapter(f));
        self
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    /// 根据配置创建下载任务
    pub fn tasks(&self) -> Result<Vec<DownloadTask>, ConfigError> {
        self.config.tasks()
    }

    /// 并发下载全部任务，等待每一个都结束（成功或失败）后返回，结果按任务顺序排列。
    ///
    /// 单个任务失败不会影响其它任务。
    pub async fn run_all(&self, tasks: &[DownloadTask]) -> Vec<TaskReport> {
        info!("开始并发下载 {} 个文件", tasks.len());

        let handles = tasks.iter().map(|task| {
            let client = self.client.clone();
            let task = task.clone();
            let options = self.config.fetch_options();
            let observers = self.observers.clone();

            tokio::spawn(async move {
                let result = fetch(&client, &task, &options, &observers).await;
                observers.run_on_finish(task.order, &task.name, result.as_ref());
                result
            })
        });

        // 屏障：每个任务一个结果
        let joined = join_all(handles).await;

        let reports: Vec<TaskReport> = tasks
            .iter()
            .zip(joined)
            .map(|(task, joined)| {
                let result = match joined {
                    Ok(result) => result,
                    Err(join_err) => {
                        // 任务 panic 时没有机会通知观察者，这里补发
                        let err = FetchError::TaskJoin(join_err);
                        self.observers
                            .run_on_finish(task.order, &task.name, Err(&err));
                        Err(err)
                    }
                };

                if let Err(e) = &result {
                    warn!(
                        "下载失败 [{}] {} (阶段 {}): {}",
                        task.order,
                        task.name,
                        e.phase(),
                        e
                    );
                }

                TaskReport {
                    order: task.order,
                    name: task.name.clone(),
                    destination_path: task.destination_path.clone(),
                    result,
                }
            })
            .collect();

        let ok = reports.iter().filter(|r| r.is_success()).count();
        info!("下载阶段结束：成功 {} 个，失败 {} 个", ok, reports.len() - ok);

        reports
    }

    /// 按顺序逐个解压下载成功的文件；非归档文件为空操作，下载失败的文件跳过。
    ///
    /// 某个归档解压失败只中止该归档，后续文件照常处理。
    pub async fn extract_all(&self, downloads: &[TaskReport]) -> Vec<ExtractReport> {
        let mut reports = Vec::with_capacity(downloads.len());

        for download in downloads {
            if !download.is_success() {
                warn!("跳过解压 [{}] {}：下载未成功", download.order, download.name);
                continue;
            }

            let archive_path = download.destination_path.clone();
            let destination_dir = self.config.destination_dir.clone();
            let result = tokio::task::spawn_blocking(move || extract(&archive_path, &destination_dir))
                .await
                .map_err(ExtractError::TaskJoin)
                .and_then(|r| r);

            if let Err(e) = &result {
                warn!("解压失败 [{}] {}: {}", download.order, download.name, e);
            }

            reports.push(ExtractReport {
                order: download.order,
                name: download.name.clone(),
                result,
            });
        }

        reports
    }

    /// 完整流水线：创建任务 → 并发下载 → 屏障 → 顺序解压。
    pub async fn run(&self) -> Result<PipelineReport, ConfigError> {
        let tasks = self.tasks()?;
        let downloads = self.run_all(&tasks).await;
        let extractions = self.extract_all(&downloads).await;
        Ok(PipelineReport {
            downloads,
            extractions,
        })
    }
}

//! 单文件下载：整文件 GET，分块写盘并更新进度。

use std::time::Instant;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::internal::fetcher::structs::{
    DownloadTask, FetchError, FetchOptions, FetchOutcome, ObserverSet, TaskProgress,
    ThroughputMeter,
};

/// 下载一个任务到其 `destination_path`。
///
/// 顺序：先创建（截断）本地文件，再发请求；任何一步失败都直接返回，不重试，
/// 已写入的部分文件保留在磁盘上。`on_finish` 由调度器负责调用。
pub async fn fetch(
    client: &Client,
    task: &DownloadTask,
    options: &FetchOptions,
    observers: &ObserverSet,
) -> Result<FetchOutcome, FetchError> {
    let chunk_size = options.chunk_size.max(1);

    let mut file = File::create(&task.destination_path)
        .await
        .map_err(FetchError::CreateFile)?;

    info!("开始下载 [{}] {} <- {}", task.order, task.name, task.source_url);

    let resp = client.get(task.source_url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        warn!(
            "下载失败 [{}] {} status={}",
            task.order,
            task.name,
            status.as_u16()
        );
        return Err(FetchError::Status(status));
    }

    let total = resp.content_length();
    task.progress_state.update(TaskProgress {
        order: task.order,
        bytes_transferred: 0,
        total_bytes: total,
    });
    observers.run_on_start(task.order, &task.name, total);

    let mut meter = ThroughputMeter::new(task.order, options.sample_interval, Instant::now());
    let mut stream = resp.bytes_stream();
    let mut bytes_transferred: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;

        for piece in chunk.chunks(chunk_size) {
            file.write_all(piece).await.map_err(FetchError::WriteFile)?;
            bytes_transferred += piece.len() as u64;

            let progress = TaskProgress {
                order: task.order,
                bytes_transferred,
                total_bytes: total,
            };
            task.progress_state.update(progress.clone());
            observers.run_on_progress(&progress);

            if let Some(sample) = meter.observe(bytes_transferred, Instant::now()) {
                debug!(
                    "[{}] {} 已下载 {} 字节，速度 {}",
                    task.order,
                    task.name,
                    bytes_transferred,
                    sample.speed_label()
                );
                observers.run_on_sample(&sample);
            }
        }
    }

    file.flush().await.map_err(FetchError::WriteFile)?;

    info!(
        "下载完成 [{}] {}，共 {} 字节",
        task.order, task.name, bytes_transferred
    );

    Ok(FetchOutcome {
        order: task.order,
        destination_path: task.destination_path.clone(),
        bytes_transferred,
        total_bytes: total,
    })
}

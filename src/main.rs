mod presentation;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use patch_fetch::config::{APP_NAME, PatchConfig};
use patch_fetch::driver::{PatchDriver, PipelineReport};
use patch_fetch::fetcher::ChannelObserver;

/// 下载并解压客户端补丁
#[derive(Debug, Parser)]
#[command(name = "patch-fetch", version)]
struct Cli {
    /// 下载与解压的目标目录，默认当前目录
    destination: Option<PathBuf>,

    /// 以 JSON 行输出进度事件，替代终端进度条
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json);
    tokio::spawn(catch_interrupt());

    let destination = cli.destination.unwrap_or_else(|| PathBuf::from("."));
    let config = match PatchConfig::from_manifest() {
        Ok(config) => config.save_to(&destination),
        Err(e) => {
            error!("补丁清单无效: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("{} -> {}", APP_NAME, destination.display());

    let name_width = config.max_name_width();
    let (observer, events) = ChannelObserver::new();
    let driver = PatchDriver::new(config).with_observer(observer);

    let presenter = if cli.json {
        tokio::spawn(presentation::render_json(events))
    } else {
        tokio::spawn(presentation::render_bars(events, APP_NAME, name_width))
    };

    let report = driver.run().await;
    // 观察者随调度器销毁，事件队列随之关闭，展示任务自然结束
    drop(driver);
    let _ = presenter.await;

    match report {
        Ok(report) => {
            summarize(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("配置错误: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    // 进度条模式下默认只输出警告，避免日志打断进度条
    let default_level = if json { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 收到中断信号直接退出，不等待进行中的下载。
async fn catch_interrupt() {
    if tokio::signal::ctrl_c().await.is_ok() {
        error!("Received interrupt, exiting.");
        std::process::exit(1);
    }
}

fn summarize(report: &PipelineReport) {
    for failed in report.failed_downloads() {
        if let Err(e) = &failed.result {
            warn!("[{}] {} 下载失败: {}", failed.order, failed.name, e);
        }
    }
    for failed in report.failed_extractions() {
        if let Err(e) = &failed.result {
            warn!("[{}] {} 解压失败: {}", failed.order, failed.name, e);
        }
    }
    if report.is_success() {
        info!("全部补丁已下载并解压");
    }
}

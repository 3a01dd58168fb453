//! 终端展示：消费进度事件队列，渲染为进度条或 JSON 行。

use std::collections::HashMap;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use patch_fetch::fetcher::ProgressEvent;
use patch_fetch::states::queue_reactive::QueueReactiveConsumer;

const SPINNER_TICK: Duration = Duration::from_millis(120);

/// 每个事件输出一行 JSON 到 stdout。
pub async fn render_json(mut events: QueueReactiveConsumer<ProgressEvent>) {
    while let Some(event) = events.recv().await {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!("序列化进度事件失败: {}", e),
        }
    }
}

/// 每个文件一条进度条：文件名、百分比、速度。总大小未知时显示转圈。
pub async fn render_bars(
    mut events: QueueReactiveConsumer<ProgressEvent>,
    title: &str,
    name_width: usize,
) {
    let multi = MultiProgress::new();
    let _ = multi.println(title);
    let mut bars: HashMap<usize, ProgressBar> = HashMap::new();

    while let Some(event) = events.recv().await {
        match event {
            ProgressEvent::Started {
                order,
                name,
                total_bytes,
            } => {
                let bar = multi.add(new_bar(total_bytes, name_width));
                bar.set_prefix(name);
                bars.insert(order, bar);
            }
            ProgressEvent::Progress {
                order, percentage, ..
            } => {
                if let Some(bar) = bars.get(&order) {
                    bar.set_position(u64::from(percentage));
                }
            }
            ProgressEvent::Sample { order, speed, .. } => {
                if let Some(bar) = bars.get(&order) {
                    bar.set_message(speed);
                    bar.tick();
                }
            }
            ProgressEvent::Finished {
                order, name, error, ..
            } => match (bars.get(&order), error) {
                (Some(bar), None) => bar.finish_with_message("完成"),
                (Some(bar), Some(e)) => bar.abandon_with_message(format!("失败: {}", e)),
                // 收到响应头之前就失败了，没有进度条
                (None, Some(e)) => {
                    let _ = multi.println(format!("{:<width$} 失败: {}", name, e, width = name_width));
                }
                (None, None) => {}
            },
        }
    }
}

/// 总大小已知时为百分比进度条，否则为自动刷新的转圈。
fn new_bar(total_bytes: Option<u64>, name_width: usize) -> ProgressBar {
    match total_bytes {
        Some(_) => ProgressBar::new(100).with_style(bar_style(name_width)),
        None => {
            let spinner = ProgressBar::new_spinner().with_style(spinner_style(name_width));
            // 测速事件每秒最多一次，转圈需要自己刷新
            spinner.enable_steady_tick(SPINNER_TICK);
            spinner
        }
    }
}

fn bar_style(name_width: usize) -> ProgressStyle {
    let template = format!(
        "{{prefix:<{}}} [{{bar:40}}] {{pos:>3}}% {{msg}}",
        name_width
    );
    ProgressStyle::with_template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

fn spinner_style(name_width: usize) -> ProgressStyle {
    let template = format!("{{prefix:<{}}} {{spinner}} {{msg}}", name_width);
    ProgressStyle::with_template(&template).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

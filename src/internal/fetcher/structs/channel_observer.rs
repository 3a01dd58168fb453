use std::collections::HashMap;
use std::sync::Mutex;

use crate::internal::fetcher::traits::ProgressObserver;
use crate::internal::states::queue_reactive::{QueueReactiveConsumer, QueueReactiveProperty};

use super::{FetchError, FetchOutcome, ProgressEvent, ProgressSample, TaskProgress};

/// 把观察者回调转成 [`ProgressEvent`] 推入队列，展示层在另一个任务里消费。
///
/// 逐块进度会按整数百分比去重，每个任务最多 101 条 `Progress` 事件；
/// 总大小未知的任务只发送测速事件。
#[derive(Debug)]
pub struct ChannelObserver {
    producer: QueueReactiveProperty<ProgressEvent>,
    last_percentage: Mutex<HashMap<usize, u8>>,
}

impl ChannelObserver {
    /// 返回 (观察者, 事件消费者)。观察者及其所有拷贝销毁后，消费者的 `recv` 返回 `None`。
    pub fn new() -> (Self, QueueReactiveConsumer<ProgressEvent>) {
        let (producer, consumer) = QueueReactiveProperty::new();
        let observer = Self {
            producer,
            last_percentage: Mutex::new(HashMap::new()),
        };
        (observer, consumer)
    }

    fn push(&self, event: ProgressEvent) {
        // 展示层已退出时丢弃事件即可
        let _ = self.producer.send(event);
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_start(&self, order: usize, name: &str, total: Option<u64>) {
        self.push(ProgressEvent::Started {
            order,
            name: name.to_string(),
            total_bytes: total,
        });
    }

    fn on_progress(&self, progress: &TaskProgress) {
        let Some(pct) = progress.percentage() else {
            return;
        };
        let pct = pct.clamp(0.0, 100.0) as u8;

        let changed = {
            let mut last = self
                .last_percentage
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            let prev = last.insert(progress.order, pct);
            prev != Some(pct)
        };

        if changed {
            self.push(ProgressEvent::Progress {
                order: progress.order,
                bytes_transferred: progress.bytes_transferred,
                percentage: pct,
            });
        }
    }

    fn on_sample(&self, sample: &ProgressSample) {
        self.push(ProgressEvent::Sample {
            order: sample.task_order,
            bytes_transferred: sample.bytes_transferred,
            bytes_per_second: sample.bytes_per_second,
            speed: sample.speed_label(),
        });
    }

    fn on_finish(&self, order: usize, name: &str, result: Result<&FetchOutcome, &FetchError>) {
        let (bytes_transferred, error) = match result {
            Ok(outcome) => (Some(outcome.bytes_transferred), None),
            Err(e) => (None, Some(e.to_string())),
        };
        self.push(ProgressEvent::Finished {
            order,
            name: name.to_string(),
            bytes_transferred,
            error,
        });
    }
}

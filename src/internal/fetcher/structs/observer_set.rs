use std::sync::Arc;

use crate::internal::fetcher::traits::ProgressObserver;

use super::{FetchError, FetchOutcome, ProgressSample, TaskProgress};

/// 观察者容器：多个观察者，按注册顺序依次通知。Clone 只复制 Arc。
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn ProgressObserver>>,
}

impl ObserverSet {
    /// 添加一个观察者；支持多次调用。
    pub fn add(&mut self, observer: impl ProgressObserver + 'static) {
        self.observers.push(Arc::new(observer));
    }

    /// 添加一个已共享的观察者，调用方保留句柄以便事后检查。
    pub fn add_shared(&mut self, observer: Arc<dyn ProgressObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn run_on_start(&self, order: usize, name: &str, total: Option<u64>) {
        for o in &self.observers {
            o.on_start(order, name, total);
        }
    }

    pub fn run_on_progress(&self, progress: &TaskProgress) {
        for o in &self.observers {
            o.on_progress(progress);
        }
    }

    pub fn run_on_sample(&self, sample: &ProgressSample) {
        for o in &self.observers {
            o.on_sample(sample);
        }
    }

    pub fn run_on_finish(
        &self,
        order: usize,
        name: &str,
        result: Result<&FetchOutcome, &FetchError>,
    ) {
        for o in &self.observers {
            o.on_finish(order, name, result);
        }
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}

//! 单阶段观察者适配器：将闭包包装成 [`ProgressObserver`]，供 `with_xx_hook` 使用。

use crate::internal::fetcher::traits::ProgressObserver;

use super::{FetchError, FetchOutcome, ProgressSample, TaskProgress};

/// 仅实现「进度」的适配器。
pub(crate) struct OnProgressAdapter<F>(pub(crate) F);

impl<F> ProgressObserver for OnProgressAdapter<F>
where
    F: Fn(&TaskProgress) + Send + Sync + 'static,
{
    fn on_progress(&self, progress: &TaskProgress) {
        (self.0)(progress);
    }
}

/// 仅实现「测速」的适配器。
pub(crate) struct OnSampleAdapter<F>(pub(crate) F);

impl<F> ProgressObserver for OnSampleAdapter<F>
where
    F: Fn(&ProgressSample) + Send + Sync + 'static,
{
    fn on_sample(&self, sample: &ProgressSample) {
        (self.0)(sample);
    }
}

/// 仅实现「结束」的适配器。
pub(crate) struct OnFinishAdapter<F>(pub(crate) F);

impl<F> ProgressObserver for OnFinishAdapter<F>
where
    F: Fn(usize, &str, Result<&FetchOutcome, &FetchError>) + Send + Sync + 'static,
{
    fn on_finish(&self, order: usize, name: &str, result: Result<&FetchOutcome, &FetchError>) {
        (self.0)(order, name, result);
    }
}

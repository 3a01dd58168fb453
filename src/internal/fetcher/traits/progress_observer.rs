//! 下载进度观察者接口，展示层通过它接收进度，下载流程本身不依赖任何界面库。

use crate::internal::fetcher::structs::{FetchError, FetchOutcome, ProgressSample, TaskProgress};

/// 下载流程观察者：在「开始 / 进度 / 测速 / 结束」四个时机收到通知。
///
/// 同一个观察者会被所有并发任务共享，所以方法只拿 `&self`，
/// 需要可变状态时请自行加锁或转发到通道（见 [`crate::fetcher::ChannelObserver`]）。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用调度器的 `with_on_progress_hook` / `with_on_sample_hook` 传入闭包；
/// - **完整观察者**：实现本 trait，通过调度器的 `with_observer` 注册。
pub trait ProgressObserver: Send + Sync {
    /// 收到响应头后调用，`total` 为声明的总大小。
    fn on_start(&self, _order: usize, _name: &str, _total: Option<u64>) {}

    /// 每写入一个分块后调用。
    fn on_progress(&self, _progress: &TaskProgress) {}

    /// 测速采样，每个任务每秒最多一次。
    fn on_sample(&self, _sample: &ProgressSample) {}

    /// 任务结束（成功或失败）时调用，每个任务恰好一次。
    fn on_finish(&self, _order: usize, _name: &str, _result: Result<&FetchOutcome, &FetchError>) {}
}

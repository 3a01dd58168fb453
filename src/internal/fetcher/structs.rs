pub mod channel_observer;
pub mod download_task;
pub mod fetch_error;
pub mod fetch_options;
pub mod fetch_outcome;
pub mod observer_adapters;
pub mod observer_set;
pub mod progress_event;
pub mod progress_sample;
pub mod task_progress;
pub mod throughput_meter;

// 重导出公共类型
pub use channel_observer::ChannelObserver;
pub use download_task::DownloadTask;
pub use fetch_error::FetchError;
pub use fetch_options::FetchOptions;
pub use fetch_outcome::FetchOutcome;
pub use observer_set::ObserverSet;
pub use progress_event::ProgressEvent;
pub use progress_sample::ProgressSample;
pub use task_progress::TaskProgress;
pub use throughput_meter::ThroughputMeter;

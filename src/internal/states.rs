//! 响应式状态：单任务进度属性（watch 广播）与进度事件队列（mpsc FIFO）。

pub mod queue_reactive;
pub mod reactive_core;

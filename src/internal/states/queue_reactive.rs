//! # QueueReactiveProperty — 事件队列
//!
//! 基于 tokio::sync::mpsc 的单向无界队列，用于把下载线程里的进度事件交给展示层。
//!
//! - 生产者可 Clone（每个下载任务一份），消费者只有一个
//! - 严格 FIFO
//! - 所有生产者销毁后，消费者的 `recv` 返回 `None`，展示层据此结束循环

use tokio::sync::mpsc;

/// 队列生产者端
#[derive(Debug)]
pub struct QueueReactiveProperty<T> {
    sender: mpsc::UnboundedSender<T>,
}

// 手写 Clone，避免要求 T: Clone
impl<T> Clone for QueueReactiveProperty<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// 队列消费者端，不可 Clone。
#[derive(Debug)]
pub struct QueueReactiveConsumer<T> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> QueueReactiveProperty<T>
where
    T: Send + 'static,
{
    /// 返回 (生产者, 消费者)。
    pub fn new() -> (Self, QueueReactiveConsumer<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, QueueReactiveConsumer { receiver })
    }

    /// 推送一条消息，立即返回；消费者已关闭时原样退回消息。
    pub fn send(&self, value: T) -> Result<(), T> {
        self.sender.send(value).map_err(|e| e.0)
    }

    /// 消费者是否已关闭
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<T> QueueReactiveConsumer<T>
where
    T: Send + 'static,
{
    /// 异步接收下一条消息；队列为空时挂起，所有生产者销毁后返回 `None`。
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// 非阻塞接收
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// 取出当前已入队的全部消息（不等待）。
    pub fn drain(&mut self) -> Vec<T> {
        let mut items = Vec::new();
        while let Ok(item) = self.receiver.try_recv() {
            items.push(item);
        }
        items
    }
}

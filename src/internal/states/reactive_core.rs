//! # ReactiveProperty — 响应式属性
//!
//! 基于 [`tokio::sync::watch`] 的轻量属性容器：写入方只有一个（下载任务自身），
//! 读取方可以有任意多个（界面、测试、日志）。读写均不阻塞，适合下载进度这类高频更新。
//!
//! ```rust,no_run
//! use patch_fetch::states::reactive_core::ReactiveProperty;
//!
//! let prop = ReactiveProperty::new(0u64);
//! prop.update(1);
//! prop.update_field(|v| *v += 1);
//! assert_eq!(prop.get_current(), 2);
//! ```

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

/// 响应式属性错误
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 所有属性句柄都已销毁，不会再有新值
    #[error("属性已被销毁: {0}")]
    Closed(#[from] RecvError),
}

/// 响应式属性，Clone 后共享同一个值。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(value);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// 覆盖当前值并通知所有监听者；没有监听者时同样会保存新值。
    pub fn update(&self, new_value: T) -> &Self {
        self.sender.send_replace(new_value);
        self
    }

    /// 使用闭包原地修改部分字段。
    pub fn update_field<F>(&self, updater: F) -> &Self
    where
        F: FnOnce(&mut T),
    {
        self.sender.send_modify(updater);
        self
    }

    /// 当前值的快照（会 clone）。
    pub fn get_current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// 对当前值应用转换函数，避免整体 clone。
    pub fn map<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.sender.borrow())
    }

    /// 创建监听器；只会收到创建之后发生的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.sender.subscribe(),
        }
    }
}

/// 属性监听器
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<T>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 等待下一次变化并返回最新值；属性全部销毁后返回错误。
    ///
    /// 连续多次更新只保证拿到最后一次的值，中间值可能被合并。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> T {
        self.receiver.borrow().clone()
    }
}

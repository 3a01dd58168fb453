//! 调度器领域模块：为每个文件并发启动一个下载任务，全部结束（屏障）后再顺序解压。
//!
//! 使用方式：`PatchDriver::new(config).with_observer(observer).run().await`

pub mod structs;

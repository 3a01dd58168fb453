//! 下载器领域模块：每个补丁文件一个下载任务，整文件 GET 后流式写盘，
//! 过程中通过响应式属性与观察者两条通道对外报告进度和速度。
//!
//! 使用方式：`fetch(&client, &task, &options, &observers).await`，
//! 一般由 [`crate::driver::PatchDriver`] 统一调度，无需直接调用。

pub mod functions;
pub mod structs;
pub mod traits;

//! 解压器领域模块：把下载好的 `.tar.gz` 解包到目标目录。
//!
//! 只处理目录和普通文件两类条目，其余类型（符号链接、设备文件等）记录后跳过。
//! 解压是同步阻塞操作，调度器会把它放到 tokio 的阻塞线程池里逐个执行。

pub mod functions;
pub mod structs;

//! 配置领域模块：编译期补丁清单 + 运行期显式配置结构体。
//!
//! 清单（文件列表、基础 URL）由 build.rs 从 patches.toml 生成，不提供运行期修改；
//! 测试与调用方通过 [`structs::PatchConfig`] 的链式方法替换为自己的地址和文件。

pub mod manifest;
#[cfg(test)]
pub(crate) mod manifest_parser;
pub mod structs;

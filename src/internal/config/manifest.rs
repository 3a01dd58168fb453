//! 编译期补丁清单，内容由 build.rs 根据 patches.toml 生成。

include!(concat!(env!("OUT_DIR"), "/patch_manifest.rs"));

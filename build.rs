//! 构建时根据 patches.toml 生成补丁清单常量（应用名、基础 URL、文件列表），供 config::manifest 模块 include! 使用。

use std::env;
use std::fs;
use std::path::Path;

#[path = "src/internal/config/manifest_parser.rs"]
mod manifest_parser;

use manifest_parser::{parse_files_array, parse_string_value};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let patches_path = Path::new(&manifest_dir).join("patches.toml");
    println!("cargo:rerun-if-changed=patches.toml");
    println!("cargo:rerun-if-changed=src/internal/config/manifest_parser.rs");

    let content = if patches_path.exists() {
        fs::read_to_string(&patches_path).unwrap_or_default()
    } else {
        String::new()
    };

    let app_name = parse_string_value(&content, "app_name")
        .unwrap_or_else(|| "Patch Downloader".to_string());
    let base_url = parse_string_value(&content, "base_url").unwrap_or_default();
    let files = parse_files_array(&content).unwrap_or_default();

    let mut files_array = String::new();
    for file in &files {
        files_array.push_str(&format!("    {:?},\n", file));
    }

    let code = format!(
        r#"// 自动生成，请勿手改。清单来自 patches.toml

/// 应用名称，用于窗口标题与日志。
pub const APP_NAME: &str = {app_name:?};

/// 补丁文件所在的基础 URL。
pub const BASE_URL: &str = {base_url:?};

/// 需要下载的文件列表（顺序即任务序号）。
pub const FILES: &[&str] = &[
{files}];
"#,
        app_name = app_name,
        base_url = base_url,
        files = files_array,
    );

    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("patch_manifest.rs");
    fs::write(out_path, code).expect("write patch_manifest.rs");
}

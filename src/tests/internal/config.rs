//! 配置测试：编译期清单、基础 URL 规范化、任务创建与文件名校验。

use std::path::Path;

use crate::config::{
    BASE_URL, ConfigError, DEFAULT_CHUNK_SIZE, DEFAULT_SAMPLE_INTERVAL, FILES, PatchConfig,
};

#[test]
fn manifest_matches_patch_list() {
    assert_eq!(
        FILES,
        &["info.txt", "AraxiaPatchv1.tar.gz", "HDPatchv1.tar.gz"]
    );
    assert!(BASE_URL.ends_with('/'));

    let config = PatchConfig::from_manifest().unwrap();
    assert_eq!(config.files.len(), 3);
    assert_eq!(config.base_url.as_str(), BASE_URL);
    assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(config.sample_interval, DEFAULT_SAMPLE_INTERVAL);
}

#[test]
fn base_url_gets_trailing_slash() {
    let config = PatchConfig::new("http://example.com/patches", ["a.txt"]).unwrap();
    assert_eq!(config.base_url.as_str(), "http://example.com/patches/");

    let tasks = config.tasks().unwrap();
    // 没有补 `/` 的话 join 会把 patches 这一级替换掉
    assert_eq!(
        tasks[0].source_url.as_str(),
        "http://example.com/patches/a.txt"
    );
}

#[test]
fn base_url_errors() {
    assert!(matches!(
        PatchConfig::new("   ", ["a.txt"]),
        Err(ConfigError::EmptyBaseUrl)
    ));
    assert!(matches!(
        PatchConfig::new("not a url", ["a.txt"]),
        Err(ConfigError::InvalidBaseUrl(_))
    ));

    let config = PatchConfig::new("http://example.com/", ["a.txt"]).unwrap();
    assert!(config.with_base_url("").is_err());
}

#[test]
fn tasks_follow_file_order() {
    let config = PatchConfig::new("http://example.com/u/", ["info.txt", "p.tar.gz", "x.bin"])
        .unwrap()
        .save_to("/tmp/client");

    let tasks = config.tasks().unwrap();
    assert_eq!(tasks.len(), 3);

    for (i, task) in tasks.iter().enumerate() {
        assert_eq!(task.order, i + 1);
        assert_eq!(task.name, config.files[i]);
        assert_eq!(
            task.destination_path,
            Path::new("/tmp/client").join(&config.files[i])
        );
        assert_eq!(task.bytes_transferred(), 0);
        assert_eq!(task.total_bytes(), None);
    }

    assert_eq!(tasks[1].source_url.as_str(), "http://example.com/u/p.tar.gz");
    assert!(!tasks[0].is_archive());
    assert!(tasks[1].is_archive());
}

#[test]
fn invalid_file_names_rejected() {
    for bad in ["", ".", "..", "../x.txt", "a/b.txt", "a\\b.txt", "/etc/passwd"] {
        let config = PatchConfig::new("http://example.com/", [bad]).unwrap();
        match config.tasks() {
            Err(ConfigError::InvalidFileName(name)) => assert_eq!(name, bad),
            other => panic!("{:?} 应被拒绝，实际 {:?}", bad, other.map(|t| t.len())),
        }
    }
}

#[test]
fn zero_chunk_size_rejected() {
    let config = PatchConfig::new("http://example.com/", ["a.txt"])
        .unwrap()
        .with_chunk_size(0);
    assert!(matches!(config.tasks(), Err(ConfigError::ZeroChunkSize)));
}

#[test]
fn empty_file_list_gives_no_tasks() {
    let config = PatchConfig::new("http://example.com/", Vec::<String>::new()).unwrap();
    assert!(config.tasks().unwrap().is_empty());
    assert_eq!(config.max_name_width(), 0);
}

#[test]
fn max_name_width_counts_chars() {
    let config = PatchConfig::new("http://example.com/", ["a.txt", "补丁包.tar.gz"]).unwrap();
    assert_eq!(config.max_name_width(), "补丁包.tar.gz".chars().count());
}

#[test]
fn manifest_parser_anchors_files_key() {
    use crate::internal::config::manifest_parser::{parse_files_array, parse_string_value};

    let content = r#"
# files 列表见下方
app_name = "Patch files"
base_url = "http://example.com/files/"
files = [
    "info.txt",  # 说明
    "a.tar.gz",
]
"#;

    assert_eq!(
        parse_string_value(content, "app_name").as_deref(),
        Some("Patch files")
    );
    assert_eq!(
        parse_string_value(content, "base_url").as_deref(),
        Some("http://example.com/files/")
    );
    assert_eq!(
        parse_files_array(content).unwrap(),
        vec!["info.txt".to_string(), "a.tar.gz".to_string()]
    );

    assert_eq!(parse_files_array("app_name = \"files\"\n"), None);
    assert_eq!(
        parse_files_array("files = [\"one.bin\"]").unwrap(),
        vec!["one.bin".to_string()]
    );
}

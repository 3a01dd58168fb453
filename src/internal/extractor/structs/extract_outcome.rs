use std::path::PathBuf;

/// 单次解压的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// 文件名不以 `.tar.gz` 结尾，未做任何操作
    NotAnArchive,
    /// 已解压
    Extracted(ExtractSummary),
}

/// 解压统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub directories: usize,
    pub files: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// 被跳过的条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 不支持的条目类型，附原始类型字节
    UnsupportedKind(u8),
    /// 绝对路径或包含 `..`，会写到目标目录之外
    UnsafePath,
}

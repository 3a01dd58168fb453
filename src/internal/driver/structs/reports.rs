use std::path::PathBuf;

use crate::internal::extractor::structs::{ExtractError, ExtractOutcome};
use crate::internal::fetcher::structs::{FetchError, FetchOutcome};

/// 单个下载任务的最终结果。
#[derive(Debug)]
pub struct TaskReport {
    pub order: usize,
    pub name: String,
    pub destination_path: PathBuf,
    pub result: Result<FetchOutcome, FetchError>,
}

impl TaskReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// 单个文件的解压结果。
#[derive(Debug)]
pub struct ExtractReport {
    pub order: usize,
    pub name: String,
    pub result: Result<ExtractOutcome, ExtractError>,
}

/// 整条流水线（下载 + 解压）的结果。
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// 按任务序号排列
    pub downloads: Vec<TaskReport>,
    /// 只包含下载成功的文件，按任务序号排列
    pub extractions: Vec<ExtractReport>,
}

impl PipelineReport {
    pub fn failed_downloads(&self) -> impl Iterator<Item = &TaskReport> {
        self.downloads.iter().filter(|r| !r.is_success())
    }

    pub fn failed_extractions(&self) -> impl Iterator<Item = &ExtractReport> {
        self.extractions.iter().filter(|r| r.result.is_err())
    }

    /// 所有下载和解压都成功
    pub fn is_success(&self) -> bool {
        self.failed_downloads().next().is_none() && self.failed_extractions().next().is_none()
    }
}

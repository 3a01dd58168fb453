pub mod patch_driver;
pub mod reports;

// 重导出公共类型
pub use patch_driver::PatchDriver;
pub use reports::{ExtractReport, PipelineReport, TaskReport};

pub mod archive_entry;
pub mod extract_error;
pub mod extract_outcome;

// 重导出公共类型
pub use archive_entry::{ArchiveEntry, EntryKind};
pub use extract_error::ExtractError;
pub use extract_outcome::{ExtractOutcome, ExtractSummary, SkipReason, SkippedEntry};

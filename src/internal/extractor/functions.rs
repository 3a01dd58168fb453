pub mod extract;

pub use extract::{ARCHIVE_SUFFIX, extract, is_archive};

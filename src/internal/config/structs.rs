pub mod config_error;
pub mod patch_config;

// 重导出公共类型
pub use config_error::ConfigError;
pub use patch_config::{DEFAULT_CHUNK_SIZE, DEFAULT_SAMPLE_INTERVAL, PatchConfig};

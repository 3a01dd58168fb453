pub mod fetch;
pub mod format_speed;

pub use fetch::fetch;
pub use format_speed::format_speed;

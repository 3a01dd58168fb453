pub mod config;
pub mod driver;
pub mod entrance;
pub mod extractor;
pub mod fetcher;
pub mod states;

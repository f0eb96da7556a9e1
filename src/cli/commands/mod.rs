//! CLI command implementations

pub mod config;
pub mod crawl;

pub use config::ConfigArgs;
pub use crawl::CrawlArgs;

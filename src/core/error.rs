//! Error types and error handling for the mdcorpus crawler.
//!
//! This module defines the error types used throughout the
//! application. Per-resource failures (listing, fetch, decode) are
//! recoverable: the pipeline logs them and moves on to the next
//! resource. Only configuration errors abort a run.

use thiserror::Error;

/// Result type alias for mdcorpus operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Main error type for the crawler
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Listing failed for '{path}': {reason}")]
    Listing { path: String, reason: String },

    #[error("Fetch failed for '{path}': {reason}")]
    Fetch { path: String, reason: String },

    #[error("Unexpected content encoding for '{path}': {encoding}")]
    UnexpectedEncoding { path: String, encoding: String },

    #[error("Failed to decode '{path}': {reason}")]
    Decode { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CrawlError {
    /// Check whether this error is recoverable at the pipeline level.
    ///
    /// Recoverable errors affect a single subtree or resource; the
    /// crawl continues past them. Everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CrawlError::Listing { .. }
                | CrawlError::Fetch { .. }
                | CrawlError::UnexpectedEncoding { .. }
                | CrawlError::Decode { .. }
        )
    }

    /// Check if this is a configuration error (invalid startup input)
    pub fn is_config(&self) -> bool {
        matches!(self, CrawlError::Config(_))
    }
}

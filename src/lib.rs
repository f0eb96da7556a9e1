//! mdcorpus - Markdown corpus builder for retrieval indexing
//!
//! Crawls a documentation tree hosted behind a GitHub-style
//! contents API, segments each markdown resource at heading
//! boundaries, re-splits over-length sections into token-bounded
//! windows, and persists the result as a JSON corpus mapping
//! resource URLs to ordered chunk lists.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (CLI-agnostic)
//!   - config, error, types
//!   - remote (content service trait, GitHub client, decoding)
//!   - crawler (tree walking, segmentation, splitting, pipeline)
//!   - corpus (assembly, JSON persistence)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Properties
//!
//! - Every chunk stays within the configured token budget
//! - Chunk order matches document order end to end
//! - One failing subtree or resource never aborts the crawl

// Core domain logic (CLI-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::corpus::Corpus;
pub use core::crawler::CrawlPipeline;
pub use core::error::{CrawlError, Result};
pub use core::remote::{ContentService, GithubClient};
pub use core::types::*;

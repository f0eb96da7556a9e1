//! Core domain logic (transport-agnostic)
//!
//! This module contains all business logic that is independent of
//! the command-line surface.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + defaults)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **remote**: Content service trait, GitHub client, decoding
//! - **crawler**: Tree walking, segmentation, splitting, pipeline
//! - **corpus**: Corpus assembly and JSON persistence

pub mod config;
pub mod corpus;
pub mod crawler;
pub mod error;
pub mod remote;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use corpus::Corpus;
pub use error::{CrawlError, Result};

//! Core data types for the mdcorpus crawler.
//!
//! This module defines the data structures used throughout the
//! application: listing entries from the remote tree, raw content
//! payloads, chunks, and crawl statistics.

use serde::{Deserialize, Serialize};

/// Kind of a tree entry as reported by the content service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A leaf resource (retrievable document)
    File,
    /// A directory that can be listed further
    Dir,
    /// Anything else (symlinks, submodules); skipped by the walker
    #[serde(other)]
    Other,
}

/// One entry from a directory listing.
///
/// Transient: consumed during the walk, never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Entry name (last path segment)
    pub name: String,

    /// Entry kind ("file" or "dir" on the wire)
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Full path of the entry within the tree
    pub path: String,
}

/// Raw content of a resource before transport decoding
#[derive(Debug, Clone, Deserialize)]
pub struct ContentPayload {
    /// Encoded content bytes (base64, possibly line-wrapped)
    pub content: String,

    /// Transport encoding announced by the service
    pub encoding: String,
}

/// A single text chunk cut from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The actual text content
    pub text: String,

    /// Path of the source resource within the tree
    pub source_path: String,

    /// Sequential chunk number within the resource (0-based,
    /// document order)
    pub chunk_index: usize,
}

/// Statistics from a crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlStats {
    /// Number of eligible resources discovered by the walk
    pub resources_discovered: usize,

    /// Number of resources that contributed chunks to the corpus
    pub resources_chunked: usize,

    /// Number of resources skipped (fetch/decode failure or no
    /// usable content)
    pub resources_skipped: usize,

    /// Number of subtrees whose listing failed during the walk
    pub listing_failures: usize,

    /// Total chunks created
    pub chunks_created: usize,

    /// Crawl duration in milliseconds
    pub duration_ms: u64,
}

//! Remote content service abstraction.
//!
//! The crawler talks to the remote tree through the
//! [`ContentService`] trait: one operation to list a directory, one
//! to retrieve a resource's raw payload, and a key builder that
//! turns a tree path into the stable corpus identifier. The
//! production implementation is [`GithubClient`]; tests substitute
//! in-memory services.

pub mod github;

pub use github::GithubClient;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::core::error::{CrawlError, Result};
use crate::core::types::{ContentPayload, TreeEntry};

/// Transport encoding the fetcher expects from the service
pub const EXPECTED_ENCODING: &str = "base64";

/// Read-only view of a remote document tree
#[async_trait]
pub trait ContentService: Send + Sync {
    /// List the entries of one directory, in service order
    async fn list_children(&self, path: &str) -> Result<Vec<TreeEntry>>;

    /// Retrieve the raw payload of one resource
    async fn fetch_content(&self, path: &str) -> Result<ContentPayload>;

    /// Build the stable corpus identifier for a resource path
    fn resource_url(&self, path: &str) -> String;
}

/// Decoding adapter over a [`ContentService`].
///
/// Turns raw payloads into document text: validates the announced
/// transport encoding, strips the line wrapping the service applies
/// to base64 bodies, decodes, and UTF-8-validates. All failures are
/// typed errors; the caller treats a failed fetch as "zero chunks
/// for this resource" and moves on.
pub struct ContentFetcher<'a> {
    service: &'a dyn ContentService,
}

impl<'a> ContentFetcher<'a> {
    /// Create a fetcher over the given service
    pub fn new(service: &'a dyn ContentService) -> Self {
        Self { service }
    }

    /// Fetch and decode one resource to text
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let payload = self.service.fetch_content(path).await?;

        if payload.encoding != EXPECTED_ENCODING {
            return Err(CrawlError::UnexpectedEncoding {
                path: path.to_string(),
                encoding: payload.encoding,
            });
        }

        // The contents API wraps base64 bodies at 60 columns
        let compact: String = payload
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = BASE64.decode(compact).map_err(|e| CrawlError::Decode {
            path: path.to_string(),
            reason: format!("invalid base64: {e}"),
        })?;

        String::from_utf8(bytes).map_err(|e| CrawlError::Decode {
            path: path.to_string(),
            reason: format!("invalid UTF-8: {e}"),
        })
    }
}

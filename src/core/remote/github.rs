//! GitHub contents API client.
//!
//! Implements [`ContentService`] over the
//! `GET /repos/{owner}/{repo}/contents/{path}` endpoint. Listing a
//! directory returns a JSON array of entries; listing or fetching
//! can instead return a JSON object with a `message` field (bad
//! credentials, rate limiting, missing path), which is surfaced as
//! a typed per-resource error rather than a parse failure.

use async_trait::async_trait;
use std::time::Duration;

use crate::core::config::RemoteConfig;
use crate::core::error::{CrawlError, Result};
use crate::core::remote::ContentService;
use crate::core::types::{ContentPayload, TreeEntry};

/// Client for a GitHub-style contents API
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    owner: String,
    repo: String,
    token: String,
}

impl GithubClient {
    /// Create a new client for one repository.
    ///
    /// The underlying HTTP client carries a per-request timeout so a
    /// stalled call cannot hang the whole crawl.
    pub fn new(config: &RemoteConfig, owner: &str, repo: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mdcorpus/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CrawlError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
        })
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.owner, self.repo, path
        )
    }

    /// Issue one authenticated GET and return the parsed JSON body.
    ///
    /// Transport errors, non-2xx statuses and unparseable bodies all
    /// come back as reason strings for the caller to wrap in the
    /// appropriate error kind.
    async fn get_json(&self, path: &str) -> std::result::Result<serde_json::Value, String> {
        let url = self.contents_url(path);
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| format!("request error: {e}"))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("invalid JSON body: {e}"))?;

        // Error responses carry a human-readable message payload
        if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
            return Err(message.to_string());
        }
        if !status.is_success() {
            return Err(format!("HTTP {status}"));
        }

        Ok(body)
    }
}

#[async_trait]
impl ContentService for GithubClient {
    async fn list_children(&self, path: &str) -> Result<Vec<TreeEntry>> {
        tracing::debug!("Listing {}", self.contents_url(path));

        let body = self.get_json(path).await.map_err(|reason| CrawlError::Listing {
            path: path.to_string(),
            reason,
        })?;

        serde_json::from_value(body).map_err(|e| CrawlError::Listing {
            path: path.to_string(),
            reason: format!("unexpected listing shape: {e}"),
        })
    }

    async fn fetch_content(&self, path: &str) -> Result<ContentPayload> {
        tracing::debug!("Fetching {}", self.contents_url(path));

        let body = self.get_json(path).await.map_err(|reason| CrawlError::Fetch {
            path: path.to_string(),
            reason,
        })?;

        serde_json::from_value(body).map_err(|e| CrawlError::Fetch {
            path: path.to_string(),
            reason: format!("unexpected content shape: {e}"),
        })
    }

    fn resource_url(&self, path: &str) -> String {
        self.contents_url(path)
    }
}

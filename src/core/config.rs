//! Configuration management for the mdcorpus crawler.
//!
//! This module handles loading configuration from TOML files, with
//! sensible defaults for all settings. CLI flags override file
//! values field by field; the auth token is never read from the
//! config file (it comes from the CLI or the environment only).

use crate::core::error::{CrawlError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Crawl traversal configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlConfig {
    /// Path within the repository tree to start the walk from
    #[serde(default = "default_root_path")]
    pub root_path: String,

    /// File extension filter for eligible leaf resources
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Maximum directory nesting depth before a subtree is skipped
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Maximum whitespace-delimited tokens per chunk
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Emit text appearing before the first heading as a leading
    /// chunk instead of dropping it
    #[serde(default)]
    pub keep_preamble: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Path of the persisted corpus file
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

/// Remote content service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL of the contents API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_root_path() -> String {
    String::new()
}

fn default_extension() -> String {
    ".md".to_string()
}

fn default_max_depth() -> usize {
    32
}

fn default_max_tokens() -> usize {
    500
}

fn default_output_path() -> PathBuf {
    PathBuf::from("corpus.json")
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            extension: default_extension(),
            max_depth: default_max_depth(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            keep_preamble: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file.
    ///
    /// With no path, all defaults apply. A named file that cannot
    /// be read or parsed is a fatal configuration error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|e| {
                    CrawlError::Config(format!(
                        "Cannot read config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                let config: Config = toml::from_str(&contents)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_tokens == 0 {
            return Err(CrawlError::Config(
                "chunking.max_tokens must be at least 1".to_string(),
            ));
        }
        if self.crawl.max_depth == 0 {
            return Err(CrawlError::Config(
                "crawl.max_depth must be at least 1".to_string(),
            ));
        }
        if !self.crawl.extension.starts_with('.') {
            return Err(CrawlError::Config(format!(
                "crawl.extension must start with a dot, got '{}'",
                self.crawl.extension
            )));
        }
        Ok(())
    }

    /// Log the effective configuration at startup
    pub fn log_config(&self) {
        tracing::info!(
            "Config: root='{}' ext='{}' max_depth={} max_tokens={} keep_preamble={} output={:?}",
            self.crawl.root_path,
            self.crawl.extension,
            self.crawl.max_depth,
            self.chunking.max_tokens,
            self.chunking.keep_preamble,
            self.output.path,
        );
    }
}

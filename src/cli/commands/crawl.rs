//! Crawl command - build a chunk corpus from a remote tree

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::crawler::CrawlPipeline;
use crate::core::remote::GithubClient;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the crawl command
#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Repository to crawl, as owner/name (e.g. sveltejs/kit)
    pub repo: String,

    /// Path within the repository tree to start from
    #[arg(long, short = 'p')]
    pub path: Option<String>,

    /// File extension filter for eligible resources
    #[arg(long)]
    pub extension: Option<String>,

    /// Maximum whitespace-delimited tokens per chunk
    #[arg(long)]
    pub max_tokens: Option<usize>,

    /// Emit text before the first heading as a leading chunk
    #[arg(long)]
    pub keep_preamble: bool,

    /// Output file for the corpus
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// API auth token (or set GITHUB_TOKEN)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Suppress the human-readable summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl CrawlArgs {
    /// Apply CLI overrides on top of a loaded configuration.
    ///
    /// Only flags actually provided replace file values; absent
    /// flags leave the file's settings intact. `--keep-preamble`
    /// can enable the preamble but never clears a value the config
    /// file already set.
    fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.path {
            config.crawl.root_path = path.clone();
        }
        if let Some(extension) = &self.extension {
            config.crawl.extension = extension.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.chunking.max_tokens = max_tokens;
        }
        if self.keep_preamble {
            config.chunking.keep_preamble = true;
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
    }
}

/// Crawl result response
#[derive(Debug, Serialize)]
pub struct CrawlResponse {
    pub repo: String,
    pub root_path: String,
    pub resources_discovered: usize,
    pub resources_chunked: usize,
    pub resources_skipped: usize,
    pub listing_failures: usize,
    pub chunks_created: usize,
    pub duration_secs: f64,
    pub output: String,
}

/// Execute the crawl command
pub async fn execute(
    args: CrawlArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate the repository argument
    let (owner, repo) = args.repo.split_once('/').ok_or_else(|| {
        format!(
            "Invalid repository '{}'. Expected the form owner/name, e.g. sveltejs/kit.",
            args.repo
        )
    })?;
    if owner.is_empty() || repo.is_empty() {
        return Err(format!(
            "Invalid repository '{}'. Owner and name must both be non-empty.",
            args.repo
        )
        .into());
    }

    // The token is the one required credential; fail before any
    // network activity if it is absent.
    let token = args.token.as_deref().ok_or(
        "No auth token provided. Pass --token or set the GITHUB_TOKEN environment variable.",
    )?;

    // Build configuration: file (or defaults), then CLI overrides
    let mut config = Config::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;
    config.log_config();

    // Crawl
    let client = GithubClient::new(&config.remote, owner, repo, token)?;
    let pipeline = CrawlPipeline::new(&client, &config);
    let (corpus, stats) = pipeline.crawl(&config.crawl.root_path).await;

    // Persist the corpus, written once after full assembly
    corpus.write_json(&config.output.path)?;

    let response = CrawlResponse {
        repo: args.repo.clone(),
        root_path: config.crawl.root_path.clone(),
        resources_discovered: stats.resources_discovered,
        resources_chunked: stats.resources_chunked,
        resources_skipped: stats.resources_skipped,
        listing_failures: stats.listing_failures,
        chunks_created: stats.chunks_created,
        duration_secs: stats.duration_ms as f64 / 1000.0,
        output: config.output.path.display().to_string(),
    };

    match format {
        OutputFormat::Human => {
            if !args.quiet {
                println!(
                    "{} {}",
                    colors::success("Crawled"),
                    colors::resource(&response.repo)
                );
                println!(
                    "  resources: {} discovered, {} chunked, {} skipped",
                    colors::number(&response.resources_discovered.to_string()),
                    colors::number(&response.resources_chunked.to_string()),
                    colors::number(&response.resources_skipped.to_string()),
                );
                if response.listing_failures > 0 {
                    print_warning(&format!(
                        "{} subtree listing(s) failed; see log for details",
                        response.listing_failures
                    ));
                }
                println!(
                    "  chunks:    {} in {}",
                    colors::number(&response.chunks_created.to_string()),
                    colors::dim(&format_duration(response.duration_secs)),
                );
                println!("  output:    {}", colors::resource(&response.output));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

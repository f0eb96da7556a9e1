//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub crawl: CrawlSection,
    pub chunking: ChunkingSection,
    pub output: String,
    pub api_base: String,
    pub token_present: bool,
}

#[derive(Debug, Serialize)]
pub struct CrawlSection {
    pub root_path: String,
    pub extension: String,
    pub max_depth: usize,
}

#[derive(Debug, Serialize)]
pub struct ChunkingSection {
    pub max_tokens: usize,
    pub keep_preamble: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;

    let response = ConfigResponse {
        crawl: CrawlSection {
            root_path: config.crawl.root_path.clone(),
            extension: config.crawl.extension.clone(),
            max_depth: config.crawl.max_depth,
        },
        chunking: ChunkingSection {
            max_tokens: config.chunking.max_tokens,
            keep_preamble: config.chunking.keep_preamble,
        },
        output: config.output.path.display().to_string(),
        api_base: config.remote.api_base.clone(),
        // The token never lives in the config file; report only
        // whether the environment provides one.
        token_present: std::env::var("GITHUB_TOKEN").is_ok(),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  crawl:");
            println!("    root_path: {}", response.crawl.root_path);
            println!("    extension: {}", response.crawl.extension);
            println!("    max_depth: {}", response.crawl.max_depth);
            println!("  chunking:");
            println!("    max_tokens: {}", response.chunking.max_tokens);
            println!("    keep_preamble: {}", response.chunking.keep_preamble);
            println!("  output: {}", response.output);
            println!("  api_base: {}", response.api_base);
            println!("  token_present: {}", response.token_present);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

//! CLI adapter for mdcorpus
//!
//! Provides the command-line interface over the core crawl
//! pipeline. Commands depend on `core/` only; `core/` knows nothing
//! about clap or terminal output.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// mdcorpus - Markdown corpus builder
///
/// Crawls a documentation tree behind a GitHub-style contents API,
/// cuts each markdown file into heading-anchored, token-bounded
/// chunks, and writes the corpus as JSON for retrieval indexing.
#[derive(Parser, Debug)]
#[command(name = "mdcorpus")]
#[command(version)]
#[command(about = "Markdown corpus builder for retrieval indexing", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a repository tree and build the chunk corpus
    Crawl(commands::CrawlArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Crawl(args) => commands::crawl::execute(args, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, cli.format).await,
    }
}

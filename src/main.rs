//! mdcorpus CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Crawl the SvelteKit docs tree
//! mdcorpus crawl sveltejs/kit --path documentation/docs -o corpus.json
//!
//! # Smaller chunks, keep text before the first heading
//! mdcorpus crawl sveltejs/kit --max-tokens 200 --keep-preamble
//!
//! # Show configuration
//! mdcorpus show-config
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdcorpus::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdcorpus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

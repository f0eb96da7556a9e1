//! Crawl pipeline orchestration.
//!
//! Coordinates the end-to-end crawl workflow:
//! 1. Walk the remote tree to discover eligible resources
//! 2. Fetch and decode each resource
//! 3. Segment text at heading boundaries
//! 4. Re-split over-length sections to the token budget
//! 5. Assemble the corpus
//!
//! Failures fetching or decoding individual resources are logged
//! and skipped; they never abort the crawl.

use std::time::Instant;

use crate::core::config::Config;
use crate::core::corpus::Corpus;
use crate::core::crawler::{HeadingSegmenter, TokenSplitter, TreeWalker};
use crate::core::error::Result;
use crate::core::remote::{ContentFetcher, ContentService};
use crate::core::types::{Chunk, CrawlStats};

/// Orchestrates the crawl pipeline
pub struct CrawlPipeline<'a> {
    service: &'a dyn ContentService,
    walker: TreeWalker<'a>,
    segmenter: HeadingSegmenter,
    splitter: TokenSplitter,
}

impl<'a> CrawlPipeline<'a> {
    /// Create a pipeline over the given content service
    pub fn new(service: &'a dyn ContentService, config: &Config) -> Self {
        let walker = TreeWalker::new(service, &config.crawl.extension, config.crawl.max_depth);
        let segmenter = HeadingSegmenter::new(config.chunking.keep_preamble);
        let splitter = TokenSplitter::new(config.chunking.max_tokens);

        Self {
            service,
            walker,
            segmenter,
            splitter,
        }
    }

    /// Crawl the tree rooted at `root` and assemble the corpus.
    ///
    /// Resources are processed sequentially in discovery order.
    /// A resource that fails to fetch or yields no chunks is logged
    /// and omitted from the corpus; the crawl continues.
    pub async fn crawl(&self, root: &str) -> (Corpus, CrawlStats) {
        let start = Instant::now();

        tracing::info!("Starting crawl from '{}'", root);
        let outcome = self.walker.walk(root).await;
        tracing::info!("Discovered {} resources", outcome.paths.len());

        let mut corpus = Corpus::new();
        let mut resources_skipped = 0;

        for (idx, path) in outcome.paths.iter().enumerate() {
            if idx % 25 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} resources processed", idx, outcome.paths.len());
            }

            match self.process_resource(path).await {
                Ok(chunks) if !chunks.is_empty() => {
                    let chunk_count = chunks.len();
                    corpus.insert(self.service.resource_url(path), chunks);
                    tracing::debug!("Chunked '{}' ({} chunks)", path, chunk_count);
                }
                Ok(_) => {
                    tracing::debug!("Skipping '{}': no usable content", path);
                    resources_skipped += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to process '{}': {}", path, e);
                    resources_skipped += 1;
                    // Continue with the remaining resources
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        let stats = CrawlStats {
            resources_discovered: outcome.paths.len(),
            resources_chunked: corpus.len(),
            resources_skipped,
            listing_failures: outcome.listing_failures,
            chunks_created: corpus.chunk_count(),
            duration_ms,
        };

        tracing::info!(
            "Crawl complete: {} resources chunked, {} skipped, \
             {} chunks created in {}ms",
            stats.resources_chunked,
            stats.resources_skipped,
            stats.chunks_created,
            stats.duration_ms
        );

        (corpus, stats)
    }

    /// Process a single resource: fetch, segment, and size-bound
    async fn process_resource(&self, path: &str) -> Result<Vec<Chunk>> {
        let fetcher = ContentFetcher::new(self.service);
        let text = fetcher.fetch(path).await?;

        let mut chunks = Vec::new();
        for section in self.segmenter.segment(&text) {
            for piece in self.splitter.split(section) {
                chunks.push(Chunk {
                    text: piece,
                    source_path: path.to_string(),
                    chunk_index: chunks.len(),
                });
            }
        }

        Ok(chunks)
    }
}

//! Crawl-and-segment pipeline.
//!
//! Turns a remote documentation tree into size-bounded chunks:
//!
//! - Tree walking with per-subtree failure isolation
//! - Heading-boundary segmentation
//! - Token-budget re-splitting of over-length sections
//! - Pipeline orchestration and crawl statistics
//!
//! Segmentation works on borrowed slices of the fetched text, so a
//! resource's chunks concatenate back to its original content
//! (aside from any dropped pre-heading preamble).

pub mod pipeline;
pub mod segmenter;
pub mod splitter;
pub mod walker;

pub use pipeline::CrawlPipeline;
pub use segmenter::HeadingSegmenter;
pub use splitter::TokenSplitter;
pub use walker::{TreeWalker, WalkOutcome};

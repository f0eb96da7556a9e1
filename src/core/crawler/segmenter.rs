//! Heading-boundary segmentation of markdown text.
//!
//! Splits a document into sections, each beginning at a heading
//! line and running up to the next heading line or end of document.
//! Sections are borrowed slices of the input, so concatenating them
//! reproduces the source text byte for byte.

use once_cell::sync::Lazy;
use regex::Regex;

// One or more '#' followed by whitespace, anchored at line start
static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s").unwrap());

/// Heading-anchored markdown segmenter
#[derive(Debug, Clone)]
pub struct HeadingSegmenter {
    /// Emit text appearing before the first heading as a leading
    /// section instead of dropping it
    keep_preamble: bool,
}

impl HeadingSegmenter {
    /// Create a segmenter.
    ///
    /// `keep_preamble` controls what happens to text before the
    /// first heading: dropped when false (the historical behavior),
    /// emitted as a leading section when true.
    pub fn new(keep_preamble: bool) -> Self {
        Self { keep_preamble }
    }

    /// Segment a document into heading-anchored sections, in
    /// document order.
    ///
    /// A document with no heading lines yields no sections (or, with
    /// the preamble kept, one section holding the whole document).
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if text.is_empty() {
            return Vec::new();
        }

        let starts: Vec<usize> = HEADING_PATTERN.find_iter(text).map(|m| m.start()).collect();

        if starts.is_empty() {
            return if self.keep_preamble { vec![text] } else { Vec::new() };
        }

        let mut sections = Vec::with_capacity(starts.len() + 1);

        if self.keep_preamble && starts[0] > 0 {
            sections.push(&text[..starts[0]]);
        }

        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            sections.push(&text[start..end]);
        }

        sections
    }
}

//! Token-bounded re-splitting of over-length sections.
//!
//! Measures section size in whitespace-delimited tokens and cuts
//! anything over the budget into consecutive fixed-size windows.
//! A section already within the budget passes through unchanged,
//! original whitespace included; only over-length sections are
//! re-joined with single spaces.

/// Fixed-window token splitter
#[derive(Debug, Clone)]
pub struct TokenSplitter {
    /// Maximum whitespace-delimited tokens per chunk
    max_tokens: usize,
}

impl TokenSplitter {
    /// Create a splitter with the given token budget.
    ///
    /// # Panics
    ///
    /// Panics if `max_tokens` is 0. Configuration validation rejects
    /// that value before a splitter is ever constructed.
    pub fn new(max_tokens: usize) -> Self {
        assert!(max_tokens > 0, "max_tokens must be > 0");
        Self { max_tokens }
    }

    /// Get the token budget
    #[allow(dead_code)]
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Split a section into chunks of at most `max_tokens` tokens.
    ///
    /// At or under the budget the section is returned as-is in a
    /// single-element vector (idempotent). Over the budget, tokens
    /// are partitioned into consecutive non-overlapping windows of
    /// exactly `max_tokens` (the last may be shorter), each window
    /// re-joined with single spaces. Order is preserved; no
    /// boundary awareness is applied within a section.
    pub fn split(&self, section: &str) -> Vec<String> {
        let tokens: Vec<&str> = section.split_whitespace().collect();

        if tokens.len() <= self.max_tokens {
            return vec![section.to_string()];
        }

        tokens
            .chunks(self.max_tokens)
            .map(|window| window.join(" "))
            .collect()
    }
}

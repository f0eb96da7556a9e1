//! Corpus assembly and persistence.
//!
//! The corpus maps each resource identifier to its ordered chunk
//! list, in the order resources were discovered. Resources that
//! yield no chunks are never inserted, so every persisted key has a
//! non-empty chunk array.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::core::error::Result;
use crate::core::types::Chunk;

/// Insertion-ordered mapping from resource identifier to chunks
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<(String, Vec<Chunk>)>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource's chunk sequence.
    ///
    /// Empty sequences are rejected: a resource key is present only
    /// if it contributed at least one chunk. Returns whether the
    /// resource was inserted.
    pub fn insert(&mut self, resource_url: String, chunks: Vec<Chunk>) -> bool {
        if chunks.is_empty() {
            return false;
        }
        self.entries.push((resource_url, chunks));
        true
    }

    /// Number of resources in the corpus
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus holds no resources
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of chunks across all resources
    pub fn chunk_count(&self) -> usize {
        self.entries.iter().map(|(_, chunks)| chunks.len()).sum()
    }

    /// Iterate resources in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Chunk])> {
        self.entries
            .iter()
            .map(|(url, chunks)| (url.as_str(), chunks.as_slice()))
    }

    /// Render the corpus as a JSON object mapping resource URL to
    /// an array of chunk text strings, keys in insertion order
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (url, chunks) in &self.entries {
            let texts: Vec<Value> = chunks
                .iter()
                .map(|chunk| Value::String(chunk.text.clone()))
                .collect();
            map.insert(url.clone(), Value::Array(texts));
        }
        Value::Object(map)
    }

    /// Persist the corpus as pretty-printed JSON, written once
    /// after assembly
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_json())?;
        fs::write(path, json)?;
        tracing::info!(
            "Wrote {} resources ({} chunks) to {:?}",
            self.len(),
            self.chunk_count(),
            path
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn chunk(text: &str, source_path: &str, chunk_index: usize) -> Chunk {
        Chunk {
            text: text.to_string(),
            source_path: source_path.to_string(),
            chunk_index,
        }
    }

    #[test]
    fn test_insert_rejects_empty_sequence() {
        let mut corpus = Corpus::new();
        assert!(!corpus.insert("https://x/a.md".to_string(), vec![]));
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_insert_and_counts() {
        let mut corpus = Corpus::new();
        corpus.insert(
            "https://x/a.md".to_string(),
            vec![chunk("# A", "a.md", 0), chunk("# B", "a.md", 1)],
        );
        corpus.insert("https://x/b.md".to_string(), vec![chunk("# C", "b.md", 0)]);

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.chunk_count(), 3);
    }

    #[test]
    fn test_json_preserves_insertion_order() {
        let mut corpus = Corpus::new();
        corpus.insert("https://x/z.md".to_string(), vec![chunk("z", "z.md", 0)]);
        corpus.insert("https://x/a.md".to_string(), vec![chunk("a", "a.md", 0)]);
        corpus.insert("https://x/m.md".to_string(), vec![chunk("m", "m.md", 0)]);

        let json = corpus.to_json();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["https://x/z.md", "https://x/a.md", "https://x/m.md"]);
    }

    #[test]
    fn test_json_values_are_chunk_texts() {
        let mut corpus = Corpus::new();
        corpus.insert(
            "https://x/a.md".to_string(),
            vec![chunk("# A\nfoo\n", "a.md", 0), chunk("# B\nbar", "a.md", 1)],
        );

        let json = corpus.to_json();
        let texts = json["https://x/a.md"].as_array().unwrap();
        assert_eq!(texts[0], "# A\nfoo\n");
        assert_eq!(texts[1], "# B\nbar");
    }

    #[test]
    fn test_write_json_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.json");

        let mut corpus = Corpus::new();
        corpus.insert("https://x/a.md".to_string(), vec![chunk("# A", "a.md", 0)]);
        corpus.write_json(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        // Pretty printing spreads the object over multiple lines
        assert!(written.lines().count() > 1);

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["https://x/a.md"][0], "# A");
    }
}

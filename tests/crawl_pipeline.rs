//! End-to-end crawl tests against a mocked contents API.
//!
//! Exercises the full pipeline: discovery over HTTP, fetch and
//! base64 decoding, heading segmentation, token bounding, corpus
//! assembly, and JSON persistence — including a failing subtree
//! that must not affect its siblings.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use httpmock::prelude::*;

use mdcorpus::core::config::Config;
use mdcorpus::core::crawler::CrawlPipeline;
use mdcorpus::core::remote::GithubClient;

const OWNER: &str = "sveltejs";
const REPO: &str = "kit";

fn contents_path(path: &str) -> String {
    format!("/repos/{OWNER}/{REPO}/contents/{path}")
}

fn listing_entry(name: &str, kind: &str, path: &str) -> serde_json::Value {
    serde_json::json!({"name": name, "type": kind, "path": path})
}

fn mock_listing(server: &MockServer, path: &str, entries: serde_json::Value) {
    let path = contents_path(path);
    server.mock(move |when, then| {
        when.method(GET).path(path.clone());
        then.status(200).json_body(entries.clone());
    });
}

fn mock_file(server: &MockServer, path: &str, text: &str) {
    let body = serde_json::json!({
        "name": path.rsplit('/').next().unwrap(),
        "path": path,
        "content": BASE64.encode(text),
        "encoding": "base64",
    });
    let path = contents_path(path);
    server.mock(move |when, then| {
        when.method(GET).path(path.clone());
        then.status(200).json_body(body.clone());
    });
}

/// Mock a documentation tree:
///
/// docs/
///   10-intro/        index.md, plain.md (headingless)
///   20-guide/        long.md (over the token budget)
///   30-broken/       listing fails with 403
///   readme.md
///   notes.txt        (filtered out)
fn mock_docs_tree(server: &MockServer, long_body: &str) {
    mock_listing(
        server,
        "docs",
        serde_json::json!([
            listing_entry("10-intro", "dir", "docs/10-intro"),
            listing_entry("20-guide", "dir", "docs/20-guide"),
            listing_entry("30-broken", "dir", "docs/30-broken"),
            listing_entry("readme.md", "file", "docs/readme.md"),
            listing_entry("notes.txt", "file", "docs/notes.txt"),
        ]),
    );
    mock_listing(
        server,
        "docs/10-intro",
        serde_json::json!([
            listing_entry("index.md", "file", "docs/10-intro/index.md"),
            listing_entry("plain.md", "file", "docs/10-intro/plain.md"),
        ]),
    );
    mock_listing(
        server,
        "docs/20-guide",
        serde_json::json!([listing_entry("long.md", "file", "docs/20-guide/long.md")]),
    );

    let broken = contents_path("docs/30-broken");
    server.mock(move |when, then| {
        when.method(GET).path(broken.clone());
        then.status(403)
            .json_body(serde_json::json!({"message": "API rate limit exceeded"}));
    });

    mock_file(
        server,
        "docs/10-intro/index.md",
        "# Intro\nwelcome\n## Setup\nfollow the steps",
    );
    mock_file(server, "docs/10-intro/plain.md", "no headings here at all\n");
    mock_file(
        server,
        "docs/20-guide/long.md",
        &format!("# Long\n{long_body}"),
    );
    mock_file(server, "docs/readme.md", "# Readme\nhello there");
}

fn test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.remote.api_base = server.base_url();
    config.crawl.root_path = "docs".to_string();
    config
}

fn resource_url(server: &MockServer, path: &str) -> String {
    format!("{}{}", server.base_url(), contents_path(path))
}

#[tokio::test]
async fn test_crawl_end_to_end() {
    let server = MockServer::start();
    let long_body: String = (0..1200).map(|i| format!("w{i} ")).collect();
    mock_docs_tree(&server, &long_body);

    let config = test_config(&server);
    let client = GithubClient::new(&config.remote, OWNER, REPO, "test-token").unwrap();
    let pipeline = CrawlPipeline::new(&client, &config);
    let (corpus, stats) = pipeline.crawl("docs").await;

    // notes.txt filtered out; plain.md headingless; broken subtree
    // contributes nothing.
    assert_eq!(stats.resources_discovered, 4);
    assert_eq!(stats.resources_chunked, 3);
    assert_eq!(stats.resources_skipped, 1);
    assert_eq!(stats.listing_failures, 1);

    let keys: Vec<&str> = corpus.iter().map(|(url, _)| url).collect();
    assert_eq!(
        keys,
        vec![
            resource_url(&server, "docs/10-intro/index.md"),
            resource_url(&server, "docs/20-guide/long.md"),
            resource_url(&server, "docs/readme.md"),
        ]
    );
}

#[tokio::test]
async fn test_crawl_chunk_contents_and_bounds() {
    let server = MockServer::start();
    let long_body: String = (0..1200).map(|i| format!("w{i} ")).collect();
    mock_docs_tree(&server, &long_body);

    let config = test_config(&server);
    let client = GithubClient::new(&config.remote, OWNER, REPO, "test-token").unwrap();
    let pipeline = CrawlPipeline::new(&client, &config);
    let (corpus, _) = pipeline.crawl("docs").await;

    for (url, chunks) in corpus.iter() {
        // Chunk indices are 0..n-1 in document order
        for (expected, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, expected);
            assert!(chunk.text.split_whitespace().count() <= 500);
        }

        if url.ends_with("index.md") {
            assert_eq!(chunks.len(), 2);
            assert_eq!(chunks[0].text, "# Intro\nwelcome\n");
            assert_eq!(chunks[1].text, "## Setup\nfollow the steps");
        }
        if url.ends_with("long.md") {
            // 1202 tokens (heading line + 1200 words) split into
            // 500 + 500 + 202
            assert_eq!(chunks.len(), 3);
            assert_eq!(chunks[0].text.split_whitespace().count(), 500);
            assert_eq!(chunks[1].text.split_whitespace().count(), 500);
            assert_eq!(chunks[2].text.split_whitespace().count(), 202);
        }
    }
}

#[tokio::test]
async fn test_crawl_persists_corpus_json() {
    let server = MockServer::start();
    let long_body: String = (0..1200).map(|i| format!("w{i} ")).collect();
    mock_docs_tree(&server, &long_body);

    let config = test_config(&server);
    let client = GithubClient::new(&config.remote, OWNER, REPO, "test-token").unwrap();
    let pipeline = CrawlPipeline::new(&client, &config);
    let (corpus, _) = pipeline.crawl("docs").await;

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("corpus.json");
    corpus.write_json(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    let object = parsed.as_object().unwrap();

    // Keys preserve discovery order
    let keys: Vec<&String> = object.keys().collect();
    assert_eq!(keys.len(), 3);
    assert!(keys[0].ends_with("/docs/10-intro/index.md"));
    assert!(keys[1].ends_with("/docs/20-guide/long.md"));
    assert!(keys[2].ends_with("/docs/readme.md"));

    // Every persisted key has a non-empty chunk array of strings
    for chunks in object.values() {
        let chunks = chunks.as_array().unwrap();
        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| c.is_string()));
    }

    // The readme survives intact as a single chunk
    let readme = object.values().last().unwrap().as_array().unwrap();
    assert_eq!(readme[0], "# Readme\nhello there");
}

#[tokio::test]
async fn test_crawl_with_unexpected_encoding_skips_resource() {
    let server = MockServer::start();

    mock_listing(
        &server,
        "docs",
        serde_json::json!([
            listing_entry("good.md", "file", "docs/good.md"),
            listing_entry("weird.md", "file", "docs/weird.md"),
        ]),
    );
    mock_file(&server, "docs/good.md", "# Good\nfine");

    let weird = contents_path("docs/weird.md");
    server.mock(move |when, then| {
        when.method(GET).path(weird.clone());
        then.status(200).json_body(serde_json::json!({
            "name": "weird.md",
            "path": "docs/weird.md",
            "content": "IyBIaQ==",
            "encoding": "utf-16",
        }));
    });

    let config = test_config(&server);
    let client = GithubClient::new(&config.remote, OWNER, REPO, "test-token").unwrap();
    let pipeline = CrawlPipeline::new(&client, &config);
    let (corpus, stats) = pipeline.crawl("docs").await;

    assert_eq!(corpus.len(), 1);
    assert_eq!(stats.resources_skipped, 1);
    let keys: Vec<&str> = corpus.iter().map(|(url, _)| url).collect();
    assert!(keys[0].ends_with("/docs/good.md"));
}

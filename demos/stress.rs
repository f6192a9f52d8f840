//! Times bulk insertion and a broad prefix search.
//!
//! Usage: `cargo run --example stress -- [word-count]` (defaults to 10000).
use std::time::Instant;

use avl_prefix_index::AlphabetIndex;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_WORDS: usize = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_WORDS,
    };

    let mut index = AlphabetIndex::new();

    let start = Instant::now();
    for i in 0..count {
        let word = format!("word{}", i);
        let meaning = format!("Definition of {}", word);
        index.insert_word(word, meaning)?;
    }
    info!(words = count, elapsed = ?start.elapsed(), "insertion finished");

    let start = Instant::now();
    let results = index.find_by_prefix("word")?;
    info!(matches = results.len(), elapsed = ?start.elapsed(), "prefix search finished");

    for (letter, tree) in index.buckets() {
        info!(%letter, entries = tree.len(), nodes = tree.node_count(), height = tree.height(), "bucket");
    }

    Ok(())
}

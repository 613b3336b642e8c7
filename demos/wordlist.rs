//! Example: spelling suggestions from a word list.
//!
//! Loads a word list (or a small built-in one), compresses it, stores it as a snapshot and
//! answers fuzzy lookups from the reloaded copy.
//!
//! Run with: cargo run --example wordlist [-- path/to/words.txt]
//!
//! Set `RUST_LOG=libtrie=debug` to see compression and load summaries.

use libtrie::trie::Trie;
use libtrie::TrieError;

const BUILTIN: [&str; 7] = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];

/// Best suggestions first, ties in alphabetical order.
fn suggestions(trie: &Trie<char>, word: &str, max_distance: usize) -> Vec<(String, usize)> {
    let mut found: Vec<(String, usize)> = trie
        .query(word, max_distance)
        .into_iter()
        .map(|(w, d)| (w.into_iter().collect(), d))
        .collect();
    found.sort_by_key(|(_, d)| *d);
    found
}

fn main() -> Result<(), TrieError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut trie: Trie<char> = match std::env::args().nth(1) {
        Some(path) => Trie::from_file(path)?,
        None => BUILTIN.into_iter().collect(),
    };
    let words = trie.terminal_count();
    let before = trie.size();
    trie.compress();
    tracing::info!(words, before, after = trie.size(), "word list compressed");

    let bytes = trie.to_bytes()?;
    let trie: Trie<char> = Trie::from_bytes(&bytes)?;
    tracing::info!(bytes = bytes.len(), "snapshot reloaded");

    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if trie.contains(word) { "yes" } else { "no" });
    }

    println!("\nSuggestions:");
    for word in ["MAKE", "BAKERS", "AKE", "CKED"] {
        let found = suggestions(&trie, word, 1);
        let listed: Vec<String> = found.iter().map(|(w, d)| format!("{w} ({d})")).collect();
        println!("  {word}: {}", listed.join(", "));
    }
    Ok(())
}

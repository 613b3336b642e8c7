//! # libtrie
//!
//! A compact [trie](https://en.wikipedia.org/wiki/Trie) for Rust with fuzzy lookup and
//! [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)-style
//! suffix sharing.
//!
//! Nodes live in a contiguous arena and refer to each other by index, so the arena can grow
//! (and reallocate) without invalidating anything. Once all sequences are in, the trie can be
//! compressed: structurally identical subtrees are merged into one shared node, which turns the
//! tree into a minimal acyclic graph.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`TrieSymbol`](trie::TrieSymbol)
//! - **Configurable index width**: `u16`, `u32` (default), `u64`, ... via
//!   [`NodeIndex`](trie::NodeIndex)
//! - **Fuzzy lookup**: budgeted insert/delete/substitute search via [`Trie::query`](trie::Trie::query)
//! - **Compression**: bottom-up subtree deduplication via [`Trie::compress`](trie::Trie::compress)
//! - **Binary format**: [`Trie::serialize`](trie::Trie::serialize) /
//!   [`Trie::unserialize`](trie::Trie::unserialize) with a pluggable
//!   [`SymbolCodec`](trie::SymbolCodec)
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::Trie;
//!
//! let mut trie: Trie<char> = Trie::new();
//! assert!(trie.add("cat"));
//! assert!(trie.add("cats"));
//! assert!(trie.add("dog"));
//! assert!(!trie.add("cat"));
//!
//! assert!(trie.contains("cat"));
//! assert!(!trie.contains("ca"));
//!
//! let matches = trie.query("cot", 1);
//! assert_eq!(matches.get(&vec!['c', 'a', 't']), Some(&1));
//! assert_eq!(matches.len(), 1);
//!
//! let words: Vec<String> = trie.iter().map(|w| w.into_iter().collect()).collect();
//! assert_eq!(words, ["cat", "cats", "dog"]);
//! ```
//!
//! ## Compression and serialization
//!
//! ```
//! use libtrie::trie::Trie;
//!
//! let mut trie: Trie<char> = ["ASUFFIX", "BSUFFIX"].into_iter().collect();
//! assert_eq!(trie.size(), 14);
//! trie.compress();
//! assert!(trie.is_compressed());
//! assert_eq!(trie.size(), 8);
//!
//! let bytes = trie.to_bytes().unwrap();
//! let copy: Trie<char> = Trie::from_bytes(&bytes).unwrap();
//! assert!(copy.contains("ASUFFIX"));
//! assert_eq!(copy.query("BSUFIX", 1).len(), 1);
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use libtrie::trie::Trie;
//!
//! let mut trie: Trie<u8, u16> = Trie::new();
//! trie.add([1, 2, 3]);
//! trie.add(vec![1, 2, 4]);
//! assert!(trie.contains(&[1, 2, 3]));
//! assert!(!trie.contains(&[1, 2]));
//! ```

#![warn(missing_docs)]

/// Error type shared by the fallible trie operations.
pub mod error;
/// Core trie data structure: arena, child edges, insertion, query, compression and I/O.
pub mod trie;

pub use error::TrieError;
pub use trie::{Matches, Trie};

#[cfg(test)]
mod proptests;

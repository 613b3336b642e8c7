use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::{Itertools, Position};

use crate::error::{Result, TrieError};

use super::index::NodeIndex;
use super::set::Trie;
use super::symbol::{IntoSequence, TrieSymbol};

impl<C: TrieSymbol, I: NodeIndex, S> Trie<C, I, S> {
    /// Adds a sequence to the trie.
    ///
    /// The sequence can be any type that implements [`IntoSequence`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    ///
    /// Returns `false` without changing anything if the sequence is empty, already stored, or
    /// the trie is compressed. Also returns `false` (and logs a warning) if the index type `I`
    /// cannot address the nodes the sequence needs; use [`try_add`](Trie::try_add) to tell
    /// that case apart.
    pub fn add(&mut self, sequence: impl IntoSequence<C>) -> bool {
        match self.try_add(sequence) {
            Ok(added) => added,
            Err(err) => {
                tracing::warn!(nodes = self.size(), error = %err, "sequence not added");
                false
            }
        }
    }

    /// Adds a sequence to the trie, reporting index exhaustion as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::CapacityExceeded`] if the new nodes would not fit in `I`. Capacity
    /// is checked before anything is allocated, so a failed add leaves the trie unchanged.
    pub fn try_add(&mut self, sequence: impl IntoSequence<C>) -> Result<bool> {
        let sequence = sequence.collect_sequence();
        if sequence.is_empty() || self.compressed {
            return Ok(false);
        }

        let (matched, mut parent) = self.longest_prefix(&sequence);
        if matched == sequence.len() {
            let Some(node) = parent else {
                return Ok(false);
            };
            if self.nodes[node].terminal {
                return Ok(false);
            }
            self.nodes[node].terminal = true;
            self.raise_depths(node);
            return Ok(true);
        }

        let missing = sequence.len() - matched;
        if !self.nodes.has_room_for(missing) {
            return Err(TrieError::CapacityExceeded {
                nodes: self.nodes.len() + missing,
            });
        }
        for (position, &symbol) in sequence[matched..].iter().with_position() {
            let node = self.nodes.allocate(parent, symbol)?;
            self.edges_mut(parent).insert(symbol, node);
            if matches!(position, Position::Last | Position::Only) {
                self.nodes[node].terminal = true;
            }
            parent = Some(node);
        }
        if let Some(leaf) = parent {
            self.raise_depths(leaf);
        }
        Ok(true)
    }

    /// Returns how many leading symbols of `sequence` already have a path, and the node that
    /// path ends at.
    fn longest_prefix(&self, sequence: &[C]) -> (usize, Option<I>) {
        let mut node = None;
        for (matched, &symbol) in sequence.iter().enumerate() {
            match self.edges(node).find(symbol) {
                Some(child) => node = Some(child),
                None => return (matched, node),
            }
        }
        (sequence.len(), node)
    }

    /// Raises `subtree_depth` from a new terminal up towards the root.
    ///
    /// Stops at the first ancestor that is already deep enough; everything above it is too.
    fn raise_depths(&mut self, terminal: I) {
        let mut depth = 0;
        let mut current = Some(terminal);
        while let Some(index) = current {
            let node = &mut self.nodes[index];
            if depth > 0 && node.subtree_depth >= depth {
                break;
            }
            node.subtree_depth = node.subtree_depth.max(depth);
            current = node.parent;
            depth += 1;
        }
    }
}

impl<C: TrieSymbol, I: NodeIndex, S: Default, W: IntoSequence<C>> FromIterator<W>
    for Trie<C, I, S>
{
    fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<C: TrieSymbol, I: NodeIndex, S, W: IntoSequence<C>> Extend<W> for Trie<C, I, S> {
    fn extend<T: IntoIterator<Item = W>>(&mut self, iter: T) {
        for sequence in iter {
            self.add(sequence);
        }
    }
}

impl<I: NodeIndex, S: Default> Trie<char, I, S> {
    /// Builds a trie from a word-list file.
    ///
    /// Reads one word per line. Lines starting with '#' are treated as comments and ignored.
    /// Empty lines are skipped. Words may come in any order and may repeat.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libtrie::trie::Trie;
    ///
    /// let trie: Trie<char> = Trie::from_file("dictionary.txt").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or holds more nodes than `I` can address.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut trie = Trie::new();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        // Reuse one line buffer instead of allocating a String per line.
        let mut buf = String::with_capacity(80);
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            let word = buf.trim_end();
            if !word.is_empty() && !is_comment(word) {
                trie.try_add(word)?;
            }
        }
        Ok(trie)
    }
}

/// Word-list lines whose first non-blank character is `#` carry no word.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

use hashbrown::HashMap;
use smallvec::{smallvec, SmallVec};

use super::index::NodeIndex;
use super::node_arena::NodeArena;
use super::set::Trie;
use super::symbol::TrieSymbol;

impl<C: TrieSymbol, I: NodeIndex, S> Trie<C, I, S> {
    /// Merges structurally identical subtrees so that shared suffixes are stored once.
    ///
    /// Nodes are bucketed by subtree depth and processed leaves first, so by the time two
    /// nodes are compared their children have already been merged wherever possible. Within a
    /// bucket, nodes with the same symbol are compared pairwise; a later node equal to an
    /// earlier one has its parent edge repointed at the earlier node and is tombstoned. A final
    /// sweep drops the tombstones and renumbers the arena.
    ///
    /// Sets [`is_compressed`](Trie::is_compressed) if anything was merged; from then on the
    /// trie refuses new sequences and `erase` does nothing. Calling this again is a no-op.
    /// The cost is quadratic in the size of each (depth, symbol) group.
    ///
    /// After merging, a shared node has several owners but records only one of them as its
    /// parent, so [`Cursor::get`](super::Cursor::get) on a shared terminal spells one of the
    /// sequences ending there. [`contains`](Trie::contains), [`find`](Trie::find) and
    /// [`query`](Trie::query) are unaffected.
    pub fn compress(&mut self) {
        if self.compressed {
            return;
        }
        let before = self.nodes.len();

        let bucket_count = self
            .nodes
            .as_slice()
            .iter()
            .map(|n| n.subtree_depth + 1)
            .max()
            .unwrap_or(0);
        let mut buckets: Vec<HashMap<C, Vec<I>>> = vec![HashMap::new(); bucket_count];
        for (index, node) in self.nodes.indexed() {
            buckets[node.subtree_depth]
                .entry(node.symbol)
                .or_default()
                .push(index);
        }

        let mut dead = vec![false; before];
        let mut merged = 0usize;
        for (depth, bucket) in buckets.iter().enumerate() {
            let merged_before = merged;
            for group in bucket.values() {
                for (i, &canonical) in group.iter().enumerate() {
                    if dead[canonical.to_usize()] {
                        continue;
                    }
                    for &duplicate in &group[i + 1..] {
                        if dead[duplicate.to_usize()] {
                            continue;
                        }
                        // Root-level nodes have no parent edge to repoint.
                        let Some(parent) = self.nodes[duplicate].parent else {
                            continue;
                        };
                        if !self.nodes.equals(canonical, duplicate) {
                            continue;
                        }
                        let symbol = self.nodes[duplicate].symbol;
                        self.nodes[parent].children.replace(symbol, canonical);
                        self.nodes[duplicate].tombstone();
                        dead[duplicate.to_usize()] = true;
                        merged += 1;
                    }
                }
            }
            tracing::trace!(depth, merged = merged - merged_before, "depth bucket compressed");
        }

        if merged > 0 {
            self.compressed = true;
            self.nodes.sweep(&dead, &mut self.root);
        }
        tracing::debug!(before, after = self.nodes.len(), "trie compressed");
    }
}

impl<C: TrieSymbol, I: NodeIndex> NodeArena<C, I> {
    /// Structural equality of the subtrees rooted at `a` and `b`: same symbol, terminal flag,
    /// subtree depth and child count, with children equal pairwise.
    pub(crate) fn equals(&self, a: I, b: I) -> bool {
        let mut pending: SmallVec<[(I, I); 16]> = smallvec![(a, b)];
        while let Some((a, b)) = pending.pop() {
            if a == b {
                continue;
            }
            let (x, y) = (&self[a], &self[b]);
            if x.symbol != y.symbol
                || x.terminal != y.terminal
                || x.subtree_depth != y.subtree_depth
                || x.children.len() != y.children.len()
            {
                return false;
            }
            pending.extend(x.children.targets().zip(y.children.targets()));
        }
        true
    }
}

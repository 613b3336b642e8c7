//! Budgeted fuzzy lookup.
//!
//! The search walks the trie depth-first while spending a distance budget on three kinds of
//! moves: substituting one input symbol for a trie symbol, inserting a trie symbol without
//! consuming input, and skipping a run of input symbols to reach one that matches a child.
//! Exact matches are free. At every terminal node the remaining input (or the overshoot past
//! its end) is added to the cost.
//!
//! This approximates edit distance rather than computing it: complex combinations of moves
//! can be counted differently from a Levenshtein table, and callers rely on these exact costs.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::children::Edges;
use super::index::NodeIndex;
use super::set::Trie;
use super::symbol::{IntoSequence, TrieSymbol};

/// Sequences found by [`Trie::query`], each mapped to the lowest distance it was reached at.
pub type Matches<C> = BTreeMap<Vec<C>, usize>;

/// A pending visit: `node` sits at `depth` below the root, `pos` input symbols have been
/// consumed, and `cost` of the budget is spent.
#[derive(Clone, Copy, Debug)]
struct Frame<I> {
    node: I,
    depth: usize,
    pos: usize,
    cost: usize,
}

struct Search<'q, C, I> {
    input: &'q [C],
    max_distance: usize,
    stack: Vec<Frame<I>>,
}

impl<C: TrieSymbol, I: NodeIndex> Search<'_, C, I> {
    /// Queues a visit unless it can no longer finish within budget.
    ///
    /// Neither `cost` nor the overshoot past the end of the input shrinks further down, so
    /// such a frame could never record a match.
    #[inline]
    fn push(&mut self, node: I, depth: usize, pos: usize, cost: usize) {
        let overshoot = pos.saturating_sub(self.input.len());
        if cost + overshoot <= self.max_distance {
            self.stack.push(Frame {
                node,
                depth,
                pos,
                cost,
            });
        }
    }

    /// Queues every move from a node with outgoing `edges`.
    fn branch(&mut self, edges: &Edges<C, I>, depth: usize, pos: usize, cost: usize) {
        let current = self.input.get(pos).copied();

        if let Some(child) = current.and_then(|symbol| edges.find(symbol)) {
            self.push(child, depth, pos + 1, cost);
        }

        if cost >= self.max_distance {
            return;
        }
        let remaining = self.input.len().saturating_sub(pos);
        for (symbol, child) in edges.iter() {
            if current != Some(symbol) {
                // substitution, then insertion
                self.push(child, depth, pos + 1, cost + 1);
                self.push(child, depth, pos, cost + 1);
            }
            for skip in 1..remaining {
                if self.input[pos + skip] == symbol {
                    self.push(child, depth, pos + skip + 1, cost + skip);
                }
            }
        }
    }
}

impl<C: TrieSymbol, I: NodeIndex, S> Trie<C, I, S> {
    /// Finds every stored sequence within `max_distance` of `sequence`.
    ///
    /// Distances follow the budgeted search described in the [module docs](crate::trie::query):
    /// a stored sequence equal to the input is reported at 0, and `max_distance == 0` is an
    /// exact lookup. An empty input matches nothing.
    ///
    /// Spelled sequences come from the path the search took, so results are exact on a
    /// compressed trie as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let trie: Trie<char> = ["cat", "cats", "dog"].into_iter().collect();
    /// let found = trie.query("cats", 1);
    /// assert_eq!(found.get(&vec!['c', 'a', 't', 's']), Some(&0));
    /// assert_eq!(found.get(&vec!['c', 'a', 't']), Some(&1));
    /// assert_eq!(found.len(), 2);
    /// ```
    pub fn query(&self, sequence: impl IntoSequence<C>, max_distance: usize) -> Matches<C> {
        let input = sequence.collect_sequence();
        let mut matches = Matches::new();
        if input.is_empty() {
            return matches;
        }

        let mut search = Search {
            input: &input,
            max_distance,
            stack: Vec::new(),
        };
        // Each frame sits one node deeper than its parent, so the path never outgrows the
        // tallest root subtree, whatever the budget.
        let mut path: SmallVec<[C; 32]> = SmallVec::new();
        search.branch(&self.root, 0, 0, 0);

        while let Some(frame) = search.stack.pop() {
            let node = &self.nodes[frame.node];
            // Everything above `depth` on the path still belongs to this frame's ancestors.
            path.truncate(frame.depth);
            path.push(node.symbol);

            if node.terminal {
                let distance = frame.cost + frame.pos.abs_diff(input.len());
                if distance <= max_distance {
                    matches
                        .entry(path.to_vec())
                        .and_modify(|best| *best = (*best).min(distance))
                        .or_insert(distance);
                }
            }

            search.branch(&node.children, frame.depth + 1, frame.pos, frame.cost);
        }
        matches
    }
}

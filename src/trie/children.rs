use smallvec::SmallVec;

use super::index::NodeIndex;
use super::symbol::TrieSymbol;

/// Sorted child edges of a node, or of the trie root.
///
/// Edges are ordered by symbol and symbols are unique, so lookup is a binary search.
/// Up to two edges are stored inline; most nodes in a natural-language trie have one or two
/// children and never allocate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Edges<C, I> {
    edges: SmallVec<[(C, I); 2]>,
}

impl<C, I> Default for Edges<C, I> {
    fn default() -> Self {
        Edges {
            edges: SmallVec::new(),
        }
    }
}

impl<C: TrieSymbol, I: NodeIndex> Edges<C, I> {
    /// Creates an empty edge list.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn search(&self, symbol: C) -> Result<usize, usize> {
        self.edges.binary_search_by(|(c, _)| c.cmp(&symbol))
    }

    /// Returns the node that `symbol`'s edge leads to, or `None` if no such edge exists.
    #[inline]
    pub(crate) fn find(&self, symbol: C) -> Option<I> {
        self.search(symbol).ok().map(|pos| self.edges[pos].1)
    }

    /// Inserts an edge in sorted position.
    ///
    /// Returns `false` and leaves the list untouched if `symbol` already has an edge.
    pub(crate) fn insert(&mut self, symbol: C, target: I) -> bool {
        match self.search(symbol) {
            Ok(_) => false,
            Err(pos) => {
                self.edges.insert(pos, (symbol, target));
                true
            }
        }
    }

    /// Repoints the edge labelled `symbol` at `target`.
    ///
    /// Returns `false` if there is no such edge.
    pub(crate) fn replace(&mut self, symbol: C, target: I) -> bool {
        match self.search(symbol) {
            Ok(pos) => {
                self.edges[pos].1 = target;
                true
            }
            Err(_) => false,
        }
    }

    /// Rewrites every target through `map`, dropping edges whose target maps to `None`.
    pub(crate) fn remap(&mut self, mut map: impl FnMut(I) -> Option<I>) {
        self.edges.retain(|(_, target)| match map(*target) {
            Some(new_target) => {
                *target = new_target;
                true
            }
            None => false,
        });
    }

    /// Gets the edge at the specified position.
    #[inline]
    pub(crate) fn get(&self, pos: usize) -> Option<(C, I)> {
        self.edges.get(pos).copied()
    }

    /// Returns an iterator over all edges in symbol order.
    #[inline]
    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = (C, I)> + '_ {
        self.edges.iter().copied()
    }

    /// Returns an iterator over the edge targets in symbol order.
    #[inline]
    pub(crate) fn targets(&self) -> impl ExactSizeIterator<Item = I> + '_ {
        self.edges.iter().map(|&(_, target)| target)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.edges.clear();
    }
}

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use super::index::NodeIndex;
use super::set::Trie;
use super::symbol::TrieSymbol;

/// A position in the arena: either a terminal node or the end sentinel.
///
/// Cursors are produced by [`Trie::begin`], [`Trie::end`] and [`Trie::find`]. Two cursors are
/// equal when they point into the same trie at the same position.
pub struct Cursor<'t, C, I, S> {
    trie: &'t Trie<C, I, S>,
    position: usize,
}

impl<C, I, S> Clone for Cursor<'_, C, I, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, I, S> Copy for Cursor<'_, C, I, S> {}

impl<C, I, S> PartialEq for Cursor<'_, C, I, S> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && ptr::eq(self.trie, other.trie)
    }
}

impl<C, I, S> Eq for Cursor<'_, C, I, S> {}

impl<C, I, S> fmt::Debug for Cursor<'_, C, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish()
    }
}

impl<'t, C: TrieSymbol, I: NodeIndex, S> Cursor<'t, C, I, S> {
    pub(crate) fn new(trie: &'t Trie<C, I, S>, position: usize) -> Self {
        Cursor { trie, position }
    }

    /// Arena position of the node under the cursor; equals the node count at the end.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True if the cursor is past the last terminal node.
    pub fn is_end(&self) -> bool {
        self.position >= self.trie.size()
    }

    /// Spells the sequence ending at this node, or `None` at the end.
    ///
    /// The sequence is rebuilt from parent links on every call. On a compressed trie a shared
    /// node spells the sequence through its recorded parent.
    pub fn get(&self) -> Option<Vec<C>> {
        if self.is_end() {
            return None;
        }
        Some(self.trie.spell(self.position))
    }

    /// Moves to the next terminal node in arena order, or to the end.
    pub fn advance(&mut self) {
        if !self.is_end() {
            self.position = self.trie.next_terminal(self.position + 1);
        }
    }
}

impl<C: TrieSymbol, I: NodeIndex, S> Trie<C, I, S> {
    /// Cursor at the first terminal node in arena order.
    pub fn begin(&self) -> Cursor<'_, C, I, S> {
        Cursor::new(self, self.next_terminal(0))
    }

    /// The end sentinel.
    pub fn end(&self) -> Cursor<'_, C, I, S> {
        Cursor::new(self, self.size())
    }

    /// Iterates the stored sequences in arena order.
    ///
    /// Before compression this is insertion order of each sequence's final node, and every
    /// stored sequence appears once. After compression a terminal shared by several sequences
    /// is visited once.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let trie: Trie<u8> = [[1u8, 2], [1, 3]].into_iter().collect();
    /// let all: Vec<Vec<u8>> = trie.iter().collect();
    /// assert_eq!(all, [vec![1, 2], vec![1, 3]]);
    /// ```
    pub fn iter(&self) -> Iter<'_, C, I, S> {
        Iter {
            cursor: self.begin(),
        }
    }

    fn next_terminal(&self, from: usize) -> usize {
        self.nodes
            .as_slice()
            .get(from..)
            .and_then(|rest| rest.iter().position(|n| n.terminal))
            .map_or(self.size(), |offset| from + offset)
    }

    fn spell(&self, position: usize) -> Vec<C> {
        let nodes = self.nodes.as_slice();
        let mut sequence = Vec::new();
        let mut current = nodes.get(position);
        while let Some(node) = current {
            sequence.push(node.symbol);
            current = node.parent.and_then(|p| nodes.get(p.to_usize()));
        }
        sequence.reverse();
        sequence
    }
}

/// Iterator over stored sequences, created by [`Trie::iter`].
pub struct Iter<'t, C, I, S> {
    cursor: Cursor<'t, C, I, S>,
}

impl<C: TrieSymbol, I: NodeIndex, S> Iterator for Iter<'_, C, I, S> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Vec<C>> {
        let sequence = self.cursor.get()?;
        self.cursor.advance();
        Some(sequence)
    }
}

impl<C: TrieSymbol, I: NodeIndex, S> FusedIterator for Iter<'_, C, I, S> {}

impl<'t, C: TrieSymbol, I: NodeIndex, S> IntoIterator for &'t Trie<C, I, S> {
    type Item = Vec<C>;
    type IntoIter = Iter<'t, C, I, S>;

    fn into_iter(self) -> Iter<'t, C, I, S> {
        self.iter()
    }
}

use super::children::Edges;
use super::codec::RawCodec;
use super::index::NodeIndex;
use super::iter::Cursor;
use super::node_arena::NodeArena;
use super::symbol::{IntoSequence, TrieSymbol};

/// A trie of symbol sequences, stored in an index-addressed arena.
///
/// `C` is the symbol type, `I` the integer type used for node references (bounding the node
/// count), and `S` the [`SymbolCodec`](super::SymbolCodec) used by
/// [`serialize`](Trie::serialize).
///
/// The trie starts out as a plain tree. [`compress`](Trie::compress) turns it into a
/// suffix-shared graph; from then on it is read-only apart from
/// [`clear`](Trie::clear) and [`unserialize`](Trie::unserialize).
///
/// # Examples
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie: Trie<char> = Trie::new();
/// trie.add("BAKE");
/// trie.add("CAKE");
///
/// let cursor = trie.find("CAKE");
/// assert_eq!(cursor.get(), Some(vec!['C', 'A', 'K', 'E']));
/// assert!(trie.find("MAKE").is_end());
///
/// assert!(trie.erase("BAKE"));
/// assert!(!trie.contains("BAKE"));
/// ```
#[derive(Clone, Debug)]
pub struct Trie<C, I = u32, S = RawCodec> {
    pub(crate) nodes: NodeArena<C, I>,
    pub(crate) root: Edges<C, I>,
    pub(crate) compressed: bool,
    pub(crate) codec: S,
}

impl<C, I, S: Default> Default for Trie<C, I, S> {
    fn default() -> Self {
        Trie {
            nodes: NodeArena::default(),
            root: Edges::default(),
            compressed: false,
            codec: S::default(),
        }
    }
}

impl<C: TrieSymbol, I: NodeIndex, S: Default> Trie<C, I, S> {
    /// Creates an empty trie using the default codec.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: TrieSymbol, I: NodeIndex, S> Trie<C, I, S> {
    /// Creates an empty trie that serializes symbols with `codec`.
    pub fn with_codec(codec: S) -> Self {
        Trie {
            nodes: NodeArena::new(),
            root: Edges::new(),
            compressed: false,
            codec,
        }
    }

    /// Returns the symbol codec.
    pub fn codec(&self) -> &S {
        &self.codec
    }

    /// Returns the number of nodes in the arena.
    ///
    /// This counts nodes, not sequences: `["cat", "cats"]` occupies four nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// True if the trie holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Returns the number of terminal nodes, i.e. the number of sequences iteration yields.
    pub fn terminal_count(&self) -> usize {
        self.nodes.as_slice().iter().filter(|n| n.terminal).count()
    }

    /// True once [`compress`](Trie::compress) has merged at least one subtree.
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Removes everything, returning the trie to its empty, uncompressed state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root.clear();
        self.compressed = false;
    }

    /// Returns a cursor at the terminal node spelling `sequence`, or [`end`](Trie::end) if the
    /// sequence is not stored.
    pub fn find(&self, sequence: impl IntoSequence<C>) -> Cursor<'_, C, I, S> {
        let sequence = sequence.collect_sequence();
        match self.walk(&sequence) {
            Some(node) if self.nodes[node].terminal => Cursor::new(self, node.to_usize()),
            _ => self.end(),
        }
    }

    /// True if `sequence` is stored.
    pub fn contains(&self, sequence: impl IntoSequence<C>) -> bool {
        let sequence = sequence.collect_sequence();
        self.walk(&sequence)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Removes `sequence` by clearing its terminal flag.
    ///
    /// No nodes are reclaimed. Returns `true` if a stored sequence was removed. On a compressed
    /// trie this is a no-op returning `false`, since a terminal node may be shared by several
    /// sequences there.
    pub fn erase(&mut self, sequence: impl IntoSequence<C>) -> bool {
        if self.compressed {
            return false;
        }
        let sequence = sequence.collect_sequence();
        match self.walk(&sequence) {
            Some(node) if self.nodes[node].terminal => {
                self.nodes[node].terminal = false;
                true
            }
            _ => false,
        }
    }

    /// Follows `sequence` edge by edge from the root.
    pub(crate) fn walk(&self, sequence: &[C]) -> Option<I> {
        let (&first, rest) = sequence.split_first()?;
        let start = self.root.find(first)?;
        rest.iter()
            .try_fold(start, |node, &symbol| self.nodes[node].children.find(symbol))
    }

    /// Child edges of `node`, or the root edges for `None`.
    #[inline]
    pub(crate) fn edges(&self, node: Option<I>) -> &Edges<C, I> {
        match node {
            Some(index) => &self.nodes[index].children,
            None => &self.root,
        }
    }

    #[inline]
    pub(crate) fn edges_mut(&mut self, node: Option<I>) -> &mut Edges<C, I> {
        match node {
            Some(index) => &mut self.nodes[index].children,
            None => &mut self.root,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn trie(words: &[&str]) -> Trie<char> {
        words.iter().collect()
    }

    #[test]
    fn basic_lookup() {
        let t = trie(&["BAKE", "CAKE", "FAKE", "LAKE"]);
        assert!(t.contains("BAKE"));
        assert!(t.contains("CAKE"));
        assert!(!t.contains("MAKE"));
        assert!(!t.contains("BAK"));
        assert!(!t.contains("BAKES"));
        assert!(!t.contains(""));
    }

    #[test]
    fn find_points_at_terminal_or_end() {
        let t = trie(&["cat", "cats", "dog"]);
        let cursor = t.find("cats");
        assert!(!cursor.is_end());
        assert_eq!(cursor.get(), Some(vec!['c', 'a', 't', 's']));
        assert_eq!(t.find("ca"), t.end());
        assert_eq!(t.find("cow"), t.end());
        assert_eq!(t.find(""), t.end());
    }

    #[test]
    fn erase_clears_terminal_only() {
        let mut t = trie(&["cat", "cats", "dog"]);
        let size = t.size();
        assert!(t.erase("cat"));
        assert!(!t.erase("cat"));
        assert!(!t.erase("ca"));
        assert!(!t.contains("cat"));
        assert!(t.contains("cats"));
        assert_eq!(t.size(), size);
        assert_eq!(t.terminal_count(), 2);
        assert!(t.add("cat"));
        assert!(t.contains("cat"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut t = trie(&["ab", "ac"]);
        t.compress();
        t.clear();
        assert!(t.is_empty());
        assert!(!t.is_compressed());
        assert_eq!(t.begin(), t.end());
        assert!(t.add("ab"));
        assert!(t.contains("ab"));
    }

    #[test]
    fn empty_trie() {
        let t: Trie<u8> = Trie::new();
        assert_eq!(t.size(), 0);
        assert!(t.is_empty());
        assert_eq!(t.terminal_count(), 0);
        assert!(!t.contains([1]));
        assert!(t.find([1]).is_end());
    }

    #[test]
    fn trie_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trie<char>>();
    }
}

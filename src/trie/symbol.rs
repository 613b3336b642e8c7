use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Edge label of a [`Trie`](super::Trie).
///
/// Blanket-implemented, so `char`, the integer types and small `Copy` enums qualify without
/// any impl of their own. Ordering keeps sibling edges binary searchable, hashing groups nodes
/// during [`compress`](super::Trie::compress), and `Default` is what a node merged away by
/// compression holds until the sweep removes it. Real nodes may carry the default symbol too;
/// the compressor tracks removed nodes separately.
pub trait TrieSymbol: Copy + Eq + Ord + Hash + Debug + Default {}

impl<T: Copy + Eq + Ord + Hash + Debug + Default> TrieSymbol for T {}

/// Buffer a sequence is collected into before it touches the trie. Words up to 32 symbols
/// need no heap allocation.
pub type Sequence<C> = SmallVec<[C; 32]>;

/// Anything [`add`](super::Trie::add), [`find`](super::Trie::find),
/// [`query`](super::Trie::query) and the other lookups take as a sequence.
///
/// Text (`&str`, `String`) is read as `char` symbols. Slices, vectors and arrays are read
/// symbol by symbol for any [`TrieSymbol`].
pub trait IntoSequence<C: TrieSymbol> {
    /// Copies the symbols out in order.
    fn collect_sequence(self) -> Sequence<C>;
}

macro_rules! text_sequence {
    ($($t:ty),*) => {
        $(
            impl IntoSequence<char> for $t {
                fn collect_sequence(self) -> Sequence<char> {
                    self.chars().collect()
                }
            }
        )*
    };
}

text_sequence!(&str, &&str, String, &String);

impl<C: TrieSymbol> IntoSequence<C> for &[C] {
    fn collect_sequence(self) -> Sequence<C> {
        Sequence::from_slice(self)
    }
}

impl<C: TrieSymbol> IntoSequence<C> for &Vec<C> {
    fn collect_sequence(self) -> Sequence<C> {
        Sequence::from_slice(self)
    }
}

impl<C: TrieSymbol, const N: usize> IntoSequence<C> for &[C; N] {
    fn collect_sequence(self) -> Sequence<C> {
        Sequence::from_slice(self)
    }
}

impl<C: TrieSymbol> IntoSequence<C> for Vec<C> {
    fn collect_sequence(self) -> Sequence<C> {
        Sequence::from_vec(self)
    }
}

impl<C: TrieSymbol, const N: usize> IntoSequence<C> for [C; N] {
    fn collect_sequence(self) -> Sequence<C> {
        self.into_iter().collect()
    }
}

use std::fmt::Debug;
use std::hash::Hash;

/// Integer types that can address nodes in the arena.
///
/// The index type bounds the number of nodes a trie can hold: a `Trie<_, u16>` stores at most
/// 65536 nodes but spends two bytes per parent and child reference, where the default `u32`
/// spends four.
pub trait NodeIndex: Copy + Eq + Ord + Hash + Debug {
    /// Converts an arena position into an index, or `None` if it does not fit.
    fn from_usize(position: usize) -> Option<Self>;

    /// Converts the index back into an arena position.
    fn to_usize(self) -> usize;
}

macro_rules! impl_node_index {
    ($($t:ty),*) => {
        $(
            impl NodeIndex for $t {
                #[inline]
                fn from_usize(position: usize) -> Option<Self> {
                    <$t>::try_from(position).ok()
                }

                #[inline]
                fn to_usize(self) -> usize {
                    // Only ever constructed from a usize, so this cannot truncate.
                    self as usize
                }
            }
        )*
    };
}

impl_node_index!(u8, u16, u32, u64, usize);

/// Insertion engine: adding sequences one at a time, from iterators or word-list files.
pub mod builder;
/// Sorted child edges of a node.
pub(crate) mod children;
/// Fixed-width symbol encoding used by the binary format.
pub mod codec;
/// Bottom-up subtree deduplication.
mod compress;
/// Integer types usable as node indices.
pub mod index;
/// Cursors and iterators over the stored sequences.
pub mod iter;
/// Index-addressed node storage.
pub(crate) mod node_arena;
/// Budgeted fuzzy lookup.
pub mod query;
/// Binary serialization format.
pub mod serialize;
/// The trie container and its exact-match operations.
pub mod set;
/// Trait for types that can serve as trie symbols.
pub mod symbol;

pub use codec::{RawCodec, RawSymbol, SymbolCodec};
pub use index::NodeIndex;
pub use iter::{Cursor, Iter};
pub use query::Matches;
pub use serialize::FORMAT_TAG;
pub use set::Trie;
pub use symbol::{IntoSequence, TrieSymbol};

#[cfg(test)]
mod test {
    use super::*;

    fn words<I: NodeIndex, S>(trie: &Trie<char, I, S>) -> Vec<String> {
        trie.iter().map(|w| w.into_iter().collect()).collect()
    }

    fn matches(found: Matches<char>) -> Vec<(String, usize)> {
        found
            .into_iter()
            .map(|(w, d)| (w.into_iter().collect(), d))
            .collect()
    }

    #[test]
    fn cat_cats_dog() {
        let mut trie: Trie<char> = Trie::new();
        for word in ["cat", "cats", "dog"] {
            assert!(trie.add(word));
        }
        assert!(!trie.find("cat").is_end());
        assert!(trie.find("ca").is_end());
        assert_eq!(matches(trie.query("cot", 1)), [("cat".to_string(), 1)]);
        assert_eq!(words(&trie), ["cat", "cats", "dog"]);
        assert_eq!(trie.size(), 7);
    }

    #[test]
    fn add_word() {
        let mut trie: Trie<char> = ["TEST", "TESTER", "WTEST"].into_iter().collect();
        assert!(trie.contains("TEST"));
        assert!(trie.contains("TESTER"));
        assert!(trie.contains("WTEST"));
        assert!(!trie.contains("TES"));
        assert!(!trie.contains("TESTE"));
        assert!(!trie.contains("TESTERS"));
        assert!(!trie.add("TESTER"));
        assert!(trie.add("TES"));
        assert!(trie.contains("TES"));
    }

    #[test]
    fn compressed_trie_keeps_answers() {
        let testdata = [
            "ASUFFIX",
            "BSUFFIX",
            "CDESUFFIX",
            "FFFFFFFSUFFIX",
            "INBETWEEN",
            "JSUFFIX",
            "XXSUFFIX",
        ];
        let mut trie: Trie<char> = testdata.into_iter().collect();
        let before = trie.size();
        let probes = ["BSUFIX", "JSUFFIXX", "INBETWEN", "XSUFFIX", "CDE"];
        let expected: Vec<_> = probes.iter().map(|p| trie.query(*p, 2)).collect();

        trie.compress();
        assert!(trie.is_compressed());
        assert!(trie.size() < before);
        for word in testdata {
            assert!(trie.contains(word), "{word}");
        }
        for (probe, expected) in probes.iter().zip(expected) {
            assert_eq!(trie.query(*probe, 2), expected, "{probe}");
        }

        // Every terminal node still spells one of the inserted words.
        for word in words(&trie) {
            assert!(testdata.contains(&word.as_str()), "{word}");
        }
    }

    #[test]
    fn round_trip_after_compression() {
        let mut trie: Trie<char> = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"]
            .into_iter()
            .collect();
        trie.compress();
        let bytes = trie.to_bytes().unwrap();
        let copy: Trie<char> = Trie::from_bytes(&bytes).unwrap();
        assert_eq!(copy.size(), trie.size());
        assert!(copy.is_compressed());
        assert_eq!(words(&copy), words(&trie));
        for probe in ["BAKE", "MAKE", "BAKERS", "AKE", "CAKES"] {
            assert_eq!(copy.query(probe, 2), trie.query(probe, 2), "{probe}");
        }
    }

    #[test]
    fn generic_trie_with_u8() {
        let mut trie: Trie<u8, u16> = Trie::new();
        trie.add([1, 2, 3]);
        trie.add([1, 2, 4]);
        trie.add([2, 3, 4]);
        assert!(trie.contains([1, 2, 3]));
        assert!(trie.contains([1, 2, 4]));
        assert!(trie.contains([2, 3, 4]));
        assert!(!trie.contains([1, 2, 5]));
        assert!(!trie.contains([1, 2]));
        let found = trie.query([1, 2, 5], 1);
        assert_eq!(found.get([1u8, 2, 3].as_slice()), Some(&1));
        assert_eq!(found.get([1u8, 2, 4].as_slice()), Some(&1));
    }
}

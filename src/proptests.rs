use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::trie::Trie;

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet so that words share prefixes and suffixes.
    "[abcd]{1,6}"
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

fn listed(trie: &Trie<char>) -> Vec<String> {
    trie.iter().map(|w| w.into_iter().collect()).collect()
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, &x) in a.iter().enumerate() {
        let mut row = vec![i + 1; b.len() + 1];
        for (j, &y) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(x != y);
            row[j + 1] = substitute.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        prev = row;
    }
    prev[b.len()]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_iteration_matches_inserted_set(words in words_strategy()) {
        let mut trie: Trie<char> = Trie::new();
        let mut model = BTreeSet::new();
        for word in &words {
            let size = trie.size();
            let added = trie.add(word.as_str());
            prop_assert_eq!(added, model.insert(word.clone()));
            if !added {
                prop_assert_eq!(trie.size(), size);
            }
        }
        let got: BTreeSet<String> = listed(&trie).into_iter().collect();
        prop_assert_eq!(listed(&trie).len(), model.len());
        prop_assert_eq!(got, model);
    }

    #[test]
    fn prop_zero_distance_is_exact(words in words_strategy(), probe in word_strategy()) {
        let trie: Trie<char> = words.iter().collect();
        let found = trie.query(probe.as_str(), 0);
        if words.contains(&probe) {
            prop_assert_eq!(found.len(), 1);
            prop_assert_eq!(found.get(&probe.chars().collect::<Vec<_>>()), Some(&0));
        } else {
            prop_assert!(found.is_empty());
        }
    }

    #[test]
    fn prop_query_distance_bounds_edit_distance(
        words in words_strategy(),
        probe in word_strategy(),
        max_distance in 0usize..4,
    ) {
        let trie: Trie<char> = words.iter().collect();
        let probe: Vec<char> = probe.chars().collect();
        for (word, distance) in trie.query(probe.as_slice(), max_distance) {
            prop_assert!(distance <= max_distance);
            prop_assert!(trie.contains(word.as_slice()));
            prop_assert!(distance >= levenshtein(&probe, &word));
            prop_assert_eq!(distance == 0, word == probe);
        }
    }

    #[test]
    fn prop_compression_preserves_answers(
        words in words_strategy(),
        probes in prop::collection::vec(word_strategy(), 1..8),
    ) {
        let mut trie: Trie<char> = words.iter().collect();
        let before = trie.size();
        let expected: Vec<_> = probes
            .iter()
            .map(|p| (trie.contains(p.as_str()), trie.query(p.as_str(), 2)))
            .collect();

        trie.compress();
        prop_assert!(trie.size() <= before);
        for (probe, (contained, matches)) in probes.iter().zip(&expected) {
            prop_assert_eq!(trie.contains(probe.as_str()), *contained);
            prop_assert_eq!(&trie.query(probe.as_str(), 2), matches);
        }
        for word in &words {
            prop_assert!(trie.contains(word.as_str()));
        }

        let spelled = listed(&trie);
        let unique: BTreeSet<&String> = spelled.iter().collect();
        prop_assert_eq!(unique.len(), spelled.len());
        for word in &spelled {
            prop_assert!(words.contains(word));
        }

        let size = trie.size();
        let compressed = trie.is_compressed();
        trie.compress();
        prop_assert_eq!(trie.size(), size);
        prop_assert_eq!(trie.is_compressed(), compressed);
        prop_assert_eq!(listed(&trie), spelled);
    }

    #[test]
    fn prop_serialize_round_trip(
        words in words_strategy(),
        compress in any::<bool>(),
        probe in word_strategy(),
    ) {
        let mut trie: Trie<char> = words.iter().collect();
        if compress {
            trie.compress();
        }
        let bytes = trie.to_bytes().unwrap();
        let copy: Trie<char> = Trie::from_bytes(&bytes).unwrap();
        prop_assert_eq!(copy.size(), trie.size());
        prop_assert_eq!(copy.is_compressed(), trie.is_compressed());
        prop_assert_eq!(listed(&copy), listed(&trie));
        prop_assert_eq!(copy.query(probe.as_str(), 2), trie.query(probe.as_str(), 2));
        prop_assert_eq!(copy.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn prop_erase_removes_only_its_sequence(
        words in words_strategy(),
        erased in prop::collection::vec(word_strategy(), 0..10),
    ) {
        let mut trie: Trie<char> = words.iter().collect();
        let mut model: BTreeSet<String> = words.iter().cloned().collect();
        let size = trie.size();
        for word in &erased {
            prop_assert_eq!(trie.erase(word.as_str()), model.remove(word));
            prop_assert!(trie.find(word.as_str()).is_end());
        }
        prop_assert_eq!(trie.size(), size);
        let got: BTreeSet<String> = listed(&trie).into_iter().collect();
        prop_assert_eq!(got, model);
    }

    #[test]
    fn prop_erase_is_ignored_after_compression(
        words in prop::collection::vec(word_strategy(), 1..40),
    ) {
        let mut trie: Trie<char> = words.iter().collect();
        trie.compress();
        prop_assume!(trie.is_compressed());
        let before = listed(&trie);
        for word in &words {
            prop_assert!(!trie.erase(word.as_str()));
            prop_assert!(trie.contains(word.as_str()));
        }
        prop_assert_eq!(listed(&trie), before);
    }
}

#[test]
fn levenshtein_reference() {
    let d = |a: &str, b: &str| {
        levenshtein(
            &a.chars().collect::<Vec<_>>(),
            &b.chars().collect::<Vec<_>>(),
        )
    };
    assert_eq!(d("kitten", "sitting"), 3);
    assert_eq!(d("", "abc"), 3);
    assert_eq!(d("abc", "abc"), 0);
}

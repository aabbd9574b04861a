use super::*;
use crate::token::Element;
use crate::trie::SetTrie;

fn ints(vals: &[i64]) -> Vec<Element> {
    vals.iter().map(|&v| Element::Int(v)).collect()
}

#[test]
fn supersets_and_subsets_are_exact_on_a_small_trie() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[2, 3, 4]), "id2");
    trie.insert(&ints(&[2, 3, 4, 5]), "id4");

    let mut subsets: Vec<&str> =
        trie.subsets(&ints(&[3, 4, 2])).map(|id| trie.label(id).unwrap()).collect();
    subsets.sort();
    assert_eq!(subsets, vec!["id2"]);

    let mut supersets: Vec<&str> =
        trie.supersets(&ints(&[2, 3, 4])).map(|id| trie.label(id).unwrap()).collect();
    supersets.sort();
    assert_eq!(supersets, vec!["id2", "id4"]);
}

#[test]
fn exact_match_is_the_intersection_of_subsets_and_supersets() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1, 2, 3]), "s");
    trie.insert(&ints(&[1, 2]), "t");

    let subs: Vec<SetId> = trie.subsets(&ints(&[1, 2, 3])).collect();
    let sups: Vec<SetId> = trie.supersets(&ints(&[1, 2, 3])).collect();
    let both: Vec<&SetId> = subs.iter().filter(|id| sups.contains(id)).collect();
    assert_eq!(both.len(), 1);
    assert_eq!(trie.label(*both[0]), Some("s"));
}

#[test]
fn empty_query_subsets_only_matches_stored_empty_sets() {
    let mut trie = SetTrie::new();
    trie.insert(&[], "empty");
    trie.insert(&ints(&[1]), "one");

    let labels: Vec<&str> = trie.subsets(&[]).map(|id| trie.label(id).unwrap()).collect();
    assert_eq!(labels, vec!["empty"]);
}

#[test]
fn empty_query_supersets_matches_everything() {
    let mut trie = SetTrie::new();
    trie.insert(&[], "empty");
    trie.insert(&ints(&[1]), "one");
    trie.insert(&ints(&[1, 2]), "two");

    let mut labels: Vec<&str> = trie.supersets(&[]).map(|id| trie.label(id).unwrap()).collect();
    labels.sort();
    assert_eq!(labels, vec!["empty", "one", "two"]);
}

#[test]
fn subsets_prune_branches_that_cannot_match() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[9, 10]), "unrelated");
    trie.insert(&ints(&[1, 2]), "match");

    let labels: Vec<&str> = trie.subsets(&ints(&[1, 2, 3])).map(|id| trie.label(id).unwrap()).collect();
    assert_eq!(labels, vec!["match"]);
}

#[test]
fn queries_scale_to_a_larger_batch() {
    let mut trie = SetTrie::new();
    for i in 0..200i64 {
        trie.insert(&ints(&[2021, 3000 + i, 4000 + i * i]), format!("idx_{i}"));
    }

    assert_eq!(trie.find(&ints(&[2021, 3003, 4009])), Some("idx_3"));

    let count = trie.supersets(&ints(&[2021])).count();
    assert_eq!(count, 200);

    let labels: Vec<&str> =
        trie.supersets(&ints(&[3033])).map(|id| trie.label(id).unwrap()).collect();
    assert_eq!(labels, vec!["idx_33"]);
}

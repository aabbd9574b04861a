use super::*;
use crate::token::Element;
use crate::trie::SetTrie;

fn ints(vals: &[i64]) -> Vec<Element> {
    vals.iter().map(|&v| Element::Int(v)).collect()
}

#[test]
fn save_then_load_preserves_labels_and_sets() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1, 2]), "a");
    trie.insert(&ints(&[1, 2, 3]), "b");
    trie.insert(&[], "empty");
    trie.insert(&[Element::Str("Mon".into())], "day");

    let blocks = trie.to_blocks();
    let reloaded = SetTrie::from_blocks(&blocks).unwrap();

    assert_eq!(reloaded.find(&ints(&[1, 2])), Some("a"));
    assert_eq!(reloaded.find(&ints(&[1, 2, 3])), Some("b"));
    assert_eq!(reloaded.find(&[]), Some("empty"));
    assert_eq!(reloaded.find(&[Element::Str("Mon".into())]), Some("day"));

    let mut original_labels: Vec<&str> = trie.iter().map(|id| trie.label(id).unwrap()).collect();
    let mut reloaded_labels: Vec<&str> = reloaded.iter().map(|id| reloaded.label(id).unwrap()).collect();
    original_labels.sort();
    reloaded_labels.sort();
    assert_eq!(original_labels, reloaded_labels);
}

#[test]
fn large_trie_serializes_into_more_than_one_block() {
    let mut trie = SetTrie::new();
    for i in 0..2000i64 {
        trie.insert(&ints(&[2021, 3000 + i, 4000 + i * i]), format!("idx_{i}"));
    }

    let blocks = trie.to_blocks();
    assert!(blocks.len() > 2); // one sentinel plus at least one data block
    assert_eq!(blocks.last(), Some(&String::new()));

    let reloaded = SetTrie::from_blocks(&blocks).unwrap();
    assert_eq!(reloaded.find(&ints(&[2021, 3003, 4009])), Some("idx_3"));
    assert_eq!(reloaded.supersets(&ints(&[2021])).count(), 2000);
}

#[test]
fn corrupted_blocks_are_rejected() {
    let result = SetTrie::from_blocks(&["not hex at all!!".to_string(), String::new()]);
    assert!(result.is_err());
}

#[test]
fn the_trailing_sentinel_is_not_required_by_from_blocks() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1]), "a");
    let mut blocks = trie.to_blocks();
    blocks.pop(); // the sentinel only matters to a streaming pusher, not this slice-based api
    let reloaded = SetTrie::from_blocks(&blocks).unwrap();
    assert_eq!(reloaded.find(&ints(&[1])), Some("a"));
}

#[test]
fn a_purged_trie_round_trips_without_resurrecting_dead_nodes() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1, 2]), "a");
    trie.insert(&ints(&[1, 2, 3]), "b");
    trie.remove_by_label("b").unwrap();
    trie.purge();

    let reloaded = SetTrie::from_blocks(&trie.to_blocks()).unwrap();
    assert_eq!(reloaded.find(&ints(&[1, 2])), Some("a"));
    assert_eq!(reloaded.find(&ints(&[1, 2, 3])), None);
    assert_eq!(reloaded.len(), 1);
}

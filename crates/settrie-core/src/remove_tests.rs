use super::*;
use crate::error::Error;
use crate::token::Element;
use crate::trie::SetTrie;

fn ints(vals: &[i64]) -> Vec<Element> {
    vals.iter().map(|&v| Element::Int(v)).collect()
}

#[test]
fn remove_by_label_twice_fails_the_second_time() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1, 2]), "a");
    assert!(trie.remove_by_label("a").is_ok());
    assert_eq!(trie.remove_by_label("a"), Err(Error::NotFound));
}

#[test]
fn removed_sets_disappear_from_find_and_iteration() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1, 2]), "a");
    trie.insert(&ints(&[1, 2, 3]), "b");
    trie.remove_by_label("a").unwrap();

    assert_eq!(trie.find(&ints(&[1, 2])), None);
    let labels: Vec<&str> = trie.iter().map(|id| trie.label(id).unwrap()).collect();
    assert_eq!(labels, vec!["b"]);
}

#[test]
fn remove_by_id_skips_the_label_lookup() {
    let mut trie = SetTrie::new();
    let id = trie.insert(&ints(&[5]), "five");
    trie.remove_by_id(id).unwrap();
    assert_eq!(trie.find(&ints(&[5])), None);
}

#[test]
fn remove_by_label_of_an_unknown_label_fails() {
    let mut trie = SetTrie::new();
    assert_eq!(trie.remove_by_label("nope"), Err(Error::NotFound));
}

#[test]
fn purge_on_a_clean_trie_reclaims_nothing() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1]), "a");
    assert_eq!(trie.purge_dry_run(), 0);
    assert_eq!(trie.purge(), 0);
}

#[test]
fn purge_reclaims_dead_nodes_and_is_idempotent() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1, 2]), "a");
    trie.insert(&ints(&[1, 2, 3]), "b");
    trie.remove_by_label("b").unwrap();

    assert!(trie.purge_dry_run() > 0);
    let reclaimed = trie.purge();
    assert!(reclaimed > 0);
    assert_eq!(trie.purge(), 0);

    // surviving data is intact after compaction
    assert_eq!(trie.find(&ints(&[1, 2])), Some("a"));
}

#[test]
fn purge_never_removes_the_root() {
    let mut trie = SetTrie::new();
    trie.insert(&[], "empty");
    trie.remove_by_label("empty").unwrap();
    // root is dirty-non-terminal but must keep existing as the trie's base
    trie.purge();
    assert_eq!(trie.find(&[]), None);
    assert_eq!(trie.insert(&[], "empty-again"), crate::arena::Arena::root());
}

#[test]
fn a_dirty_node_can_be_revived_by_reinserting_its_path() {
    let mut trie = SetTrie::new();
    trie.insert(&ints(&[1, 2]), "a");
    trie.remove_by_label("a").unwrap();
    assert_eq!(trie.find(&ints(&[1, 2])), None);

    trie.insert(&ints(&[1, 2]), "a-again");
    assert_eq!(trie.find(&ints(&[1, 2])), Some("a-again"));
}

use super::*;

#[test]
fn new_node_reuses_existing_child() {
    let mut arena = Arena::new();
    let a = arena.new_node(Arena::root(), "1");
    let b = arena.new_node(Arena::root(), "1");
    assert_eq!(a, b);
}

#[test]
fn children_are_ordered_by_token() {
    let mut arena = Arena::new();
    arena.new_node(Arena::root(), "3");
    arena.new_node(Arena::root(), "1");
    arena.new_node(Arena::root(), "2");
    let tokens: Vec<&str> = arena.children(Arena::root()).map(|(t, _)| t).collect();
    assert_eq!(tokens, vec!["1", "2", "3"]);
}

#[test]
fn mark_terminal_then_dirty_tracks_terminal_count() {
    let mut arena = Arena::new();
    let a = arena.new_node(Arena::root(), "1");
    arena.mark_terminal(a, "x".into());
    assert_eq!(arena.num_terminals(), 1);
    arena.mark_dirty(a);
    assert_eq!(arena.num_terminals(), 0);
    assert!(!arena.get(a).terminal);
    assert!(arena.get(a).dirty);
}

#[test]
fn parent_chain_reaches_root() {
    let mut arena = Arena::new();
    let a = arena.new_node(Arena::root(), "1");
    let b = arena.new_node(a, "2");
    assert_eq!(arena.parent(b), Some(a));
    assert_eq!(arena.parent(a), Some(Arena::root()));
    assert_eq!(arena.parent(Arena::root()), None);
}

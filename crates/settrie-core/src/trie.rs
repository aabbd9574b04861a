//! Insertion, exact lookup, and whole-trie iteration (§4.2, §4.3).

use std::collections::HashMap;

use crate::arena::{Arena, NodeId};
use crate::token::{canonical_sort, Element};

/// Identifies a stored set; equal to the id of its terminal node.
pub type SetId = NodeId;

/// An in-memory trie of labeled sets.
///
/// Stores each inserted set along a root-to-leaf path keyed by its sorted
/// element tokens, so any two sets sharing a prefix share trie nodes. Exact,
/// subset, and superset queries run in time proportional to trie depth rather
/// than to the number of stored sets; see [`SetTrie::subsets`] and
/// [`SetTrie::supersets`].
///
/// Cursors returned by [`SetTrie::iter`], [`SetTrie::subsets`], and
/// [`SetTrie::supersets`] borrow the trie immutably, so the borrow checker
/// rejects any attempt to mutate it while a cursor is alive -- the original
/// implementation's "don't mutate during iteration" caveat becomes a
/// compile-time guarantee here rather than a runtime hazard.
#[derive(Debug, Clone)]
pub struct SetTrie {
    pub(crate) arena: Arena,
    pub(crate) label_index: Option<HashMap<String, NodeId>>,
}

impl Default for SetTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl SetTrie {
    pub fn new() -> Self {
        SetTrie { arena: Arena::new(), label_index: None }
    }

    /// Number of live (non-dirty, terminal) stored sets.
    pub fn len(&self) -> usize {
        self.arena.num_terminals()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `elements` under `label`.
    ///
    /// If a set with these exact elements is already stored, its label is
    /// replaced (last writer wins) and the existing id is returned; a dirty
    /// node on the path is revived in place rather than leaving a stale
    /// tombstone behind.
    pub fn insert(&mut self, elements: &[Element], label: impl Into<String>) -> SetId {
        self.label_index = None;
        let tokens = canonical_sort(elements);
        let mut node = Arena::root();
        for token in &tokens {
            node = self.arena.new_node(node, token);
        }
        self.arena.mark_terminal(node, label.into());
        node
    }

    /// Find the label of the stored set exactly equal to `elements`, if any.
    pub fn find(&self, elements: &[Element]) -> Option<&str> {
        let tokens = canonical_sort(elements);
        let mut node = Arena::root();
        for token in &tokens {
            node = self.arena.child_of(node, token)?;
        }
        let n = self.arena.get(node);
        if n.terminal { n.label.as_deref() } else { None }
    }

    /// Elements of the stored set identified by `id`, in token order.
    ///
    /// Returns `None` if `id` does not name a live terminal node.
    pub fn elements(&self, id: SetId) -> Option<Vec<Element>> {
        let n = self.arena.node_for_id(id)?;
        if !n.terminal {
            return None;
        }
        let mut tokens = Vec::new();
        let mut cur = id;
        loop {
            let node = self.arena.get(cur);
            match node.parent {
                Some(parent) => {
                    tokens.push(node.token.clone());
                    cur = parent;
                }
                None => break,
            }
        }
        tokens.reverse();
        Some(tokens.iter().map(|t| Element::parse_token(t)).collect())
    }

    /// The label of the stored set identified by `id`.
    pub fn label(&self, id: SetId) -> Option<&str> {
        let n = self.arena.node_for_id(id)?;
        if n.terminal { n.label.as_deref() } else { None }
    }

    /// Iterate over every live stored set's id, in pre-order.
    pub fn iter(&self) -> SetCursor<'_> {
        SetCursor { trie: self, stack: vec![Arena::root()] }
    }

    pub(crate) fn label_index(&mut self) -> &HashMap<String, NodeId> {
        if self.label_index.is_none() {
            let mut index = HashMap::new();
            for id in self.iter().collect::<Vec<_>>() {
                if let Some(label) = &self.arena.get(id).label {
                    index.insert(label.clone(), id);
                }
            }
            self.label_index = Some(index);
        }
        self.label_index.as_ref().unwrap()
    }

    pub(crate) fn evict_from_label_index(&mut self, label: &str) {
        if let Some(index) = &mut self.label_index {
            index.remove(label);
        }
    }
}

/// Pre-order cursor over every live stored set in a [`SetTrie`].
///
/// Walks an explicit stack rather than recursing, so it stays well-behaved
/// over deep or lopsided tries.
pub struct SetCursor<'a> {
    trie: &'a SetTrie,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for SetCursor<'a> {
    type Item = SetId;

    fn next(&mut self) -> Option<SetId> {
        while let Some(id) = self.stack.pop() {
            let node = self.trie.arena.get(id);
            let children: Vec<NodeId> = self.trie.arena.children(id).map(|(_, c)| c).collect();
            self.stack.extend(children.into_iter().rev());
            if node.terminal {
                return Some(id);
            }
        }
        None
    }
}

#[cfg(test)]
mod trie_tests;

//! Removal (lazy delete) and compaction (§4.5).
//!
//! Removing a set never touches the arena's shape: the node is just marked
//! dirty and stops counting as terminal. Purge is the only operation that
//! actually frees space, and it runs in two conceptual phases -- a dry-run
//! count, then (only if it found anything) a rewrite that drops dead subtrees
//! and renumbers every surviving node densely from the root.

use std::collections::HashSet;

use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use crate::trie::SetTrie;

impl SetTrie {
    /// Remove the stored set named `label`.
    ///
    /// Evicts just this entry from the cached label index rather than
    /// invalidating the whole cache, so a batch of unrelated removals stays
    /// cheap.
    pub fn remove_by_label(&mut self, label: &str) -> Result<()> {
        let id = *self.label_index().get(label).ok_or(Error::NotFound)?;
        self.remove_by_id(id)
    }

    /// Remove the stored set identified by `id`, as returned by
    /// [`SetTrie::iter`], [`SetTrie::subsets`], or [`SetTrie::supersets`].
    ///
    /// Cheaper than `remove_by_label` when the id is already in hand, since it
    /// skips the label index lookup.
    pub fn remove_by_id(&mut self, id: NodeId) -> Result<()> {
        let node = self.arena.node_for_id(id).ok_or(Error::NotFound)?;
        if !node.terminal {
            return Err(Error::NotFound);
        }
        if let Some(label) = node.label.clone() {
            self.evict_from_label_index(&label);
        }
        self.arena.mark_dirty(id);
        Ok(())
    }

    /// Count the dirty/dangling nodes that a [`SetTrie::purge`] would reclaim,
    /// without actually rewriting the arena.
    pub fn purge_dry_run(&self) -> usize {
        self.count_reclaimable(&self.find_useless())
    }

    /// Reclaim every dirty node and dead subtree, renumbering surviving nodes
    /// densely. Returns the number of nodes reclaimed; does nothing (and
    /// returns `0`) if there is nothing to reclaim.
    pub fn purge(&mut self) -> usize {
        let useless = self.find_useless();
        let reclaimed = self.count_reclaimable(&useless);
        if reclaimed == 0 {
            return 0;
        }
        let mut new_arena = Arena::new();
        self.copy_live(Arena::root(), Arena::root(), &useless, &mut new_arena);
        self.arena = new_arena;
        self.label_index = None;
        reclaimed
    }

    fn count_reclaimable(&self, useless: &HashSet<NodeId>) -> usize {
        useless.iter().filter(|&&id| id != Arena::root()).count()
    }

    /// A node is useless when it carries no live set itself and every
    /// descendant is useless too -- i.e. its whole subtree is dead weight.
    fn find_useless(&self) -> HashSet<NodeId> {
        let mut useless = HashSet::new();
        self.mark_useless(Arena::root(), &mut useless);
        useless
    }

    fn mark_useless(&self, id: NodeId, useless: &mut HashSet<NodeId>) -> bool {
        let node = self.arena.get(id);
        let children: Vec<NodeId> = self.arena.children(id).map(|(_, c)| c).collect();
        let mut all_children_useless = true;
        for child in children {
            if !self.mark_useless(child, useless) {
                all_children_useless = false;
            }
        }
        let is_useless = all_children_useless && !node.terminal;
        if is_useless {
            useless.insert(id);
        }
        is_useless
    }

    fn copy_live(&self, old_id: NodeId, new_id: NodeId, useless: &HashSet<NodeId>, new_arena: &mut Arena) {
        let old = self.arena.get(old_id);
        if old.terminal {
            new_arena.mark_terminal(
                new_id,
                old.label.clone().expect("terminal node always carries a label"),
            );
        }
        for (token, child) in self.arena.children(old_id) {
            if useless.contains(&child) {
                continue;
            }
            let new_child = new_arena.new_node(new_id, token);
            self.copy_live(child, new_child, useless, new_arena);
        }
    }
}

#[cfg(test)]
mod remove_tests;

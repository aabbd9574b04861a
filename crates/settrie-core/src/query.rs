//! Subset and superset traversals (§4.4), exposed as lazy cursor iterators.
//!
//! Both cursors drive an explicit stack of `(node, query_cursor)` frames
//! instead of recursing, and both prune whole subtrees the moment the sorted
//! query rules them out -- the traversal never visits more of the trie than
//! the query and its matches require.

use crate::arena::{Arena, NodeId};
use crate::token::{canonical_sort, Element};
use crate::trie::{SetId, SetTrie};

struct Frame {
    node: NodeId,
    matched: usize,
}

impl SetTrie {
    /// Stored sets that are subsets of `query`, as a lazy cursor over their ids.
    pub fn subsets(&self, query: &[Element]) -> SubsetQuery<'_> {
        SubsetQuery::new(self, query)
    }

    /// Stored sets that are supersets of `query`, as a lazy cursor over their ids.
    pub fn supersets(&self, query: &[Element]) -> SupersetQuery<'_> {
        SupersetQuery::new(self, query)
    }
}

/// Lazy cursor over the stored supersets of a query set.
pub struct SupersetQuery<'a> {
    trie: &'a SetTrie,
    query: Vec<String>,
    stack: Vec<Frame>,
}

impl<'a> SupersetQuery<'a> {
    fn new(trie: &'a SetTrie, query: &[Element]) -> Self {
        let tokens = canonical_sort(query);
        SupersetQuery { trie, query: tokens, stack: vec![Frame { node: Arena::root(), matched: 0 }] }
    }
}

impl<'a> Iterator for SupersetQuery<'a> {
    type Item = SetId;

    fn next(&mut self) -> Option<SetId> {
        while let Some(Frame { node, matched }) = self.stack.pop() {
            let n = self.trie.arena.get(node);
            for (token, child) in self.trie.arena.children(node) {
                let next_matched = if matched == self.query.len() {
                    // the whole query is already satisfied; every descendant qualifies
                    matched
                } else {
                    match token.cmp(self.query[matched].as_str()) {
                        std::cmp::Ordering::Less => matched,
                        std::cmp::Ordering::Equal => matched + 1,
                        std::cmp::Ordering::Greater => continue,
                    }
                };
                self.stack.push(Frame { node: child, matched: next_matched });
            }
            if n.terminal && matched == self.query.len() {
                return Some(node);
            }
        }
        None
    }
}

/// Lazy cursor over the stored subsets of a query set.
pub struct SubsetQuery<'a> {
    trie: &'a SetTrie,
    query: Vec<String>,
    stack: Vec<Frame>,
}

impl<'a> SubsetQuery<'a> {
    fn new(trie: &'a SetTrie, query: &[Element]) -> Self {
        let tokens = canonical_sort(query);
        SubsetQuery { trie, query: tokens, stack: vec![Frame { node: Arena::root(), matched: 0 }] }
    }
}

impl<'a> Iterator for SubsetQuery<'a> {
    type Item = SetId;

    fn next(&mut self) -> Option<SetId> {
        while let Some(Frame { node, matched }) = self.stack.pop() {
            let n = self.trie.arena.get(node);
            // children and the query are both token-sorted, so a single cursor
            // into the query can be advanced across the whole sibling scan.
            let mut j = matched;
            for (token, child) in self.trie.arena.children(node) {
                while j < self.query.len() && self.query[j].as_str() < token {
                    j += 1;
                }
                if j >= self.query.len() {
                    break; // no later (larger) sibling token can match either
                }
                if self.query[j] == token {
                    self.stack.push(Frame { node: child, matched: j + 1 });
                }
                // else query[j] > token: this child's token isn't in the query, skip it
            }
            if n.terminal {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod query_tests;

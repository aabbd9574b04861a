//! An in-memory trie of labeled sets (a "set-trie"), supporting exact,
//! subset, and superset membership queries in time proportional to trie
//! depth rather than to the number of stored sets.
//!
//! Each stored set is threaded through the trie along a root-to-leaf path
//! keyed by its elements' sorted canonical tokens (see [`Element`]), so sets
//! sharing a prefix share trie nodes. [`SetTrie::subsets`] and
//! [`SetTrie::supersets`] prune whole branches the moment the query rules
//! them out, rather than scanning every stored set.
//!
//! # Example
//!
//! ```
//! use settrie_core::{Element, SetTrie};
//!
//! let mut trie = SetTrie::new();
//! trie.insert(&[Element::Int(2), Element::Int(3)], "id2");
//! trie.insert(&[Element::Int(2), Element::Int(3), Element::Int(4)], "id4");
//!
//! assert_eq!(trie.find(&[Element::Int(3), Element::Int(2)]), Some("id2"));
//!
//! let supersets: Vec<&str> = trie
//!     .supersets(&[Element::Int(2)])
//!     .map(|id| trie.label(id).unwrap())
//!     .collect();
//! assert_eq!(supersets.len(), 2);
//! ```
//!
//! Labeled sets can be removed ([`SetTrie::remove_by_label`],
//! [`SetTrie::remove_by_id`]) and reclaimed ([`SetTrie::purge`]), and a whole
//! trie can be serialized to and restored from a sequence of printable text
//! blocks ([`SetTrie::to_blocks`], [`SetTrie::from_blocks`]).

mod arena;
pub mod error;
mod image;
mod query;
mod remove;
mod token;
mod trie;

pub use arena::NodeId;
pub use error::{Error, Result};
pub use query::{SubsetQuery, SupersetQuery};
pub use token::{canonical_sort, Element};
pub use trie::{SetCursor, SetId, SetTrie};

//! Process-wide handle registry over `settrie-core` (§6).
//!
//! Emulates the original binding's FFI boundary: tries, query results, and
//! images are all opaque integer handles in a process-wide table, and every
//! function here has a total, never-panics contract -- unknown handles and
//! absent keys come back as sentinels, never a `Result`/`Option` the caller
//! has to unwrap. `settrie-core` itself stays ordinary `Result`/`Option`
//! idiomatic Rust; this module is where that gets translated to the
//! sentinel-based contract, and nowhere else.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use settrie_core::{Element, NodeId, SetTrie};

pub type Handle = i64;

const BAD_HANDLE: i64 = -3;
const ITER_END: i64 = -2;

/// Disambiguates `remove`'s "id-or-label" input (§6) without string-sniffing.
pub enum RemoveKey<'a> {
    Id(i64),
    Label(&'a str),
}

#[derive(Default)]
struct State {
    tries: HashMap<Handle, SetTrie>,
    iterators: HashMap<Handle, Vec<String>>,
    images: HashMap<Handle, Vec<String>>,
    pending_images: HashMap<Handle, Vec<String>>,
    next_handle: Handle,
}

impl State {
    fn alloc(&mut self) -> Handle {
        self.next_handle += 1;
        self.next_handle
    }
}

fn state() -> &'static Mutex<State> {
    static STATE: OnceLock<Mutex<State>> = OnceLock::new();
    STATE.get_or_init(|| Mutex::new(State::default()))
}

pub fn new_settrie() -> Handle {
    let mut s = state().lock().unwrap();
    let handle = s.alloc();
    s.tries.insert(handle, SetTrie::new());
    handle
}

pub fn destroy_settrie(handle: Handle) {
    state().lock().unwrap().tries.remove(&handle);
}

pub fn insert(handle: Handle, set_literal: &str, label: &str) -> bool {
    let mut s = state().lock().unwrap();
    let Some(trie) = s.tries.get_mut(&handle) else { return false };
    let elements = crate::setlit::parse(set_literal);
    trie.insert(&elements, label.to_string());
    true
}

pub fn find(handle: Handle, set_literal: &str) -> String {
    let s = state().lock().unwrap();
    let Some(trie) = s.tries.get(&handle) else { return String::new() };
    let elements = crate::setlit::parse(set_literal);
    trie.find(&elements).unwrap_or("").to_string()
}

pub fn supersets(handle: Handle, set_literal: &str) -> Handle {
    query_iterator(handle, set_literal, true)
}

pub fn subsets(handle: Handle, set_literal: &str) -> Handle {
    query_iterator(handle, set_literal, false)
}

fn query_iterator(handle: Handle, set_literal: &str, is_superset: bool) -> Handle {
    let mut s = state().lock().unwrap();
    let Some(trie) = s.tries.get(&handle) else { return 0 };
    let elements = crate::setlit::parse(set_literal);
    let labels: Vec<String> = if is_superset {
        trie.supersets(&elements).map(|id| trie.label(id).unwrap_or("").to_string()).collect()
    } else {
        trie.subsets(&elements).map(|id| trie.label(id).unwrap_or("").to_string()).collect()
    };
    let iter_handle = s.alloc();
    s.iterators.insert(iter_handle, labels);
    iter_handle
}

/// Whole-trie enumeration, one step at a time: pass `-1` to get the first id.
pub fn next_set_id(handle: Handle, previous: i64) -> i64 {
    let s = state().lock().unwrap();
    let Some(trie) = s.tries.get(&handle) else { return BAD_HANDLE };
    let ids: Vec<i64> = trie.iter().map(|id| id.index() as i64).collect();
    if previous < 0 {
        return ids.first().copied().unwrap_or(ITER_END);
    }
    match ids.iter().position(|&id| id == previous) {
        Some(pos) if pos + 1 < ids.len() => ids[pos + 1],
        _ => ITER_END,
    }
}

pub fn set_name(handle: Handle, set_id: i64) -> String {
    let s = state().lock().unwrap();
    let Some(trie) = s.tries.get(&handle) else { return String::new() };
    let Ok(id) = usize::try_from(set_id) else { return String::new() };
    trie.label(NodeId::from(id)).unwrap_or("").to_string()
}

/// Returns an iterator handle over this set's element tokens, or `0` for both
/// an empty set and an invalid id -- the decided reading of the empty-set
/// open question (§9): the empty set gets no handle of its own, same as a
/// miss.
pub fn elements(handle: Handle, set_id: i64) -> Handle {
    let mut s = state().lock().unwrap();
    let Some(trie) = s.tries.get(&handle) else { return 0 };
    let Ok(id) = usize::try_from(set_id) else { return 0 };
    let Some(elements) = trie.elements(NodeId::from(id)) else { return 0 };
    if elements.is_empty() {
        return 0;
    }
    let tokens: Vec<String> = elements.iter().map(Element::token).collect();
    let iter_handle = s.alloc();
    s.iterators.insert(iter_handle, tokens);
    iter_handle
}

pub fn remove(handle: Handle, key: RemoveKey<'_>) -> i32 {
    let mut s = state().lock().unwrap();
    let Some(trie) = s.tries.get_mut(&handle) else { return BAD_HANDLE as i32 };
    let result = match key {
        RemoveKey::Label(label) => trie.remove_by_label(label),
        RemoveKey::Id(id) => match usize::try_from(id) {
            Ok(id) => trie.remove_by_id(NodeId::from(id)),
            Err(_) => return -1,
        },
    };
    match result {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

pub fn purge(handle: Handle, dry_run: bool) -> usize {
    let mut s = state().lock().unwrap();
    let Some(trie) = s.tries.get_mut(&handle) else { return 0 };
    if dry_run { trie.purge_dry_run() } else { trie.purge() }
}

pub fn iterator_size(iter_handle: Handle) -> usize {
    state().lock().unwrap().iterators.get(&iter_handle).map(Vec::len).unwrap_or(0)
}

pub fn iterator_next(iter_handle: Handle) -> Option<String> {
    let mut s = state().lock().unwrap();
    let items = s.iterators.get_mut(&iter_handle)?;
    if items.is_empty() { None } else { Some(items.remove(0)) }
}

pub fn destroy_iterator(iter_handle: Handle) {
    // a no-op on an unknown handle, per §6's error surface
    state().lock().unwrap().iterators.remove(&iter_handle);
}

pub fn save_as_binary_image(handle: Handle) -> Handle {
    let mut s = state().lock().unwrap();
    let Some(trie) = s.tries.get(&handle) else { return 0 };
    let blocks = trie.to_blocks();
    let image_handle = s.alloc();
    s.images.insert(image_handle, blocks);
    image_handle
}

/// Accepts one block of a streamed image; an empty block commits everything
/// pushed so far and replaces `handle`'s trie with the decoded result (or, on
/// a malformed image, an empty trie). Returns whether the block -- or, for
/// the empty sentinel, the whole image -- was accepted.
pub fn push_binary_image_block(handle: Handle, block: &str) -> bool {
    let mut s = state().lock().unwrap();
    if !s.tries.contains_key(&handle) {
        return false;
    }
    let pending = s.pending_images.entry(handle).or_default();
    if block.is_empty() {
        let blocks = std::mem::take(pending);
        match SetTrie::from_blocks(&blocks) {
            Ok(trie) => {
                s.tries.insert(handle, trie);
                true
            }
            Err(_) => {
                s.tries.insert(handle, SetTrie::new());
                false
            }
        }
    } else {
        pending.push(block.to_string());
        true
    }
}

pub fn binary_image_size(image_handle: Handle) -> usize {
    state().lock().unwrap().images.get(&image_handle).map(Vec::len).unwrap_or(0)
}

pub fn binary_image_next(image_handle: Handle) -> Option<String> {
    let mut s = state().lock().unwrap();
    let blocks = s.images.get_mut(&image_handle)?;
    if blocks.is_empty() { None } else { Some(blocks.remove(0)) }
}

pub fn destroy_binary_image(image_handle: Handle) {
    state().lock().unwrap().images.remove(&image_handle);
}

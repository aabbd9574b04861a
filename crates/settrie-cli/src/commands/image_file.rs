//! Shared helper: load a trie handle from an on-disk image file, and save a
//! mutated handle back to it.
//!
//! The file is the block stream itself, one block per line, in the order
//! [`settrie_core::SetTrie::to_blocks`] emits them. Loading pushes each line
//! through [`registry::push_binary_image_block`] exactly as a streaming
//! caller on the other side of the binding boundary would.

use std::fs;
use std::path::Path;

use crate::registry::{self, Handle};

/// Loads `path` into a fresh trie handle if it exists; otherwise returns an
/// empty trie, so a first `insert` against a not-yet-created image just works.
pub fn load(path: &Path) -> Handle {
    let handle = registry::new_settrie();
    if let Ok(contents) = fs::read_to_string(path) {
        let mut lines: Vec<&str> = contents.lines().collect();
        if lines.last() != Some(&"") {
            lines.push(""); // ensure the end-of-stream sentinel is always pushed, once
        }
        for line in lines {
            registry::push_binary_image_block(handle, line);
        }
    }
    handle
}

pub fn save(handle: Handle, path: &Path) -> std::io::Result<()> {
    let image_handle = registry::save_as_binary_image(handle);
    let mut contents = String::new();
    while let Some(block) = registry::binary_image_next(image_handle) {
        contents.push_str(&block);
        contents.push('\n');
    }
    registry::destroy_binary_image(image_handle);
    fs::write(path, contents)
}

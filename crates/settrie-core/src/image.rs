//! Binary image codec (§4.6): serialize/deserialize the arena as a sequence of
//! fixed-size printable text blocks.
//!
//! Node records are encoded compactly with `postcard`, then hex-encoded into a
//! printable ASCII string and chopped into `BLOCK_SIZE`-character blocks. This
//! keeps the wire encoding compact while meeting the "printable text payload"
//! requirement without pulling in a base64 dependency nowhere else in this
//! crate's stack.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use crate::trie::SetTrie;

/// Current image format version. Bump when [`ImageHeader`]/[`ImageNode`]'s
/// wire shape changes in a way `from_blocks` can no longer infer on its own.
const VERSION: u32 = 1;

/// Characters per emitted block.
const BLOCK_SIZE: usize = 4096;

#[derive(Debug, Serialize, Deserialize)]
struct ImageHeader {
    version: u32,
    node_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ImageNode {
    parent: u32,
    token: String,
    terminal: bool,
    dirty: bool,
    label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Image {
    header: ImageHeader,
    nodes: Vec<ImageNode>,
}

impl SetTrie {
    /// Serialize this trie into a sequence of printable text blocks, ending in
    /// a single empty block -- the end-of-stream sentinel a streaming writer
    /// uses to know the image is complete.
    pub fn to_blocks(&self) -> Vec<String> {
        let mut nodes = Vec::new();
        self.collect_dfs(Arena::root(), 0, &mut nodes);
        let image =
            Image { header: ImageHeader { version: VERSION, node_count: nodes.len() as u32 }, nodes };

        let bytes = postcard::to_allocvec(&image).expect("image serialization cannot fail");
        let hex = to_hex(&bytes);
        let mut blocks: Vec<String> = hex
            .as_bytes()
            .chunks(BLOCK_SIZE)
            .map(|chunk| String::from_utf8(chunk.to_vec()).expect("hex output is always ASCII"))
            .collect();
        blocks.push(String::new());
        blocks
    }

    /// Reconstruct a trie from blocks produced by [`SetTrie::to_blocks`].
    ///
    /// Validates that the root exists, that every node's parent index
    /// precedes it, and that each parent's children appear in ascending token
    /// order. On any validation failure, returns
    /// [`Error::MalformedImage`] -- a fresh trie is only ever handed back on
    /// success, so a failed load never leaves partial state for the caller to
    /// trip over.
    pub fn from_blocks(blocks: &[String]) -> Result<SetTrie> {
        let hex: String = blocks.iter().map(String::as_str).collect();
        let bytes = from_hex(&hex).ok_or_else(|| Error::MalformedImage("blocks are not valid hex".into()))?;
        let image: Image =
            postcard::from_bytes(&bytes).map_err(|e| Error::MalformedImage(format!("postcard decode failed: {e}")))?;

        if image.header.version != VERSION {
            return Err(Error::MalformedImage(format!("unsupported image version {}", image.header.version)));
        }
        if image.nodes.len() != image.header.node_count as usize {
            return Err(Error::MalformedImage("node count mismatch".into()));
        }
        if image.nodes.is_empty() {
            return Err(Error::MalformedImage("image has no root node".into()));
        }

        let root = &image.nodes[0];
        if root.parent != 0 || !root.token.is_empty() {
            return Err(Error::MalformedImage("root node malformed".into()));
        }

        let mut arena = Arena::new();
        if root.terminal {
            let label = root
                .label
                .clone()
                .ok_or_else(|| Error::MalformedImage("terminal root missing label".into()))?;
            arena.mark_terminal(NodeId::from(0usize), label);
        }

        let mut last_token_per_parent: HashMap<u32, String> = HashMap::new();

        for (i, record) in image.nodes.iter().enumerate().skip(1) {
            if record.parent as usize >= i {
                return Err(Error::MalformedImage(format!(
                    "node {i} references parent {} which does not precede it",
                    record.parent
                )));
            }
            if let Some(last) = last_token_per_parent.get(&record.parent) {
                if record.token.as_str() <= last.as_str() {
                    return Err(Error::MalformedImage(format!(
                        "node {i} is out of token order under parent {}",
                        record.parent
                    )));
                }
            }
            last_token_per_parent.insert(record.parent, record.token.clone());

            let parent_id = NodeId::from(record.parent as usize);
            let new_id = arena.new_node(parent_id, &record.token);
            if new_id.index() != i {
                return Err(Error::MalformedImage(format!(
                    "node {i} did not receive the expected id (got {})",
                    new_id.index()
                )));
            }
            if record.terminal {
                let label = record
                    .label
                    .clone()
                    .ok_or_else(|| Error::MalformedImage(format!("terminal node {i} missing label")))?;
                arena.mark_terminal(new_id, label);
            } else if record.dirty {
                arena.mark_dirty(new_id);
            }
        }

        Ok(SetTrie { arena, label_index: None })
    }

    /// Depth-first pre-order walk, visiting children in (already sorted)
    /// token order, remapping ids to their position in `out` as it goes.
    fn collect_dfs(&self, id: NodeId, parent_index: u32, out: &mut Vec<ImageNode>) {
        let node = self.arena.get(id);
        let my_index = out.len() as u32;
        out.push(ImageNode {
            parent: parent_index,
            token: node.token.clone(),
            terminal: node.terminal,
            dirty: node.dirty,
            label: node.label.clone(),
        });
        for (_, child) in self.arena.children(id) {
            self.collect_dfs(child, my_index, out);
        }
    }
}

fn to_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

fn from_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    let mut i = 0;
    while i < bytes.len() {
        let hi = hex_digit(bytes[i])?;
        let lo = hex_digit(bytes[i + 1])?;
        out.push((hi << 4) | lo);
        i += 2;
    }
    Some(out)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod image_tests;

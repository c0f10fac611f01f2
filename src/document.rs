//! Host document seam
//!
//! The engine itself works on plain strings; this module is the only
//! place that knows about a host document. The interface is kept
//! narrow: locate blocks by group, get/set a block's text content, and
//! wrap a block in a themed container.

use std::collections::HashMap;

/// Opaque handle to one text block in a host document
pub type BlockId = usize;

/// Narrow interface onto a host document
///
/// Implementations must return blocks in a stable document order from
/// [`blocks_in_group`](HostDocument::blocks_in_group); ids handed out
/// there are the only valid arguments to the other methods.
pub trait HostDocument {
    /// Blocks belonging to a group, in document order; empty if none
    fn blocks_in_group(&self, group: &str) -> Vec<BlockId>;

    /// Current text content of a block
    fn text(&self, block: BlockId) -> String;

    /// Replace a block's text content
    fn set_text(&mut self, block: BlockId, text: String);

    /// Presentation step: wrap the block in a container element and
    /// assign the theme as a style class on that container
    fn wrap_block(&mut self, block: BlockId, theme: &str);
}

/// One block in a [`MemoryDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBlock {
    /// Group identifier this block belongs to
    pub group: String,
    /// Text content
    pub text: String,
    /// Container class once wrapped (e.g. "acc-dark"), `None` before
    pub container: Option<String>,
}

/// In-memory host document
///
/// Used by tests and headless callers; real hosts implement
/// [`HostDocument`] over their own element tree.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    blocks: Vec<MemoryBlock>,
    groups: HashMap<String, Vec<BlockId>>,
}

impl MemoryDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block to a group, returning its handle
    pub fn add_block(&mut self, group: &str, text: &str) -> BlockId {
        let id = self.blocks.len();
        self.blocks.push(MemoryBlock {
            group: group.to_string(),
            text: text.to_string(),
            container: None,
        });
        self.groups.entry(group.to_string()).or_default().push(id);
        id
    }

    /// Inspect a block
    pub fn block(&self, id: BlockId) -> &MemoryBlock {
        &self.blocks[id]
    }
}

impl HostDocument for MemoryDocument {
    fn blocks_in_group(&self, group: &str) -> Vec<BlockId> {
        self.groups.get(group).cloned().unwrap_or_default()
    }

    fn text(&self, block: BlockId) -> String {
        self.blocks[block].text.clone()
    }

    fn set_text(&mut self, block: BlockId, text: String) {
        self.blocks[block].text = text;
    }

    fn wrap_block(&mut self, block: BlockId, theme: &str) {
        self.blocks[block].container = Some(format!("acc-{}", theme));
    }
}

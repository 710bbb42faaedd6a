//! Document-level types.

use super::{Block, BlockKind};
use serde::{Deserialize, Serialize};

/// A converted summary: blocks in the order their source appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a block to the document.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append several blocks, keeping their order.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Get the number of blocks in the document.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Get the blocks as a slice.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Take ownership of the blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Count blocks of the given kind.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind() == kind).count()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

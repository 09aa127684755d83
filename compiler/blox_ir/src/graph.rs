//! Block Graph Arena
//!
//! Owns every block of one workspace. Top-level blocks (stacks not plugged
//! into anything) are kept in editor order; that order is the order the
//! emitter translates them in.

use crate::{Block, BlockId};

/// Arena of blocks for one workspace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockGraph {
    blocks: Vec<Block>,
    top: Vec<BlockId>,
    variables: Vec<String>,
}

impl BlockGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the arena and return its ID.
    ///
    /// Children must be added before their parents, since the parent's
    /// builder needs the child's ID.
    pub fn add(&mut self, block: Block) -> BlockId {
        let id = BlockId::new(u32::try_from(self.blocks.len()).unwrap_or(u32::MAX));
        self.blocks.push(block);
        id
    }

    /// Add a block and register it as a top-level block.
    pub fn add_top(&mut self, block: Block) -> BlockId {
        let id = self.add(block);
        self.top.push(id);
        id
    }

    /// Register an existing block as top-level.
    pub fn push_top(&mut self, id: BlockId) {
        self.top.push(id);
    }

    /// Declare a workspace variable.
    ///
    /// Declared variables are emitted up front even if no block uses them.
    pub fn declare_variable(&mut self, name: impl Into<String>) {
        let name = name.into();
        let key = name.to_lowercase();
        if !self.variables.iter().any(|v| v.to_lowercase() == key) {
            self.variables.push(name);
        }
    }

    /// Get a block by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this graph.
    #[inline]
    pub fn get(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Top-level blocks in editor order.
    pub fn top_blocks(&self) -> &[BlockId] {
        &self.top
    }

    /// Declared workspace variables in declaration order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

//! The chain — an ordered, append-only sequence of blocks.
//!
//! `append` is deliberately unconditional: no `previous_hash` linkage check,
//! no index-continuity check, no validator legitimacy check. Any block a
//! caller hands over — self-created or received from a peer — is accepted
//! as-is. That is the protocol's documented contract, weak as it is; callers
//! must not assume appended blocks were validated.

use crate::error::ChainError;
use stakecast_types::Block;

/// Ordered block sequence. Non-empty from construction onward.
#[derive(Clone, Debug)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain seeded with the genesis block.
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::genesis()],
        }
    }

    /// Append `block` to the end of the chain, unconditionally.
    pub fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The most recently appended block.
    pub fn latest(&self) -> Result<&Block, ChainError> {
        self.blocks.last().ok_or(ChainError::EmptyChain)
    }

    /// The full ordered sequence, read-only.
    pub fn all(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false for a chain built through [`Chain::new`].
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

//! # Chunk Creation Module
//!
//! The builder through which every chunk comes into existence. It keeps the
//! solidity bit vector and the block map consistent while the terrain
//! generator fills columns, and only hands out a finished [`Chunk`].
//!
//! Publish-after-build: a generation task constructs the entire chunk through
//! this builder on its worker thread and only then inserts it into the world,
//! so no reader can ever observe a partially filled chunk.

use std::collections::HashMap;

use bitvec::vec::BitVec;

use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::Block;
use crate::voxels::position::{BlockPos, ChunkPos};

use super::{Chunk, CHUNK_VOLUME};

/// Accumulates blocks for a chunk under construction.
pub struct ChunkBuilder {
    position: ChunkPos,
    solid: BitVec,
    blocks: HashMap<BlockPos, Block>,
}

impl ChunkBuilder {
    /// Creates a builder for a chunk at the given position, with every cell
    /// initially air.
    pub fn new(position: ChunkPos) -> Self {
        ChunkBuilder {
            position,
            solid: BitVec::repeat(false, CHUNK_VOLUME),
            blocks: HashMap::new(),
        }
    }

    /// Places a block at a local position, keeping the solidity vector and
    /// the block map in step. Placing `AIR` is a no-op since air is the
    /// implicit default.
    pub fn set_block(&mut self, local: BlockPos, block_type: BlockType) {
        debug_assert!(Chunk::in_bounds(local), "block out of chunk bounds: {local:?}");
        if !block_type.is_solid() {
            return;
        }
        self.solid.set(Chunk::solid_index(local), true);
        self.blocks.insert(local, Block::new(block_type));
    }

    /// Finalizes construction and returns the immutable chunk.
    pub fn build(self) -> Chunk {
        Chunk {
            position: self.position,
            solid: self.solid,
            blocks: self.blocks,
        }
    }
}

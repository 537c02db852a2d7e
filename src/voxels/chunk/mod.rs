//! # Chunk Module
//!
//! The `Chunk` struct and its storage: a 16×16-column, 256-block-tall
//! partition of the voxel world, the unit of generation and storage.
//!
//! ## Storage Strategy
//!
//! Chunks use a dual layout:
//! - `solid`: a bit vector (1 bit per cell over the full 16×16×256 volume)
//!   giving O(1) solidity checks, which is the query the physics layer hammers
//!   every tick
//! - `blocks`: a map holding only the non-air blocks, keyed by local
//!   position, for the typed lookups the renderer needs
//!
//! Terrain columns are contiguous from the world floor, so the overwhelming
//! majority of cells are air above the surface; air costs one clear bit and
//! no map entry.
//!
//! ## Immutability
//!
//! A chunk is built once, atomically, through [`ChunkBuilder`] and never
//! mutated afterwards. There is no `set_block`: the world only ever adds whole
//! chunks.

use std::collections::HashMap;

use bitvec::vec::BitVec;

use super::block::block_type::BlockType;
use super::block::Block;
use super::position::{BlockPos, ChunkPos};

pub use chunk_creation::ChunkBuilder;
pub use chunk_iteration::ChunkBlockIterator;
pub use terrain::TerrainError;

mod chunk_creation;
pub mod chunk_iteration;
pub mod terrain;

/// The dimension (width and depth) of a chunk's footprint in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of columns in a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The height of the world in blocks; valid block Y is `[0, MAX_WORLD_HEIGHT)`.
pub const MAX_WORLD_HEIGHT: i32 = 256;
/// The total number of cells in a chunk.
pub const CHUNK_VOLUME: usize = (CHUNK_PLANE_SIZE * MAX_WORLD_HEIGHT) as usize;

/// A 16×16-column, full-height partition of the voxel world.
///
/// Local coordinates satisfy `x, z ∈ [0, 16)` and `y ∈ [0, 256)`; anything a
/// chunk does not store is air. Invariant: every non-air column is contiguous
/// from `y = 0` up to its terrain height, with nothing above it.
#[derive(Debug, PartialEq, Eq)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: ChunkPos,

    /// One bit per cell, set when the cell holds a solid block. Indexed in
    /// Y-major, then Z, then X order.
    solid: BitVec,

    /// The non-air blocks of this chunk, keyed by local position.
    blocks: HashMap<BlockPos, Block>,
}

impl Chunk {
    /// Bit index of a local position in the solidity vector. Callers check
    /// bounds first.
    fn solid_index(local: BlockPos) -> usize {
        (local.y * CHUNK_PLANE_SIZE + local.z * CHUNK_DIMENSION + local.x) as usize
    }

    /// Whether a local position lies inside the chunk volume.
    pub fn in_bounds(local: BlockPos) -> bool {
        (0..CHUNK_DIMENSION).contains(&local.x)
            && (0..MAX_WORLD_HEIGHT).contains(&local.y)
            && (0..CHUNK_DIMENSION).contains(&local.z)
    }

    /// Whether the cell at the given local position holds a solid block.
    /// Out-of-range positions read as air.
    pub fn is_block_solid(&self, local: BlockPos) -> bool {
        Self::in_bounds(local) && self.solid[Self::solid_index(local)]
    }

    /// The block type at the given local position; air for any position the
    /// chunk does not store, including out-of-range ones.
    pub fn block_at(&self, local: BlockPos) -> BlockType {
        self.blocks
            .get(&local)
            .map(Block::block_type)
            .unwrap_or(BlockType::AIR)
    }

    /// The number of non-air blocks in this chunk.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

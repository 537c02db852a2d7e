//! # World Module
//!
//! The `World` struct: the chunk store, a sparse map from chunk coordinate to
//! generated chunk.
//!
//! ## Growth and Concurrency
//!
//! The store is sparse and monotonic: chunks are inserted exactly once by
//! generation tasks and never removed or mutated afterwards, so the world
//! grows for the life of the process. It is shared between the simulation
//! thread and the generation workers as an
//! [`MtResource<World>`](crate::core::MtResource); every chunk is fully built
//! before the brief write lock that publishes it, so a reader can never
//! observe a partial chunk, and no lock is ever held across a generation
//! call.
//!
//! ## Queries
//!
//! Block queries resolve world coordinates to a chunk by floor-division and
//! to a local position by floor-modulo, which keeps negative coordinates
//! correct. A missing chunk is not an error — it simply hasn't streamed in
//! yet and reads as air.

use std::collections::HashMap;
use std::sync::Arc;

use super::block::block_type::BlockType;
use super::chunk::{Chunk, MAX_WORLD_HEIGHT};
use super::position::{local_block_pos, ChunkPos};
use super::BlockQuery;

/// A voxel world composed of generated chunks, keyed by chunk coordinate.
pub struct World {
    chunks: HashMap<ChunkPos, Arc<Chunk>>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
        }
    }

    /// Publishes a fully built chunk into the store, keyed by its own
    /// position.
    ///
    /// Re-inserting a coordinate replaces the chunk with an identical one
    /// (generation is deterministic), so duplicate generation races are
    /// harmless.
    pub fn insert_chunk(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.position, Arc::new(chunk));
    }

    /// Whether a chunk has been generated at the given coordinate.
    pub fn contains_chunk(&self, position: ChunkPos) -> bool {
        self.chunks.contains_key(&position)
    }

    /// The chunk at the given coordinate, if it has been generated.
    ///
    /// Chunks are immutable, so the returned handle can be held and read
    /// freely (the renderer iterates it outside any world lock).
    pub fn get_chunk_at(&self, position: ChunkPos) -> Option<Arc<Chunk>> {
        self.chunks.get(&position).cloned()
    }

    /// The number of chunks generated so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The block type at a world-space position.
    ///
    /// Air when `y` is outside `[0, 256)`, when the containing chunk has not
    /// been generated, or when the chunk stores nothing at that cell.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> BlockType {
        if !(0..MAX_WORLD_HEIGHT).contains(&y) {
            return BlockType::AIR;
        }
        match self.chunks.get(&ChunkPos::containing(x, z)) {
            Some(chunk) => chunk.block_at(local_block_pos(x, y, z)),
            None => BlockType::AIR,
        }
    }

    /// Whether a solid block occupies the world-space cell `(x, y, z)`.
    pub fn is_block_at(&self, x: i32, y: i32, z: i32) -> bool {
        if !(0..MAX_WORLD_HEIGHT).contains(&y) {
            return false;
        }
        match self.chunks.get(&ChunkPos::containing(x, z)) {
            Some(chunk) => chunk.is_block_solid(local_block_pos(x, y, z)),
            None => false,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockQuery for World {
    fn is_block_at(&self, x: i32, y: i32, z: i32) -> bool {
        World::is_block_at(self, x, y, z)
    }
}

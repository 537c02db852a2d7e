//! # Position Types
//!
//! Coordinate types and the world → chunk/local mapping. World coordinates
//! are absolute block positions; chunk coordinates are world X/Z
//! floor-divided by the chunk footprint, which keeps the mapping correct for
//! negative coordinates.

use std::fmt;

use cgmath::Point3;

use super::chunk::CHUNK_DIMENSION;

/// A block position, in world space or chunk-local space depending on
/// context. Local positions satisfy `x, z ∈ [0, 16)` and `y ∈ [0, 256)`.
pub type BlockPos = Point3<i32>;

/// Identifies a chunk's location in chunk-grid units.
///
/// The store's primary key: value semantics, hashable, two-dimensional since
/// chunks span the full world height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkPos {
    /// Creates a chunk position from chunk-grid coordinates.
    pub const fn new(x: i32, z: i32) -> Self {
        ChunkPos { x, z }
    }

    /// The chunk containing the world-space column `(world_x, world_z)`.
    pub fn containing(world_x: i32, world_z: i32) -> Self {
        ChunkPos {
            x: world_x.div_euclid(CHUNK_DIMENSION),
            z: world_z.div_euclid(CHUNK_DIMENSION),
        }
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.z)
    }
}

/// Converts a world-space block position into chunk-local coordinates.
///
/// X and Z are floor-modulo reduced into `[0, 16)`; Y passes through
/// unchanged since chunks span the full world height.
pub fn local_block_pos(world_x: i32, world_y: i32, world_z: i32) -> BlockPos {
    BlockPos::new(
        world_x.rem_euclid(CHUNK_DIMENSION),
        world_y,
        world_z.rem_euclid(CHUNK_DIMENSION),
    )
}

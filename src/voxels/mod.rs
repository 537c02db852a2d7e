//! # Voxels Module
//!
//! Everything that makes up the voxel world: block and coordinate types, the
//! seeded noise field, chunk storage and terrain generation, the chunk store,
//! and the streaming layer that keeps chunks loaded around the observer.

pub mod block;
pub mod chunk;
pub mod noise;
pub mod position;
pub mod streaming;
pub mod tasks;
pub mod world;

/// A queryable grid of solid blocks.
///
/// This is the seam between the world and its consumers (physics, and the
/// external renderer/input layers). Absent terrain — a chunk that has not
/// streamed in yet — reads as open space, never as an error, so movement
/// stays live while generation catches up.
pub trait BlockQuery {
    /// Whether a solid block occupies the world-space cell `(x, y, z)`.
    fn is_block_at(&self, x: i32, y: i32, z: i32) -> bool;
}

//! # Chunk Iteration Module
//!
//! Iteration over a chunk's non-air blocks and the face-visibility predicate.
//! This is the surface the external renderer consumes: a stream of
//! `(position, block type)` pairs plus a cheap test for whether a block has
//! any exposed face worth drawing.

use cgmath::Point3;

use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::Block;
use crate::voxels::position::BlockPos;

use super::{Chunk, CHUNK_DIMENSION, CHUNK_PLANE_SIZE, CHUNK_VOLUME};

/// An iterator over all non-air blocks in a chunk, in Y-major cell order.
///
/// Walks the solidity bit vector, skipping air cells, and resolves each set
/// bit to its block through the chunk's block map.
pub struct ChunkBlockIterator<'a> {
    chunk: &'a Chunk,
    cursor: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    fn new(chunk: &'a Chunk) -> Self {
        ChunkBlockIterator { chunk, cursor: 0 }
    }

    /// Decodes a solidity-vector index back into a local block position.
    fn local_pos(index: usize) -> BlockPos {
        let index = index as i32;
        let y = index / CHUNK_PLANE_SIZE;
        let rem = index % CHUNK_PLANE_SIZE;
        BlockPos::new(rem % CHUNK_DIMENSION, y, rem / CHUNK_DIMENSION)
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (BlockPos, Block);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < CHUNK_VOLUME {
            let index = self.cursor;
            self.cursor += 1;
            if self.chunk.solid[index] {
                let local = Self::local_pos(index);
                // The builder keeps the bit vector and the map in step.
                let block = self.chunk.blocks[&local];
                return Some((local, block));
            }
        }
        None
    }
}

/// The six axis-neighbor offsets, in ±X, ±Y, ±Z order.
const NEIGHBOR_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

impl Chunk {
    /// Iterates over all non-air blocks with their local positions.
    pub fn blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }

    /// Iterates over all non-air blocks with their world-space positions.
    pub fn world_blocks(&self) -> impl Iterator<Item = (Point3<i32>, BlockType)> + '_ {
        let origin_x = self.position.x * CHUNK_DIMENSION;
        let origin_z = self.position.z * CHUNK_DIMENSION;
        self.blocks().map(move |(local, block)| {
            (
                Point3::new(origin_x + local.x, local.y, origin_z + local.z),
                block.block_type(),
            )
        })
    }

    /// Whether the block at a local position has at least one exposed face.
    ///
    /// A block is a render candidate only if one of its six axis-neighbors is
    /// air. The check is chunk-local: positions beyond this chunk's bounds
    /// count as air, so blocks on chunk borders are conservatively visible.
    pub fn is_face_visible(&self, local: BlockPos) -> bool {
        NEIGHBOR_OFFSETS.iter().any(|&(dx, dy, dz)| {
            !self.is_block_solid(BlockPos::new(local.x + dx, local.y + dy, local.z + dz))
        })
    }

    /// Iterates over the render candidates: non-air blocks with at least one
    /// exposed face, in world space.
    pub fn visible_world_blocks(&self) -> impl Iterator<Item = (Point3<i32>, BlockType)> + '_ {
        let origin_x = self.position.x * CHUNK_DIMENSION;
        let origin_z = self.position.z * CHUNK_DIMENSION;
        self.blocks()
            .filter(|(local, _)| self.is_face_visible(*local))
            .map(move |(local, block)| {
                (
                    Point3::new(origin_x + local.x, local.y, origin_z + local.z),
                    block.block_type(),
                )
            })
    }
}

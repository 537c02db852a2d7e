//! # Block Module
//!
//! Block type definitions and the per-block storage struct.

use block_type::BlockType;

pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// A single voxel block as stored inside a chunk.
///
/// Lightweight on purpose: the type tag is the only per-block state, encoded
/// compactly so chunks stay small.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The type of this block, encoded as a [`BlockTypeSize`].
    pub block_type: BlockTypeSize,
}

impl Block {
    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// The block's type as the rich enum.
    pub fn block_type(&self) -> BlockType {
        BlockType::get_block_type_from_int(self.block_type)
    }
}

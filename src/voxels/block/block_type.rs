//! # Block Type Module
//!
//! The enumeration of block types the terrain generator can place.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all block types in the voxel world.
///
/// `AIR` is the implicit default for any position a chunk does not store.
/// The `FromPrimitive` derive allows conversion back from the compact integer
/// encoding used in chunk storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, non-solid and never stored.
    AIR,

    /// The topmost block of every terrain column.
    GRASS,

    /// The two blocks directly beneath the grass surface.
    DIRT,

    /// Everything below the dirt layer, down to the world floor.
    STONE,
}

impl BlockType {
    /// Converts a [`BlockTypeSize`] back to a `BlockType`.
    ///
    /// # Panics
    /// Panics if the value doesn't correspond to a valid `BlockType`; chunk
    /// storage only ever holds values produced by this enum.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        let btype_option = num::FromPrimitive::from_u8(btype);
        btype_option.unwrap()
    }

    /// Whether this block type occupies space for collision and rendering.
    pub fn is_solid(&self) -> bool {
        *self != BlockType::AIR
    }
}

//! # Terrain Generation Module
//!
//! Turns a chunk coordinate and a noise field into a fully populated
//! column-based chunk. Generation is deterministic: identical
//! (position, seed) inputs always yield a bit-identical chunk, which is what
//! lets the streaming layer treat duplicate generation as harmless.

use log::debug;
use thiserror::Error;

use crate::voxels::block::block_type::BlockType;
use crate::voxels::noise::NoiseField;
use crate::voxels::position::{BlockPos, ChunkPos};

use super::{Chunk, ChunkBuilder, CHUNK_DIMENSION};

/// Divisor applied to world coordinates before noise sampling; larger values
/// stretch terrain features horizontally.
pub const NOISE_SCALE: f64 = 32.0;
/// Octave count for the base height field.
pub const TERRAIN_OCTAVES: u32 = 4;
/// Amplitude decay ratio between octaves.
pub const TERRAIN_PERSISTENCE: f64 = 0.5;
/// Frequency multiplier of the high-frequency surface-roughness term.
pub const DETAIL_FREQUENCY: f64 = 4.0;
/// Amplitude of the surface-roughness term.
pub const DETAIL_AMPLITUDE: f64 = 0.1;
/// Every column is at least this many blocks tall.
pub const MIN_TERRAIN_HEIGHT: i32 = 4;
/// Height range the normalized noise fraction is scaled into.
pub const TERRAIN_HEIGHT_RANGE: i32 = 32;
/// Number of non-stone blocks at the top of a column (one grass, the rest
/// dirt).
const SURFACE_LAYER_DEPTH: i32 = 3;

/// Errors that can occur during terrain generation.
///
/// A non-finite noise sample indicates a defect in the noise math; the chunk
/// is abandoned rather than silently clamped into corrupt terrain.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// The noise field produced a NaN or infinite value for a column.
    #[error("non-finite noise sample {value} for world column ({x}, {z})")]
    NonFiniteNoise {
        /// World-space X of the offending column.
        x: i32,
        /// World-space Z of the offending column.
        z: i32,
        /// The non-finite sample.
        value: f64,
    },
}

impl Chunk {
    /// Generates the chunk at `position` from the given noise field.
    ///
    /// For each of the 256 columns in the footprint: sample a smoothed base
    /// height from four noise octaves, add a high-frequency detail term, scale
    /// into the world height range, then fill the column from the floor up —
    /// grass on top, two blocks of dirt beneath it, stone the rest of the way
    /// down.
    pub fn generate(position: ChunkPos, noise: &NoiseField) -> Result<Chunk, TerrainError> {
        let mut builder = ChunkBuilder::new(position);

        for local_x in 0..CHUNK_DIMENSION {
            for local_z in 0..CHUNK_DIMENSION {
                let world_x = position.x * CHUNK_DIMENSION + local_x;
                let world_z = position.z * CHUNK_DIMENSION + local_z;
                let height = column_height(world_x, world_z, noise)?;

                for y in 0..=height {
                    let block_type = if y == height {
                        BlockType::GRASS
                    } else if y > height - SURFACE_LAYER_DEPTH {
                        BlockType::DIRT
                    } else {
                        BlockType::STONE
                    };
                    builder.set_block(BlockPos::new(local_x, y, local_z), block_type);
                }
            }
        }

        let chunk = builder.build();
        debug!(
            "generated chunk at {} with {} blocks",
            position,
            chunk.block_count()
        );
        Ok(chunk)
    }
}

/// The terrain height of a world-space column, in `[MIN_TERRAIN_HEIGHT,
/// MIN_TERRAIN_HEIGHT + TERRAIN_HEIGHT_RANGE]`.
fn column_height(world_x: i32, world_z: i32, noise: &NoiseField) -> Result<i32, TerrainError> {
    let nx = world_x as f64 / NOISE_SCALE;
    let nz = world_z as f64 / NOISE_SCALE;

    let base = noise.octave_sample(nx, 0.0, nz, TERRAIN_OCTAVES, TERRAIN_PERSISTENCE);
    let detail =
        noise.sample(nx * DETAIL_FREQUENCY, 0.0, nz * DETAIL_FREQUENCY) * DETAIL_AMPLITUDE;
    for value in [base, detail] {
        if !value.is_finite() {
            return Err(TerrainError::NonFiniteNoise {
                x: world_x,
                z: world_z,
                value,
            });
        }
    }

    // Remap the base sample from [-1, 1] to [0, 1], roughen, clamp.
    let fraction = ((base + 1.0) * 0.5 + detail).clamp(0.0, 1.0);

    Ok(MIN_TERRAIN_HEIGHT + (fraction * TERRAIN_HEIGHT_RANGE as f64) as i32)
}

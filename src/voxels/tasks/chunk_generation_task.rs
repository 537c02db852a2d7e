//! # Chunk Generation Task
//!
//! The fire-and-forget task that generates one chunk on a worker thread and
//! publishes it into the world. Scheduled by the streaming layer whenever the
//! observer approaches terrain that doesn't exist yet.

use std::sync::Arc;

use log::{debug, error};

use crate::core::MtResource;
use crate::task_management::task::Task;
use crate::voxels::chunk::Chunk;
use crate::voxels::noise::NoiseField;
use crate::voxels::position::ChunkPos;
use crate::voxels::world::World;

/// Generates the chunk at one coordinate and inserts it into the world.
///
/// The task owns everything it needs: a handle to the shared world, the
/// shared immutable noise field, and its target coordinate. Each scheduled
/// coordinate is a disjoint key in the store, so tasks need no coordination
/// beyond the final insert.
pub struct ChunkGenerationTask {
    world: MtResource<World>,
    noise: Arc<NoiseField>,
    position: ChunkPos,
}

impl ChunkGenerationTask {
    /// Creates a generation task for the chunk at `position`.
    pub fn new(world: MtResource<World>, noise: Arc<NoiseField>, position: ChunkPos) -> Self {
        ChunkGenerationTask {
            world,
            noise,
            position,
        }
    }
}

impl Task for ChunkGenerationTask {
    /// Builds the chunk entirely outside any lock, then takes the write lock
    /// only for the insert, so readers never block on generation and never
    /// see a partial chunk.
    ///
    /// A generation failure is logged and swallowed; the coordinate stays
    /// absent and the next streaming pass will naturally re-attempt it.
    fn process(&self) {
        if self.world.get().contains_chunk(self.position) {
            debug!("chunk {} already generated; skipping duplicate", self.position);
            return;
        }

        match Chunk::generate(self.position, &self.noise) {
            Ok(chunk) => self.world.get_mut().insert_chunk(chunk),
            Err(err) => error!("chunk generation failed at {}: {err}", self.position),
        }
    }
}

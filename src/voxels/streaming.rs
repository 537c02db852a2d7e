//! # Streaming Module
//!
//! Keeps the world populated around a moving observer. The `ChunkStreamer`
//! owns the shared chunk store, the noise field, and the worker pool, and is
//! driven once per simulation tick by the host application.
//!
//! ## Streaming Policy
//!
//! Every chunk coordinate within Chebyshev distance
//! [`RENDER_DISTANCE`] of the observer's chunk must eventually be present in
//! the store. The scan is keyed on the observer's *chunk* coordinate, not its
//! position: while the observer stays inside one chunk nothing is rescanned
//! (hysteresis), and crossing a chunk border triggers exactly one scan.
//!
//! Presence-checking before submission is best-effort — a coordinate already
//! in flight can be submitted again — but generation is deterministic and the
//! task re-checks presence, so duplicates cost redundant work, never
//! incorrect state.

use std::sync::Arc;
use std::time::Duration;

use cgmath::Point3;
use log::error;

use crate::core::MtResource;
use crate::task_management::TaskManager;

use super::block::block_type::BlockType;
use super::noise::NoiseField;
use super::position::ChunkPos;
use super::tasks::ChunkGenerationTask;
use super::world::World;
use super::BlockQuery;

/// Chebyshev radius, in chunks, kept streamed in around the observer.
pub const RENDER_DISTANCE: i32 = 4;
/// Worker threads dedicated to chunk generation.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Streams chunks into the world as the observer moves.
pub struct ChunkStreamer {
    world: MtResource<World>,
    noise: Arc<NoiseField>,
    task_manager: TaskManager,
    render_distance: i32,
    last_observer_chunk: Option<ChunkPos>,
}

impl ChunkStreamer {
    /// Creates a streamer for a fresh world generated from `seed`, with the
    /// default worker count and render distance.
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, DEFAULT_WORKER_COUNT, RENDER_DISTANCE)
    }

    /// Creates a streamer with explicit worker count and render distance.
    pub fn with_settings(seed: u64, num_workers: usize, render_distance: i32) -> Self {
        ChunkStreamer {
            world: MtResource::new(World::new()),
            noise: Arc::new(NoiseField::new(seed)),
            task_manager: TaskManager::new(num_workers),
            render_distance,
            last_observer_chunk: None,
        }
    }

    /// A handle to the shared chunk store, for the renderer and other
    /// read-side consumers.
    pub fn world(&self) -> MtResource<World> {
        self.world.clone()
    }

    /// The number of chunks generated so far.
    pub fn chunk_count(&self) -> usize {
        self.world.get().chunk_count()
    }

    /// Whether all scheduled generation work has been observed as complete.
    pub fn is_idle(&self) -> bool {
        self.task_manager.is_idle()
    }

    /// Drives streaming for one simulation tick.
    ///
    /// Always pumps the worker pool (completions first, then queued tasks) so
    /// outstanding work drains even while the observer is stationary. Then,
    /// if the observer has entered a different chunk since the last call,
    /// submits a generation task for every coordinate within the render
    /// distance that is not yet present in the store.
    pub fn update_chunks(&mut self, observer: Point3<f32>) {
        self.task_manager.process_completed_tasks();
        self.task_manager.process_queued_tasks();

        let observer_chunk =
            ChunkPos::containing(observer.x.floor() as i32, observer.z.floor() as i32);
        if self.last_observer_chunk == Some(observer_chunk) {
            return;
        }
        self.last_observer_chunk = Some(observer_chunk);

        let world = self.world.get();
        for dz in -self.render_distance..=self.render_distance {
            for dx in -self.render_distance..=self.render_distance {
                let target = ChunkPos::new(observer_chunk.x + dx, observer_chunk.z + dz);
                if world.contains_chunk(target) {
                    continue;
                }
                self.task_manager.publish_task(Box::new(ChunkGenerationTask::new(
                    self.world.clone(),
                    self.noise.clone(),
                    target,
                )));
            }
        }
    }

    /// The block type at a world-space position; air wherever the world says
    /// so, and air if the store lock is poisoned.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> BlockType {
        match self.world.try_get() {
            Some(world) => world.block_at(x, y, z),
            None => {
                error!("chunk store lock poisoned; treating ({x}, {y}, {z}) as air");
                BlockType::AIR
            }
        }
    }

    /// Stops accepting new generation work and waits up to `grace` for the
    /// workers, abandoning any straggler so the process can always exit.
    pub fn shutdown(&mut self, grace: Duration) {
        self.task_manager.shutdown(grace);
    }
}

impl BlockQuery for ChunkStreamer {
    /// A failed store read degrades to "no collision": liveness of movement
    /// is prioritized over strict correctness mid-stream.
    fn is_block_at(&self, x: i32, y: i32, z: i32) -> bool {
        match self.world.try_get() {
            Some(world) => world.is_block_at(x, y, z),
            None => {
                error!("chunk store lock poisoned; treating ({x}, {y}, {z}) as air");
                false
            }
        }
    }
}

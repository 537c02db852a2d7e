#![warn(missing_docs)]

//! # Voxel World
//!
//! A real-time voxel world simulation: deterministic procedural terrain from
//! seeded gradient noise, chunk-based streaming keyed on observer position,
//! and axis-separated collision resolution against the voxel grid.
//!
//! ## Key Modules
//!
//! * `voxels` - terrain generation, chunk storage, and the streaming layer
//! * `physics` - gravity integration and per-axis collision resolution
//! * `task_management` - the fixed worker pool that runs chunk generation
//! * `core` - concurrency primitives shared by the above
//!
//! ## Architecture
//!
//! The simulation side is single-threaded: one tick drives streaming and
//! physics in sequence. Chunk generation is the only parallel work, executed
//! on a small worker pool that publishes finished chunks into the shared
//! store. Queries from the simulation thread either find a chunk or treat
//! absence as open space — nothing on the hot path ever waits on generation.
//!
//! Rendering, windowing, and input are external collaborators: the renderer
//! consumes [`voxels::chunk::Chunk::visible_world_blocks`], and the input
//! layer drives [`physics::CollisionBody`] through the world's
//! [`voxels::BlockQuery`] interface.

use std::time::Duration;

use cgmath::{Point3, Vector3};
use log::info;

use crate::physics::CollisionBody;
use crate::voxels::streaming::ChunkStreamer;

pub mod core;
pub mod physics;
pub mod task_management;
pub mod voxels;

/// The seed the demo world is generated from.
pub const WORLD_SEED: u64 = 12345;

/// Ticks the headless demo runs for.
const DEMO_TICKS: u32 = 600;
/// Fixed demo timestep (60 Hz).
const DEMO_TICK_SECONDS: f32 = 1.0 / 60.0;
/// Falling past this Y teleports the body back to the spawn point.
const RESPAWN_FLOOR: f32 = -10.0;

/// Where the demo body spawns, high enough that the first chunks stream in
/// before it reaches terrain height.
fn spawn_position() -> Point3<f32> {
    Point3::new(8.0, 64.0, 8.0)
}

/// Runs a headless demo simulation: streams chunks around a falling player
/// body until it settles on the terrain, then shuts the world down.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("starting voxel world simulation with seed {WORLD_SEED}");

    let mut streamer = ChunkStreamer::new(WORLD_SEED);
    let mut player = CollisionBody::player(spawn_position());

    for tick in 0..DEMO_TICKS {
        streamer.update_chunks(player.position);
        player.tick(&streamer, DEMO_TICK_SECONDS);

        // The spawn column may not have streamed in yet on the first ticks;
        // put the body back above the world instead of letting it fall forever.
        if player.position.y < RESPAWN_FLOOR {
            player.position = spawn_position();
            player.velocity = Vector3::new(0.0, 0.0, 0.0);
        }

        if tick % 60 == 0 {
            info!(
                "tick {tick}: body at ({:.1}, {:.1}, {:.1}), {} chunks loaded",
                player.position.x,
                player.position.y,
                player.position.z,
                streamer.chunk_count()
            );
        }
    }

    streamer.shutdown(Duration::from_secs(2));
    info!("simulation complete");
}

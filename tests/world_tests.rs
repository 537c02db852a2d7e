//! Tests for the chunk store and the streaming layer: coordinate mapping,
//! miss-as-air semantics, streaming coverage, hysteresis, and shutdown.

use std::thread;
use std::time::{Duration, Instant};

use cgmath::Point3;
use voxel_world::core::MtResource;
use voxel_world::task_management::task::Task;
use voxel_world::voxels::block::block_type::BlockType;
use voxel_world::voxels::chunk::{Chunk, CHUNK_DIMENSION};
use voxel_world::voxels::noise::NoiseField;
use voxel_world::voxels::position::{local_block_pos, ChunkPos};
use voxel_world::voxels::streaming::ChunkStreamer;
use voxel_world::voxels::tasks::ChunkGenerationTask;
use voxel_world::voxels::world::World;

/// Pumps the streamer until `expected` chunks are present or the timeout
/// elapses.
fn drain_until(streamer: &mut ChunkStreamer, observer: Point3<f32>, expected: usize) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while streamer.chunk_count() < expected {
        assert!(
            Instant::now() < deadline,
            "worker pool did not drain: {} of {expected} chunks after 10s",
            streamer.chunk_count()
        );
        streamer.update_chunks(observer);
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn coordinate_mapping_handles_negative_coordinates() {
    let noise = NoiseField::new(7);
    let chunk = Chunk::generate(ChunkPos::new(-1, -1), &noise).unwrap();

    let mut world = World::new();
    world.insert_chunk(chunk);

    let stored = world.get_chunk_at(ChunkPos::new(-1, -1)).unwrap();
    for world_x in -16..0 {
        for world_z in -16..0 {
            // floor-division maps all of [-16, 0) onto chunk -1 ...
            assert_eq!(ChunkPos::containing(world_x, world_z), ChunkPos::new(-1, -1));
            for y in [0, 5, 20] {
                // ... and floor-modulo yields the matching local cell.
                assert_eq!(
                    world.is_block_at(world_x, y, world_z),
                    stored.is_block_solid(local_block_pos(world_x, y, world_z))
                );
            }
        }
    }

    // Spot-check the arithmetic itself.
    assert_eq!((-1i32).div_euclid(CHUNK_DIMENSION), -1);
    assert_eq!((-1i32).rem_euclid(CHUNK_DIMENSION), 15);
    assert_eq!((-16i32).div_euclid(CHUNK_DIMENSION), -1);
    assert_eq!((-17i32).div_euclid(CHUNK_DIMENSION), -2);
}

#[test]
fn missing_chunks_read_as_air() {
    let world = World::new();

    assert!(!world.is_block_at(0, 0, 0));
    assert!(!world.is_block_at(-1000, 10, 1000));
    assert_eq!(world.block_at(0, 0, 0), BlockType::AIR);
}

#[test]
fn out_of_range_y_reads_as_air() {
    let noise = NoiseField::new(7);
    let mut world = World::new();
    world.insert_chunk(Chunk::generate(ChunkPos::new(0, 0), &noise).unwrap());

    // Terrain exists at y=0, but nothing outside the world's vertical range.
    assert!(world.is_block_at(8, 0, 8));
    assert!(!world.is_block_at(8, -1, 8));
    assert!(!world.is_block_at(8, 256, 8));
    assert!(!world.is_block_at(8, 100_000, 8));
}

#[test]
fn streaming_covers_the_render_distance() {
    let mut streamer = ChunkStreamer::with_settings(12345, 2, 1);
    let observer = Point3::new(8.0, 50.0, 8.0);

    streamer.update_chunks(observer);
    drain_until(&mut streamer, observer, 9);

    let world = streamer.world();
    let world = world.get();
    for dz in -1..=1 {
        for dx in -1..=1 {
            assert!(
                world.contains_chunk(ChunkPos::new(dx, dz)),
                "chunk ({dx},{dz}) missing after drain"
            );
        }
    }
}

#[test]
fn stationary_observer_triggers_no_new_work() {
    let mut streamer = ChunkStreamer::with_settings(555, 2, 1);
    let observer = Point3::new(8.0, 50.0, 8.0);

    streamer.update_chunks(observer);
    drain_until(&mut streamer, observer, 9);

    // Moving within the same chunk must not schedule anything.
    for _ in 0..20 {
        streamer.update_chunks(Point3::new(12.5, 40.0, 3.25));
        thread::sleep(Duration::from_millis(1));
    }
    assert_eq!(streamer.chunk_count(), 9);
    assert!(streamer.is_idle());

    // Crossing into the next chunk extends coverage by one column of chunks.
    let moved = Point3::new(17.0, 40.0, 8.0);
    streamer.update_chunks(moved);
    drain_until(&mut streamer, moved, 12);
}

#[test]
fn duplicate_generation_tasks_are_harmless() {
    let world = MtResource::new(World::new());
    let noise = std::sync::Arc::new(NoiseField::new(12345));
    let position = ChunkPos::new(3, 3);

    // Simulate a duplicate-scheduling race by running the same task twice.
    let first = ChunkGenerationTask::new(world.clone(), noise.clone(), position);
    let second = ChunkGenerationTask::new(world.clone(), noise.clone(), position);
    first.process();
    second.process();

    let guard = world.get();
    assert_eq!(guard.chunk_count(), 1);
    let chunk = guard.get_chunk_at(position).unwrap();
    assert_eq!(*chunk, Chunk::generate(position, &noise).unwrap());
}

#[test]
fn shutdown_is_prompt_and_final() {
    let mut streamer = ChunkStreamer::with_settings(99, 2, 2);
    streamer.update_chunks(Point3::new(0.0, 50.0, 0.0));

    let started = Instant::now();
    streamer.shutdown(Duration::from_secs(2));
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "shutdown exceeded the grace period by too much"
    );

    // Submissions after shutdown are dropped, not executed and not panicking.
    let count = streamer.chunk_count();
    streamer.update_chunks(Point3::new(500.0, 50.0, 500.0));
    thread::sleep(Duration::from_millis(20));
    streamer.update_chunks(Point3::new(500.0, 50.0, 500.0));
    assert_eq!(streamer.chunk_count(), count);
}

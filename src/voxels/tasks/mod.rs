//! # Voxel Tasks
//!
//! Background tasks owned by the voxel layer. Chunk generation is the only
//! one: the engine's sole source of parallel work.

pub mod chunk_generation_task;

pub use chunk_generation_task::ChunkGenerationTask;

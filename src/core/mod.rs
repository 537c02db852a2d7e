//! # Core Module
//!
//! Fundamental concurrency primitives shared between the simulation thread and
//! the chunk generation workers.
//!
//! ## Key Components
//! - `MtResource`: thread-safe reference-counted resource with read-write locking

pub mod mt_resource;

pub use mt_resource::MtResource;

//! # Voxel World Entry Point
//!
//! Runs the library's headless demo simulation.
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_world::run();
}

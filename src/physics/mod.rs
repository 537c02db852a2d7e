//! # Physics Module
//!
//! Gravity integration and collision resolution for a body moving through the
//! voxel grid.
//!
//! ## Collision Model
//!
//! Collisions are resolved one axis at a time, in a fixed X, Y, Z order:
//! tentatively move along an axis, probe the bounding box against the world,
//! and revert the axis if any probe hits a solid block. Per-axis resolution
//! keeps the tick O(1), lets a body slide along an open axis instead of
//! sticking at wall corners, and cannot tunnel at the speeds terminal
//! velocity allows.
//!
//! The bounding box is approximated by eight probes: the four horizontal
//! corners (half-width offsets on both axes) at the feet and head levels.
//! This corner sampling is a deliberate simplification over swept collision,
//! sized for a blocky world.

use cgmath::{Point3, Vector3};

use crate::voxels::BlockQuery;

/// Downward acceleration, blocks per second squared.
pub const GRAVITY: f32 = 9.8;
/// Maximum downward speed, blocks per second.
pub const TERMINAL_VELOCITY: f32 = 20.0;
/// Upward speed applied by a jump.
pub const JUMP_FORCE: f32 = 8.0;
/// Upper bound on a single integration step; long frame stalls are clamped
/// to this to bound integration error.
pub const MAX_TICK_SECONDS: f32 = 0.1;
/// Bounding-box width of a player body.
pub const PLAYER_WIDTH: f32 = 0.6;
/// Bounding-box height of a player body.
pub const PLAYER_HEIGHT: f32 = 1.8;

/// How far below the feet the grounded probe reaches.
const GROUND_PROBE_DEPTH: f32 = 0.1;

/// A physical body with a fixed bounding box, resolved against the voxel grid
/// once per simulation tick.
///
/// `position` is the bottom-center of the bounding box (the feet). The body
/// is owned by the host application — typically it backs the observer/camera
/// — and holds no reference to world data; the world to collide against is
/// passed into each call.
pub struct CollisionBody {
    /// Bottom-center of the bounding box, world space.
    pub position: Point3<f32>,
    /// Current velocity, blocks per second.
    pub velocity: Vector3<f32>,
    width: f32,
    height: f32,
}

impl CollisionBody {
    /// Creates a body at rest with the given bounding-box dimensions.
    pub fn new(position: Point3<f32>, width: f32, height: f32) -> Self {
        CollisionBody {
            position,
            velocity: Vector3::new(0.0, 0.0, 0.0),
            width,
            height,
        }
    }

    /// Creates a body with the standard player bounding box (0.6 × 1.8).
    pub fn player(position: Point3<f32>) -> Self {
        Self::new(position, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Whether a solid block sits immediately beneath the body's feet,
    /// probed at the horizontal center.
    pub fn is_grounded(&self, world: &impl BlockQuery) -> bool {
        world.is_block_at(
            self.position.x.floor() as i32,
            (self.position.y - GROUND_PROBE_DEPTH).floor() as i32,
            self.position.z.floor() as i32,
        )
    }

    /// Applies the jump impulse if the body is grounded; no-op otherwise.
    ///
    /// Callers gate this on a key-press rising edge — the grounded check here
    /// does not prevent re-triggering across the several ticks a body can
    /// stay grounded while a control is held.
    pub fn jump(&mut self, world: &impl BlockQuery) {
        if self.is_grounded(world) {
            self.velocity.y = JUMP_FORCE;
        }
    }

    /// Advances the body by one simulation tick.
    ///
    /// Clamps `delta_time`, applies gravity (or zeroes residual downward
    /// velocity while grounded, so a resting body never accumulates sink
    /// speed), then resolves the displacement per axis in X, Y, Z order: a
    /// blocked axis is reverted and its velocity component zeroed, leaving
    /// the other axes free to slide.
    pub fn tick(&mut self, world: &impl BlockQuery, delta_time: f32) {
        let dt = delta_time.clamp(0.0, MAX_TICK_SECONDS);

        if self.is_grounded(world) {
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
        } else {
            self.velocity.y -= GRAVITY * dt;
            if self.velocity.y < -TERMINAL_VELOCITY {
                self.velocity.y = -TERMINAL_VELOCITY;
            }
        }

        for axis in 0..3 {
            let step = self.velocity[axis] * dt;
            if step == 0.0 {
                continue;
            }
            let original = self.position[axis];
            self.position[axis] = original + step;
            if self.intersects_terrain(world) {
                self.position[axis] = original;
                self.velocity[axis] = 0.0;
            }
        }
    }

    /// Whether any of the eight bounding-box probes (four horizontal corners
    /// at feet and head level) lands inside a solid block.
    fn intersects_terrain(&self, world: &impl BlockQuery) -> bool {
        let half_width = self.width / 2.0;
        for corner_x in [self.position.x - half_width, self.position.x + half_width] {
            for corner_z in [self.position.z - half_width, self.position.z + half_width] {
                for probe_y in [self.position.y, self.position.y + self.height] {
                    if world.is_block_at(
                        corner_x.floor() as i32,
                        probe_y.floor() as i32,
                        corner_z.floor() as i32,
                    ) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Bounding-box width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Bounding-box height.
    pub fn height(&self) -> f32 {
        self.height
    }
}

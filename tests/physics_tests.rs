//! Tests for gravity integration and per-axis collision resolution, run
//! against small synthetic worlds so the scenarios are exact.

use cgmath::{Point3, Vector3};
use voxel_world::physics::{CollisionBody, GRAVITY, JUMP_FORCE, MAX_TICK_SECONDS};
use voxel_world::voxels::BlockQuery;

const DT: f32 = 1.0 / 60.0;

/// An infinite flat floor: solid blocks fill the y=0 layer.
struct FlatFloor;

impl BlockQuery for FlatFloor {
    fn is_block_at(&self, _x: i32, y: i32, _z: i32) -> bool {
        y == 0
    }
}

/// Empty space everywhere.
struct Void;

impl BlockQuery for Void {
    fn is_block_at(&self, _x: i32, _y: i32, _z: i32) -> bool {
        false
    }
}

/// Full-height walls: everything at `x >= 4` and/or `z >= 4` is solid.
struct Walls {
    x_wall: bool,
    z_wall: bool,
}

impl BlockQuery for Walls {
    fn is_block_at(&self, x: i32, _y: i32, z: i32) -> bool {
        (self.x_wall && x >= 4) || (self.z_wall && z >= 4)
    }
}

#[test]
fn body_settles_on_flat_floor() {
    let world = FlatFloor;
    let mut body = CollisionBody::player(Point3::new(0.5, 5.0, 0.5));

    for _ in 0..600 {
        body.tick(&world, DT);
        // The floor's top surface is at y=1; the feet may never pass it.
        assert!(body.position.y >= 1.0, "body sank into the floor: {}", body.position.y);
    }

    assert_eq!(body.velocity.y, 0.0);
    assert!(
        body.position.y < 1.11,
        "body hovering above the floor: {}",
        body.position.y
    );

    // At rest the position is exactly stable.
    let resting_y = body.position.y;
    for _ in 0..60 {
        body.tick(&world, DT);
    }
    assert_eq!(body.position.y, resting_y);
}

#[test]
fn downward_speed_is_clamped_to_terminal_velocity() {
    let world = Void;
    let mut body = CollisionBody::player(Point3::new(0.0, 1000.0, 0.0));

    for _ in 0..600 {
        body.tick(&world, DT);
        assert!(body.velocity.y >= -voxel_world::physics::TERMINAL_VELOCITY);
    }
    assert_eq!(body.velocity.y, -voxel_world::physics::TERMINAL_VELOCITY);
}

#[test]
fn long_frame_stalls_are_clamped() {
    let world = Void;
    let mut body = CollisionBody::player(Point3::new(0.0, 100.0, 0.0));

    // A ten-second stall must integrate as MAX_TICK_SECONDS, not as 10s.
    body.tick(&world, 10.0);
    assert_eq!(body.velocity.y, -GRAVITY * MAX_TICK_SECONDS);
}

#[test]
fn corner_stops_both_axes() {
    let world = Walls {
        x_wall: true,
        z_wall: true,
    };
    let mut body = CollisionBody::player(Point3::new(2.0, 10.0, 2.0));
    body.velocity = Vector3::new(3.0, 0.0, 3.0);

    for _ in 0..120 {
        body.tick(&world, DT);
    }

    // Both axes blocked at the wall faces (half-width 0.3 short of x/z = 4).
    assert_eq!(body.velocity.x, 0.0);
    assert_eq!(body.velocity.z, 0.0);
    assert!(body.position.x > 3.0 && body.position.x < 3.7 + 1e-4);
    assert!(body.position.z > 3.0 && body.position.z < 3.7 + 1e-4);
}

#[test]
fn single_wall_lets_the_body_slide() {
    let world = Walls {
        x_wall: true,
        z_wall: false,
    };
    let mut body = CollisionBody::player(Point3::new(2.0, 10.0, 2.0));
    body.velocity = Vector3::new(3.0, 0.0, 3.0);

    for _ in 0..120 {
        body.tick(&world, DT);
    }

    // X is blocked, Z keeps sliding at full speed.
    assert_eq!(body.velocity.x, 0.0);
    assert_eq!(body.velocity.z, 3.0);
    assert!(body.position.x < 3.7 + 1e-4);
    assert!(body.position.z > 5.0);
}

#[test]
fn jump_requires_ground_contact() {
    let world = FlatFloor;
    let mut body = CollisionBody::player(Point3::new(0.5, 3.0, 0.5));

    // Airborne: jumping does nothing.
    assert!(!body.is_grounded(&world));
    body.jump(&world);
    assert_eq!(body.velocity.y, 0.0);

    // Settle, then jump.
    for _ in 0..600 {
        body.tick(&world, DT);
    }
    assert!(body.is_grounded(&world));
    body.jump(&world);
    assert_eq!(body.velocity.y, JUMP_FORCE);

    // Two ticks later the body has left the ground and gravity has shaved
    // some speed off; a second jump attempt must not reset it to JUMP_FORCE.
    body.tick(&world, DT);
    body.tick(&world, DT);
    assert!(!body.is_grounded(&world));
    let rising = body.velocity.y;
    assert!(rising > 0.0 && rising < JUMP_FORCE);
    body.jump(&world);
    assert_eq!(body.velocity.y, rising);
}

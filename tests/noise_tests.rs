//! Tests for the seeded noise field: determinism, purity, and output range.

use voxel_world::voxels::noise::NoiseField;

/// A grid of sample points covering negative coordinates, lattice points, and
/// fractional offsets.
fn sample_points() -> Vec<(f64, f64, f64)> {
    let mut points = Vec::new();
    for i in -8..8 {
        for j in -4..4 {
            let x = i as f64 * 0.73 + 0.1;
            let z = j as f64 * 1.31 - 0.4;
            points.push((x, 0.0, z));
            points.push((x * 4.0, 0.25, z * 4.0));
        }
    }
    points
}

#[test]
fn same_seed_produces_identical_fields() {
    let a = NoiseField::new(42);
    let b = NoiseField::new(42);

    for (x, y, z) in sample_points() {
        assert_eq!(a.sample(x, y, z), b.sample(x, y, z));
        assert_eq!(
            a.octave_sample(x, y, z, 4, 0.5),
            b.octave_sample(x, y, z, 4, 0.5)
        );
    }
}

#[test]
fn repeated_calls_are_pure() {
    let field = NoiseField::new(7);

    for (x, y, z) in sample_points() {
        let first = field.sample(x, y, z);
        let second = field.sample(x, y, z);
        assert_eq!(first, second);
    }
}

#[test]
fn different_seeds_produce_different_terrain() {
    let a = NoiseField::new(1);
    let b = NoiseField::new(2);

    let differs = sample_points()
        .iter()
        .any(|&(x, y, z)| a.sample(x, y, z) != b.sample(x, y, z));
    assert!(differs, "two different seeds produced identical noise");
}

#[test]
fn sample_is_zero_on_lattice_points() {
    let field = NoiseField::new(99);

    for x in -3..4 {
        for z in -3..4 {
            assert_eq!(field.sample(x as f64, 0.0, z as f64), 0.0);
        }
    }
}

#[test]
fn octave_sample_stays_in_range() {
    let field = NoiseField::new(12345);

    for octaves in [1, 2, 4, 8] {
        for (x, y, z) in sample_points() {
            let value = field.octave_sample(x, y, z, octaves, 0.5);
            assert!(
                value.is_finite() && value.abs() <= 1.0,
                "octave_sample({x}, {y}, {z}, {octaves}) out of range: {value}"
            );
        }
    }
}

//! # Noise Field Module
//!
//! Seeded coherent gradient noise, the deterministic source every terrain
//! feature is derived from.
//!
//! ## Determinism
//!
//! The permutation table is the only state, built once from the seed and never
//! mutated, so a `NoiseField` is safe to share across worker threads without
//! synchronization. Two fields built from the same seed are observably
//! identical: every sample is a pure function of the table and the input
//! point. This is what makes chunk generation idempotent, so a duplicate
//! generation of the same chunk is harmless.

/// Seeded gradient-noise sampler.
///
/// Holds a 512-entry permutation table: a seeded Fisher–Yates shuffle of
/// `0..256`, duplicated so the corner-hashing lookups never need to wrap.
pub struct NoiseField {
    permutation: [usize; 512],
}

impl NoiseField {
    /// Builds a noise field from a seed.
    ///
    /// The same seed always produces the same permutation table, and
    /// therefore the same terrain.
    pub fn new(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);

        let mut table: [usize; 256] = std::array::from_fn(|i| i);
        for i in (1..table.len()).rev() {
            let j = rng.usize(0..=i);
            table.swap(i, j);
        }

        let mut permutation = [0usize; 512];
        permutation[..256].copy_from_slice(&table);
        permutation[256..].copy_from_slice(&table);

        NoiseField { permutation }
    }

    /// Samples the noise field at a point. Output is approximately `[-1, 1]`
    /// and exactly `0.0` on lattice points.
    ///
    /// Classic improved gradient noise: locate the unit lattice cell, fade the
    /// fractional offsets, hash the eight cell corners through the permutation
    /// table, and blend the eight gradient contributions trilinearly. Pure —
    /// no state changes across calls.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let perm = &self.permutation;

        // Unit cube containing the point.
        let cell_x = (x.floor() as i64 & 255) as usize;
        let cell_y = (y.floor() as i64 & 255) as usize;
        let cell_z = (z.floor() as i64 & 255) as usize;

        // Fractional offsets within the cube.
        let xf = x - x.floor();
        let yf = y - y.floor();
        let zf = z - z.floor();

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        // Hash the coordinates of the 8 cube corners.
        let a = perm[cell_x] + cell_y;
        let aa = perm[a] + cell_z;
        let ab = perm[a + 1] + cell_z;
        let b = perm[cell_x + 1] + cell_y;
        let ba = perm[b] + cell_z;
        let bb = perm[b + 1] + cell_z;

        // Blend the gradient contributions from the 8 corners.
        lerp(
            w,
            lerp(
                v,
                lerp(
                    u,
                    grad(perm[aa], xf, yf, zf),
                    grad(perm[ba], xf - 1.0, yf, zf),
                ),
                lerp(
                    u,
                    grad(perm[ab], xf, yf - 1.0, zf),
                    grad(perm[bb], xf - 1.0, yf - 1.0, zf),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(perm[aa + 1], xf, yf, zf - 1.0),
                    grad(perm[ba + 1], xf - 1.0, yf, zf - 1.0),
                ),
                lerp(
                    u,
                    grad(perm[ab + 1], xf, yf - 1.0, zf - 1.0),
                    grad(perm[bb + 1], xf - 1.0, yf - 1.0, zf - 1.0),
                ),
            ),
        )
    }

    /// Sums `octaves` samples at doubling frequency and geometrically decaying
    /// amplitude (`persistence`), normalized by the total amplitude so the
    /// result stays in `[-1, 1]` regardless of octave count.
    ///
    /// Produces smoother, more natural variation than a single octave.
    pub fn octave_sample(&self, x: f64, y: f64, z: f64, octaves: u32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.sample(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        total / max_value
    }
}

/// Quintic smoothing curve `6t⁵ - 15t⁴ + 10t³`, zero first and second
/// derivatives at the cell boundaries.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Maps the low 4 bits of a corner hash to one of 12 gradient directions and
/// returns its dot product with the offset vector.
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

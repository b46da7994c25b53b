//! Hashed value noise and fractal Brownian motion.
//!
//! Everything here is a pure function of its input: no tables, no caches,
//! no seeds. The same position always yields the same bits.

use ember_math::{lerp, Vec3};

/// Lattice strides folding integer coordinates into one hash input.
const LATTICE_STRIDE: Vec3 = Vec3::new(1.0, 57.0, 113.0);

/// Rows of the orthonormal matrix applied before the octaves are summed.
const ROTATION: [Vec3; 3] = [
    Vec3::new(0.00, 0.80, 0.60),
    Vec3::new(-0.80, 0.36, -0.48),
    Vec3::new(-0.60, -0.48, 0.64),
];

/// (amplitude, frequency multiplier applied after the octave)
const OCTAVES: [(f32, f32); 4] = [(0.5, 2.32), (0.25, 3.03), (0.125, 2.61), (0.0625, 1.0)];

/// Sum of the octave amplitudes.
const AMPLITUDE_SUM: f32 = 0.9375;

/// Pseudo-random value in [0, 1): `fract(sin(h) * 43758.5453)`.
#[inline]
pub fn hash(h: f32) -> f32 {
    let x = h.sin() * 43758.5453;
    x - x.floor()
}

/// Trilinear value noise with Hermite smoothing, roughly in [0, 1].
pub fn value_noise(pos: Vec3) -> f32 {
    let cell = pos.floor();
    let f = pos - cell;
    let f = f * f * (Vec3::splat(3.0) - f * 2.0);

    let n = cell.dot(LATTICE_STRIDE);

    lerp(
        lerp(
            lerp(hash(n), hash(n + 1.0), f.x),
            lerp(hash(n + 57.0), hash(n + 58.0), f.x),
            f.y,
        ),
        lerp(
            lerp(hash(n + 113.0), hash(n + 114.0), f.x),
            lerp(hash(n + 170.0), hash(n + 171.0), f.x),
            f.y,
        ),
        f.z,
    )
}

/// Apply the fixed decorrelating rotation.
#[inline]
pub fn rotate(v: Vec3) -> Vec3 {
    Vec3::new(ROTATION[0].dot(v), ROTATION[1].dot(v), ROTATION[2].dot(v))
}

/// Four octaves of [`value_noise`], normalized back to roughly [0, 1].
///
/// The rotation is linear, so rotating once before scaling gives every
/// octave a rotated sample position.
pub fn fractal_brownian_motion(x: Vec3) -> f32 {
    let mut p = rotate(x);
    let mut f = 0.0;
    for (amplitude, scale) in OCTAVES {
        f += amplitude * value_noise(p);
        p *= scale;
    }
    f / AMPLITUDE_SUM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_range() {
        for i in -500..500 {
            let h = hash(i as f32 * 0.731);
            assert!((0.0..=1.0).contains(&h), "hash out of range: {}", h);
        }
        assert_eq!(hash(0.0), 0.0);
    }

    #[test]
    fn test_value_noise_at_lattice_point_is_hash() {
        let p = Vec3::new(2.0, -1.0, 3.0);
        let n = 2.0 - 57.0 + 3.0 * 113.0;
        assert_eq!(value_noise(p), hash(n));
    }

    #[test]
    fn test_value_noise_is_continuous() {
        let p = Vec3::new(1.999, 0.5, 0.25);
        let q = Vec3::new(2.001, 0.5, 0.25);
        assert!((value_noise(p) - value_noise(q)).abs() < 0.01);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(0.3, -1.7, 2.2);
        assert!((rotate(v).length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_fbm_is_deterministic() {
        let p = Vec3::new(0.3, 0.7, 1.1);
        let a = fractal_brownian_motion(p);
        let b = fractal_brownian_motion(p);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_fbm_range() {
        assert_eq!(fractal_brownian_motion(Vec3::ZERO), 0.0);
        for i in 0..200 {
            let t = i as f32 * 0.173;
            let v = fractal_brownian_motion(Vec3::new(t, -t * 0.5, t * 1.3));
            assert!((0.0..=1.0 + 1e-5).contains(&v), "fbm out of range: {}", v);
        }
    }
}

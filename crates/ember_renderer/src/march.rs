//! Sphere tracing against a noise-displaced implicit sphere.

use crate::noise::fractal_brownian_motion;
use crate::Ray;
use ember_math::Vec3;

/// Frequency scale of the displacement noise.
const NOISE_FREQUENCY: f32 = 3.4;
/// Forward-difference step for gradient estimation.
const NORMAL_EPSILON: f32 = 0.1;

/// Raymarch configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaymarchConfig {
    /// Maximum number of marching steps
    pub max_steps: u32,
    /// Minimum step distance (prevents stalling near the surface)
    pub min_step: f32,
}

impl Default for RaymarchConfig {
    fn default() -> Self {
        Self {
            max_steps: 128,
            min_step: 0.01,
        }
    }
}

/// A sphere at the origin whose radius is pulled inwards by fBm noise.
///
/// The noise is non-negative, so the whole surface lies inside the base
/// sphere of radius `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacedSphere {
    pub radius: f32,
    pub noise_amplitude: f32,
}

impl DisplacedSphere {
    pub fn new(radius: f32, noise_amplitude: f32) -> Self {
        assert!(radius > 0.0, "sphere radius must be > 0, got {}", radius);
        Self {
            radius,
            noise_amplitude,
        }
    }

    /// Inward displacement of the surface at `point`.
    pub fn displacement(&self, point: Vec3) -> f32 {
        -fractal_brownian_motion(point * NOISE_FREQUENCY) * self.noise_amplitude
    }

    /// Signed distance to the displaced surface, negative inside.
    ///
    /// Only an estimate: the noise term does not keep the field 1-Lipschitz.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        point.length() - (self.radius + self.displacement(point))
    }

    /// March along a unit-direction ray until the field turns negative.
    ///
    /// Returns the first sample position inside the surface, with no
    /// refinement, so the hit may sit up to one step past the true surface.
    /// Rays whose line never comes within `radius` of the origin are
    /// rejected before marching.
    pub fn march(&self, ray: &Ray, config: &RaymarchConfig) -> Option<Vec3> {
        let origin = ray.origin();
        let dir = ray.direction();

        let along = origin.dot(dir);
        if origin.dot(origin) - along * along > self.radius * self.radius {
            return None;
        }

        let mut pos = origin;
        for _ in 0..config.max_steps {
            let d = self.signed_distance(pos);
            if d < 0.0 {
                return Some(pos);
            }
            pos += dir * d.max(config.min_step);
        }

        None
    }

    /// Surface normal from forward differences of the distance field.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        let d = self.signed_distance(point);
        let nx = self.signed_distance(point + Vec3::X * NORMAL_EPSILON) - d;
        let ny = self.signed_distance(point + Vec3::Y * NORMAL_EPSILON) - d;
        let nz = self.signed_distance(point + Vec3::Z * NORMAL_EPSILON) - d;
        Vec3::new(nx, ny, nz).normalize()
    }
}

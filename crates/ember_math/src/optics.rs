//! Reflection, refraction and interpolation helpers shared by the renderers.

use crate::Vec3;
use std::ops::{Add, Mul, Sub};

/// Reflect `incident` about `normal`: `i - 2 (i . n) n`.
///
/// Both inputs are expected to be unit vectors.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * (2.0 * incident.dot(normal))
}

/// Refract `incident` through a surface with Snell's law.
///
/// `normal` is the outward surface normal. `eta_t` is the refractive index
/// on the far side of the outward normal, `eta_i` the one the normal points
/// into. A ray arriving from inside the solid swaps the two indices and flips
/// the normal. Returns `None` on total internal reflection.
///
/// The returned direction is not normalized.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Option<Vec3> {
    let mut cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    let (mut n, mut eta_t, mut eta_i) = (normal, eta_t, eta_i);

    // Inside the solid
    if cos_i < 0.0 {
        cos_i = -cos_i;
        n = -normal;
        std::mem::swap(&mut eta_t, &mut eta_i);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some(incident * eta + n * (eta * cos_i - k.sqrt()))
}

/// Linear interpolation from `a` to `b`, with `t` clamped to [0, 1].
#[inline]
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T> + Copy,
{
    a + (b - a) * t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_flips_normal_component() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(d, Vec3::Y);
        let expected = Vec3::new(d.x, -d.y, d.z);

        assert!((r - expected).length() < 1e-6);
        assert!((r.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_refract_same_index_passes_straight() {
        let d = Vec3::new(0.3, -1.0, 0.2).normalize();
        let t = refract(d, Vec3::Y, 1.0, 1.0).unwrap();
        assert!((t - d).length() < 1e-6);
    }

    #[test]
    fn test_refract_bends_towards_normal_entering_glass() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = refract(d, Vec3::Y, 1.5, 1.0).unwrap().normalize();

        // sin(theta_t) = sin(45deg) / 1.5
        let sin_t = t.x;
        assert!((sin_t - (0.5f32.sqrt() / 1.5)).abs() < 1e-5);
        assert!(t.y < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass at a grazing angle: the ray travels along the outward normal side.
        let d = Vec3::new(1.0, 0.2, 0.0).normalize();
        assert!(refract(d, Vec3::Y, 1.5, 1.0).is_none());
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Vec3::ZERO;
        let b = Vec3::ONE;
        assert_eq!(lerp(a, b, 0.5), Vec3::splat(0.5));
        assert_eq!(lerp(a, b, -1.0), a);
        assert_eq!(lerp(a, b, 3.0), b);
        assert_eq!(lerp(2.0_f32, 4.0, 0.25), 2.5);
    }
}

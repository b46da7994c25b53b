// Re-export glam for convenience
pub use glam::*;

// Ember math types
mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{lerp, reflect, refract};
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec_copies_are_independent() {
        let a = Vec4::new(0.6, 0.1, 0.1, 0.0);
        let mut b = a;
        b[3] = 0.8;
        assert_eq!(a[3], 0.0);
        assert_eq!(b[3], 0.8);
    }

    #[test]
    #[should_panic]
    fn test_vec_index_out_of_range_panics() {
        let v = Vec2::new(1.0, 0.0);
        let i = std::hint::black_box(2);
        let _ = v[i];
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let v = Vec3::new(3.0, -4.0, 12.0).normalize();
        let again = v.normalize();
        for i in 0..3 {
            assert!((v[i] - again[i]).abs() < 1e-5);
        }
        assert!((v.length() - 1.0).abs() < 1e-5);
    }
}

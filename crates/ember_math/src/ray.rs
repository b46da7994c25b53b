use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Intersection and shading routines expect `direction` to be unit length;
/// callers normalize before handing a ray over.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Start a ray just off a surface point.
    ///
    /// The origin is pushed `offset` along `normal`, on whichever side of the
    /// surface `direction` leaves towards, so the new ray does not re-hit the
    /// surface it starts on.
    pub fn offset_from(point: Vec3, normal: Vec3, direction: Vec3, offset: f32) -> Self {
        let origin = if direction.dot(normal) < 0.0 {
            point - normal * offset
        } else {
            point + normal * offset
        };
        Self::new(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_offset_follows_direction_side() {
        let point = Vec3::new(0.0, 1.0, 0.0);

        let outward = Ray::offset_from(point, Vec3::Y, Vec3::new(1.0, 1.0, 0.0).normalize(), 1e-3);
        assert!(outward.origin.y > point.y);

        let inward = Ray::offset_from(point, Vec3::Y, Vec3::new(1.0, -1.0, 0.0).normalize(), 1e-2);
        assert!((inward.origin.y - (point.y - 1e-2)).abs() < 1e-6);
    }
}

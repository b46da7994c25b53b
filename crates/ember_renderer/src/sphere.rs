//! Sphere primitive for ray tracing.

use crate::{HitRecord, Material, Ray};
use ember_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Panics if `radius` is not positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        assert!(radius > 0.0, "sphere radius must be > 0, got {}", radius);
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Distance along a unit-direction ray to the nearest non-negative hit.
    ///
    /// Geometric solution: project the center onto the ray, compare the
    /// squared perpendicular distance against r^2, then take the near root,
    /// or the far one when the origin is inside the sphere.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let to_center = self.center - ray.origin();
        let projection = to_center.dot(ray.direction());
        let perpendicular_sq = to_center.dot(to_center) - projection * projection;
        let radius_sq = self.radius * self.radius;

        if perpendicular_sq > radius_sq {
            return None;
        }

        // Tangent rays land on exactly zero here
        let half_chord = (radius_sq - perpendicular_sq).sqrt();

        let near = projection - half_chord;
        if near >= 0.0 {
            return Some(near);
        }
        let far = projection + half_chord;
        if far >= 0.0 {
            return Some(far);
        }
        None
    }

    /// Build the hit record for a distance returned by [`Sphere::ray_intersect`].
    pub fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord<'_> {
        let p = ray.at(t);
        HitRecord {
            p,
            normal: (p - self.center).normalize(),
            material: &self.material,
            t,
        }
    }
}

//! Hit records produced by the intersection engine.

use crate::Material;
use ember_math::Vec3;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Outward surface normal, unit length
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: &'a Material,
    /// Distance along the ray
    pub t: f32,
}

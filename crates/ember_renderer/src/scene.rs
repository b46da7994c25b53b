//! Scene description and the brute-force nearest-hit query.

use crate::{HitRecord, Material, Ray, Sphere};
use ember_math::{Interval, Vec3};

/// Hits at or beyond this distance count as escaping to the background.
pub const MAX_HIT_DISTANCE: f32 = 1000.0;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new light.
    ///
    /// Panics if `intensity` is not positive.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        assert!(
            intensity > 0.0,
            "light intensity must be > 0, got {}",
            intensity
        );
        Self {
            position,
            intensity,
        }
    }
}

/// Ordered spheres and lights. Immutable once rendering starts.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere (builder style).
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a light (builder style).
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// The reference scene: four spheres (ivory, glass, red rubber, mirror)
    /// lit by three point lights.
    pub fn showcase() -> Self {
        let ivory = Material::ivory();
        let glass = Material::glass();
        let rubber = Material::red_rubber();
        let mirror = Material::mirror();

        Self::new()
            .with_sphere(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory))
            .with_sphere(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass))
            .with_sphere(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, rubber))
            .with_sphere(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror))
            .with_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5))
            .with_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8))
            .with_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7))
    }

    /// Find the closest sphere along a unit-direction ray.
    ///
    /// Linear scan over every sphere. On exactly equal distances the sphere
    /// scanned last wins. Hits at `MAX_HIT_DISTANCE` or further are dropped.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let range = Interval::new(0.0, MAX_HIT_DISTANCE);
        let mut closest: Option<(&Sphere, f32)> = None;

        for sphere in &self.spheres {
            let Some(t) = sphere.ray_intersect(ray) else {
                continue;
            };
            if !range.surrounds(t) {
                continue;
            }
            if closest.map_or(true, |(_, best)| t <= best) {
                closest = Some((sphere, t));
            }
        }

        closest.map(|(sphere, t)| sphere.hit_record(ray, t))
    }

    /// Whether something sits between `point` and `light`.
    ///
    /// The shadow ray starts 1e-3 off the surface, on the same side as the
    /// light, and only occluders strictly closer than the light count.
    pub fn is_occluded(&self, point: Vec3, normal: Vec3, light: &Light) -> bool {
        let to_light = light.position - point;
        let light_distance = to_light.length();
        let shadow_ray = Ray::offset_from(point, normal, to_light.normalize(), 1e-3);

        match self.nearest_hit(&shadow_ray) {
            Some(hit) => (hit.p - shadow_ray.origin()).length() < light_distance,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_hit_picks_closest() {
        let far = Sphere::new(Vec3::new(0.0, 0.0, -20.0), 1.0, Material::mirror());
        let near = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::ivory());
        let scene = Scene::new().with_sphere(far).with_sphere(near);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray).unwrap();

        assert!((hit.t - 9.0).abs() < 1e-5);
        assert_eq!(*hit.material, Material::ivory());
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_nearest_hit_tie_goes_to_last() {
        let center = Vec3::new(0.0, 0.0, -10.0);
        let scene = Scene::new()
            .with_sphere(Sphere::new(center, 1.0, Material::ivory()))
            .with_sphere(Sphere::new(center, 1.0, Material::glass()));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray).unwrap();
        assert_eq!(*hit.material, Material::glass());
    }

    #[test]
    fn test_nearest_hit_ignores_far_spheres() {
        let scene = Scene::new().with_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -2000.0),
            10.0,
            Material::ivory(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_empty_scene_has_no_hits() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(Scene::new().nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_is_occluded() {
        let light = Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0);
        let blocker = Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, Material::ivory());

        let open = Scene::new().with_light(light);
        let blocked = open.clone().with_sphere(blocker);

        assert!(!open.is_occluded(Vec3::ZERO, Vec3::Y, &light));
        assert!(blocked.is_occluded(Vec3::ZERO, Vec3::Y, &light));
    }

    #[test]
    fn test_occluder_behind_light_does_not_shadow() {
        let light = Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0);
        let beyond = Sphere::new(Vec3::new(0.0, 20.0, 0.0), 1.0, Material::ivory());
        let scene = Scene::new().with_light(light).with_sphere(beyond);

        assert!(!scene.is_occluded(Vec3::ZERO, Vec3::Y, &light));
    }

    #[test]
    fn test_showcase_layout() {
        let scene = Scene::showcase();
        assert_eq!(scene.spheres.len(), 4);
        assert_eq!(scene.lights.len(), 3);
        assert_eq!(*scene.spheres[1].material(), Material::glass());
    }
}

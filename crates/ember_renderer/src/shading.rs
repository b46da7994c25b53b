//! Whitted-style shading: direct Phong lighting with shadow rays, plus
//! depth-bounded recursion into reflection and refraction.

use std::f64::consts::TAU;
use std::sync::Arc;

use crate::{Color, HitRecord, Ray, RenderConfig, Scene};
use ember_core::EnvironmentMap;
use ember_math::{reflect, refract, Vec3};

/// Color contributed by a refraction ray that undergoes total internal reflection.
pub const TOTAL_INTERNAL_REFLECTION_COLOR: Color = Color::new(1.0, 0.0, 0.0);

/// Offset applied to reflection ray origins.
const REFLECT_OFFSET: f32 = 1e-3;
/// Offset applied to refraction ray origins.
const REFRACT_OFFSET: f32 = 1e-2;

/// Per-frame state threaded through a render.
///
/// `frame` drives the environment rotation: each frame turns the sampled
/// longitude by [`FrameContext::ROTATION_STEP`] radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameContext {
    pub frame: u64,
}

impl FrameContext {
    pub const ROTATION_STEP: f64 = 0.05;

    pub fn new(frame: u64) -> Self {
        Self { frame }
    }

    /// The context for the following frame.
    pub fn next(self) -> Self {
        Self {
            frame: self.frame.wrapping_add(1),
        }
    }

    /// Longitude offset for environment lookups, in [0, 2pi).
    pub fn longitude_offset(&self) -> f32 {
        (self.frame as f64 * Self::ROTATION_STEP).rem_euclid(TAU) as f32
    }
}

/// What a ray sees when it leaves the scene.
#[derive(Debug, Clone)]
pub enum Background {
    /// The same color in every direction.
    Solid(Color),
    /// An equirectangular map, rotated by the frame's longitude offset.
    Environment(Arc<EnvironmentMap>),
}

impl Background {
    pub fn sample(&self, direction: Vec3, frame: &FrameContext) -> Color {
        match self {
            Background::Solid(color) => *color,
            Background::Environment(map) => {
                map.sample_direction(direction, frame.longitude_offset())
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(Color::new(0.2, 0.7, 0.8))
    }
}

/// Compute the color seen along a unit-direction ray.
///
/// Past `config.max_depth` the background is returned without touching the
/// scene. Reflection and refraction rays are only cast for materials that
/// weight them.
pub fn cast_ray(
    ray: &Ray,
    scene: &Scene,
    config: &RenderConfig,
    frame: &FrameContext,
    depth: u32,
) -> Color {
    if depth > config.max_depth {
        return config.background.sample(ray.direction(), frame);
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return config.background.sample(ray.direction(), frame);
    };

    let material = hit.material;
    let (diffuse, specular) = direct_lighting(scene, &hit, ray.direction());

    let reflect_color = if material.reflects() {
        let dir = reflect(ray.direction(), hit.normal).normalize();
        let reflected = Ray::offset_from(hit.p, hit.normal, dir, REFLECT_OFFSET);
        cast_ray(&reflected, scene, config, frame, depth + 1)
    } else {
        Color::ZERO
    };

    let refract_color = if material.refracts() {
        match refract(ray.direction(), hit.normal, material.refractive_index, 1.0) {
            Some(dir) => {
                let dir = dir.normalize();
                let refracted = Ray::offset_from(hit.p, hit.normal, dir, REFRACT_OFFSET);
                cast_ray(&refracted, scene, config, frame, depth + 1)
            }
            None => TOTAL_INTERNAL_REFLECTION_COLOR,
        }
    } else {
        Color::ZERO
    };

    let albedo = material.albedo;
    material.diffuse_color * (diffuse * albedo[0] + specular * albedo[1])
        + reflect_color * albedo[2]
        + refract_color * albedo[3]
}

/// Diffuse and specular intensities from every unoccluded light.
///
/// `view_dir` is the direction of the incoming ray.
pub fn direct_lighting(scene: &Scene, hit: &HitRecord, view_dir: Vec3) -> (f32, f32) {
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in &scene.lights {
        if scene.is_occluded(hit.p, hit.normal, light) {
            continue;
        }

        let light_dir = (light.position - hit.p).normalize();
        diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);

        let highlight = reflect(light_dir, hit.normal).dot(view_dir).max(0.0);
        specular += light.intensity * highlight.powf(hit.material.specular_exponent);
    }

    (diffuse, specular)
}

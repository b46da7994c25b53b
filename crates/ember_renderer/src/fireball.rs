//! Ray-marched "fireball": a noise-displaced sphere colored by depth of
//! displacement and lit by a single light.

use std::f32::consts::FRAC_PI_3;
use std::time::Instant;

use crate::{Camera, Color, DisplacedSphere, ImageBuffer, Ray, RaymarchConfig};
use ember_math::{lerp, Vec3};

/// Fireball render configuration.
#[derive(Debug, Clone, Copy)]
pub struct FireballConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Camera position (looking down -Z)
    pub eye: Vec3,
    /// The displaced surface
    pub sphere: DisplacedSphere,
    pub light_position: Vec3,
    /// Flat color for rays that miss
    pub background: Color,
    pub march: RaymarchConfig,
}

impl Default for FireballConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: FRAC_PI_3,
            eye: Vec3::new(0.0, 0.0, 3.0),
            sphere: DisplacedSphere::new(1.5, 1.0),
            light_position: Vec3::new(10.0, 10.0, 10.0),
            background: Color::new(0.2, 0.7, 0.8),
            march: RaymarchConfig::default(),
        }
    }
}

impl FireballConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Camera matching this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov, self.eye)
    }
}

/// Gray to dark gray to red to orange to yellow ramp; `d` is clamped to [0, 1].
pub fn palette_fire(d: f32) -> Color {
    const YELLOW: Color = Color::new(1.7, 1.3, 1.0);
    const ORANGE: Color = Color::new(1.0, 0.6, 0.0);
    const RED: Color = Color::new(1.0, 0.0, 0.0);
    const DARK_GRAY: Color = Color::new(0.2, 0.2, 0.2);
    const GRAY: Color = Color::new(0.4, 0.4, 0.4);

    let x = d.clamp(0.0, 1.0);
    if x < 0.30 {
        lerp(GRAY, DARK_GRAY, x * 2.5)
    } else if x < 0.50 {
        lerp(DARK_GRAY, RED, x * 2.5 - 2.0)
    } else if x < 0.75 {
        lerp(RED, ORANGE, x * 2.5 - 2.5)
    } else {
        lerp(ORANGE, YELLOW, x * 4.0 - 3.0)
    }
}

/// Color of a surface point found by the marcher.
///
/// Deeper displacement maps further along the fire ramp; a Lambert term
/// with a 0.4 floor keeps the unlit side visible.
pub fn shade_fireball(hit: Vec3, config: &FireballConfig) -> Color {
    let sphere = &config.sphere;
    let noise_level = if sphere.noise_amplitude > 0.0 {
        (sphere.radius - hit.length()) / sphere.noise_amplitude
    } else {
        0.0
    };

    let light_dir = (config.light_position - hit).normalize();
    let intensity = light_dir.dot(sphere.normal_at(hit)).max(0.4);

    palette_fire(-0.2 + noise_level * 2.0) * intensity
}

/// Color seen along one primary ray.
pub fn trace_fireball(ray: &Ray, config: &FireballConfig) -> Color {
    match config.sphere.march(ray, &config.march) {
        Some(hit) => shade_fireball(hit, config),
        None => config.background,
    }
}

/// Render the fireball to an image buffer.
pub fn render_fireball(config: &FireballConfig) -> ImageBuffer {
    log::info!(
        "Marching {}x{} (radius {}, noise amplitude {}, {} steps)",
        config.width,
        config.height,
        config.sphere.radius,
        config.sphere.noise_amplitude,
        config.march.max_steps
    );

    let start = Instant::now();
    let camera = config.camera();
    let mut image = ImageBuffer::new(config.width, config.height);
    image.par_fill(|x, y| trace_fireball(&camera.get_ray(x, y), config));

    log::info!("Marched in {:?}", start.elapsed());
    image
}

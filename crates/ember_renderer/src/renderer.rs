//! Frame driver for the ray tracer.
//!
//! Every pixel is independent: rows are handed out to rayon workers, each
//! reading the shared scene and writing only its own slice of the buffer.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;
use std::time::Instant;

use crate::{cast_ray, Background, Camera, Color, FrameContext, Scene};
use ember_core::{save_ppm, ToneMap};
use ember_math::Vec3;
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Deepest recursion level that still shades; deeper rays see the background
    pub max_depth: u32,
    /// Camera position
    pub eye: Vec3,
    /// What rays see when they leave the scene
    pub background: Background,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: FRAC_PI_2,
            max_depth: 5,
            eye: Vec3::ZERO,
            background: Background::default(),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical field of view (radians).
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the recursion limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the background.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Camera matching this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov, self.eye)
    }
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Linear colors, row-major, top row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds",
            x,
            y
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    /// Fill every pixel in parallel, one row per task.
    pub fn par_fill<F>(&mut self, shade: F)
    where
        F: Fn(u32, u32) -> Color + Sync,
    {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        self.pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, pixel) in row.iter_mut().enumerate() {
                    *pixel = shade(i as u32, j as u32);
                }
            });
    }

    /// Write the buffer as a binary PPM file.
    pub fn save_ppm(&self, path: impl AsRef<Path>, tone: ToneMap) -> std::io::Result<()> {
        save_ppm(path, self.width, self.height, &self.pixels, tone)
    }
}

/// Shade a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    frame: &FrameContext,
    x: u32,
    y: u32,
) -> Color {
    let ray = camera.get_ray(x, y);
    cast_ray(&ray, scene, config, frame, 0)
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, config: &RenderConfig, frame: &FrameContext) -> ImageBuffer {
    if scene.lights.is_empty() {
        log::warn!("Scene has no lights; only the background will show");
    }
    log::info!(
        "Rendering {}x{} ({} spheres, {} lights, frame {})",
        config.width,
        config.height,
        scene.spheres.len(),
        scene.lights.len(),
        frame.frame
    );

    let start = Instant::now();
    let camera = config.camera();
    let mut image = ImageBuffer::new(config.width, config.height);
    image.par_fill(|x, y| render_pixel(&camera, scene, config, frame, x, y));

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

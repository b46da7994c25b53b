//! Equirectangular environment maps.
//!
//! The ray tracer falls back to this texture whenever a ray leaves the scene.
//! Pixels are kept as raw 8-bit channels scaled to [0, 1] (no sRGB decode),
//! row-major, top row first.

use std::f32::consts::PI;
use std::path::Path;

use ember_math::Vec3;
use thiserror::Error;

/// Errors that can occur during environment map loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Unsupported texture format: {0}")]
    UnsupportedFormat(String),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A loaded equirectangular texture.
#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    /// Linear RGB pixels in [0, 1], row-major order
    pub pixels: Vec<Vec3>,

    /// Original file path (for debugging)
    pub path: String,
}

impl EnvironmentMap {
    /// Create an environment map from pixel data.
    ///
    /// Panics if the pixel count does not match the dimensions or either
    /// dimension is zero.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>, path: impl Into<String>) -> Self {
        assert!(width > 0 && height > 0, "environment map must not be empty");
        assert_eq!(
            pixels.len(),
            (width * height) as usize,
            "environment map pixel count does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// Create a 1x1 map that returns the same color in every direction.
    pub fn solid_color(color: Vec3) -> Self {
        Self::new(1, 1, vec![color], "<solid>")
    }

    /// Build a map from tightly packed 8-bit RGB data.
    pub fn from_rgb8(
        width: u32,
        height: u32,
        data: &[u8],
        path: impl Into<String>,
    ) -> TextureResult<Self> {
        let path = path.into();
        if width == 0 || height == 0 {
            return Err(TextureError::LoadError(format!("{} has no pixels", path)));
        }
        if data.len() != (width * height * 3) as usize {
            return Err(TextureError::UnsupportedFormat(format!(
                "{}: expected {} bytes of RGB data, found {}",
                path,
                width * height * 3,
                data.len()
            )));
        }

        let pixels = data
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0].into(), p[1].into(), p[2].into()) / 255.0)
            .collect();

        Ok(Self::new(width, height, pixels, path))
    }

    /// Load an environment map from an image file.
    ///
    /// The file must decode to exactly three channels; anything else
    /// (grayscale, RGBA, 16-bit) is rejected.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let img = image::load_from_memory(&bytes)?;

        let color = img.color();
        if color.channel_count() != 3 || color.bytes_per_pixel() != 3 {
            return Err(TextureError::UnsupportedFormat(format!(
                "{}: expected 8-bit RGB, found {:?}",
                path.display(),
                color
            )));
        }

        let rgb = img.into_rgb8();
        let (width, height) = rgb.dimensions();
        let map = Self::from_rgb8(width, height, rgb.as_raw(), path.to_string_lossy())?;

        log::debug!(
            "Loaded environment map: {} ({}x{}, {:.1} KB)",
            map.path,
            map.width,
            map.height,
            map.size_bytes() as f32 / 1024.0
        );

        Ok(map)
    }

    /// Look up the color seen along a unit direction.
    ///
    /// Azimuth `atan2(z, x)` maps to the horizontal axis and the polar angle
    /// `acos(y)` to the vertical one. `longitude_offset` (radians) shifts the
    /// sampled longitude; the horizontal coordinate wraps around the seam.
    pub fn sample_direction(&self, dir: Vec3, longitude_offset: f32) -> Vec3 {
        let w = self.width as f32;
        let h = self.height as f32;

        let u = dir.z.atan2(dir.x) / (2.0 * PI) * w + longitude_offset * w / (2.0 * PI);
        let v = dir.y.clamp(-1.0, 1.0).acos() / PI * h;

        let x = (u.abs() as u64 % self.width as u64) as u32;
        let y = (v.abs() as u32).min(self.height - 1);

        self.get_pixel(x.min(self.width - 1), y)
    }

    /// Get pixel at integer coordinates.
    fn get_pixel(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Vec3>()
    }
}

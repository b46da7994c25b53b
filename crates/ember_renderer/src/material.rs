//! Surface description for the Whitted shading model.

use ember_math::{Vec2, Vec3, Vec4};

/// Color type alias (linear RGB, not clamped)
pub type Color = Vec3;

/// Phong-style material with recursive reflection and refraction weights.
///
/// `albedo` weights the four contributions of the final blend, in order:
/// diffuse, specular, reflection, refraction. The weights need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub albedo: Vec4,
    pub diffuse_color: Color,
    pub specular_exponent: f32,
    /// Index of refraction (1.0 = vacuum, 1.5 = glass)
    pub refractive_index: f32,
}

impl Material {
    /// Create a new material.
    ///
    /// Panics on a negative specular exponent or a non-positive refractive index.
    pub fn new(
        albedo: Vec4,
        diffuse_color: Color,
        specular_exponent: f32,
        refractive_index: f32,
    ) -> Self {
        assert!(specular_exponent >= 0.0, "specular exponent must be >= 0");
        assert!(refractive_index > 0.0, "refractive index must be > 0");
        Self {
            albedo,
            diffuse_color,
            specular_exponent,
            refractive_index,
        }
    }

    /// A material with only diffuse and specular terms, in vacuum.
    pub fn opaque(albedo: Vec2, diffuse_color: Color, specular_exponent: f32) -> Self {
        let albedo = albedo.extend(0.0).extend(0.0);
        Self::new(albedo, diffuse_color, specular_exponent, 1.0)
    }

    pub fn ivory() -> Self {
        Self::new(
            Vec4::new(0.6, 0.1, 0.1, 0.0),
            Color::new(0.4, 0.4, 0.3),
            50.0,
            1.0,
        )
    }

    pub fn red_rubber() -> Self {
        Self::new(
            Vec4::new(0.9, 0.1, 0.0, 0.0),
            Color::new(0.3, 0.1, 0.1),
            10.0,
            1.0,
        )
    }

    pub fn mirror() -> Self {
        Self::new(Vec4::new(0.0, 10.0, 0.8, 0.0), Color::ONE, 1425.0, 1.0)
    }

    pub fn glass() -> Self {
        Self::new(
            Vec4::new(0.0, 0.5, 0.1, 0.8),
            Color::new(0.6, 0.7, 0.8),
            125.0,
            1.5,
        )
    }

    #[inline]
    pub fn reflects(&self) -> bool {
        self.albedo[2] != 0.0
    }

    #[inline]
    pub fn refracts(&self) -> bool {
        self.albedo[3] != 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Vec4::new(1.0, 0.0, 0.0, 0.0), Color::ZERO, 0.0, 1.0)
    }
}

//! Pinhole camera for primary ray generation.

use crate::Ray;
use ember_math::Vec3;

/// Pinhole camera looking down -Z from `eye`, with +Y up.
///
/// Pixel (i, j) maps to the camera-space direction
/// `(i - width/2, height/2 - j, -height / (2 tan(fov/2)))`, i.e. the image
/// plane sits at the distance where one pixel spans one unit. `fov` is the
/// vertical field of view in radians.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Vec3,
    plane_distance: f32,
}

impl Camera {
    /// Create a camera for the given resolution and vertical field of view.
    pub fn new(image_width: u32, image_height: u32, fov: f32, eye: Vec3) -> Self {
        let plane_distance = image_height as f32 / (2.0 * (fov / 2.0).tan());
        Self {
            image_width,
            image_height,
            eye,
            plane_distance,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Unit-direction ray through pixel (i, j), (0, 0) being top-left.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = i as f32 - self.image_width as f32 / 2.0;
        let y = self.image_height as f32 / 2.0 - j as f32;
        let direction = Vec3::new(x, y, -self.plane_distance).normalize();
        Ray::new(self.eye, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = Camera::new(100, 80, FRAC_PI_2, Vec3::new(0.0, 0.0, 3.0));
        let ray = camera.get_ray(50, 40);

        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(ray.origin(), camera.eye());
        assert!((ray.direction() + Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_top_edge_matches_fov() {
        // Top edge of a 90 degree camera is 45 degrees up
        let camera = Camera::new(100, 100, FRAC_PI_2, Vec3::ZERO);
        let ray = camera.get_ray(50, 0);
        let d = ray.direction();

        assert!((d.y - (-d.z)).abs() < 1e-5);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_image_orientation() {
        let camera = Camera::new(64, 48, FRAC_PI_2, Vec3::ZERO);

        let top_left = camera.get_ray(0, 0).direction();
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        let bottom_right = camera.get_ray(63, 47).direction();
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    }
}

//! Ember Core - image I/O around the renderers.
//!
//! This crate provides:
//!
//! - **Environment maps**: equirectangular RGB textures sampled by direction
//! - **PPM output**: binary (P6) serialization of a linear color buffer
//!
//! # Example
//!
//! ```ignore
//! use ember_core::{EnvironmentMap, ToneMap, save_ppm};
//!
//! let envmap = EnvironmentMap::load("envmap.jpg")?;
//! let sky = envmap.sample_direction(Vec3::Y, 0.0);
//! save_ppm("out.ppm", 1, 1, &[sky], ToneMap::Clamp)?;
//! ```

pub mod environment;
pub mod ppm;

// Re-export commonly used types
pub use environment::{EnvironmentMap, TextureError, TextureResult};
pub use ppm::{color_to_rgb8, save_ppm, write_ppm, ToneMap};

//! Ember Renderer - CPU ray tracing and ray marching
//!
//! Two renderers share the camera, image buffer and frame driver:
//!
//! - a Whitted-style ray tracer over analytic spheres, with shadow rays,
//!   Phong highlights, recursive reflection/refraction and an environment
//!   map background ([`render`]);
//! - a sphere tracer over a noise-displaced implicit sphere, shaded with a
//!   fire palette ([`render_fireball`]).

mod camera;
mod fireball;
mod hittable;
mod march;
mod material;
pub mod noise;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use camera::Camera;
pub use fireball::{palette_fire, render_fireball, shade_fireball, trace_fireball, FireballConfig};
pub use hittable::HitRecord;
pub use march::{DisplacedSphere, RaymarchConfig};
pub use material::{Color, Material};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig};
pub use scene::{Light, Scene, MAX_HIT_DISTANCE};
pub use shading::{
    cast_ray, direct_lighting, Background, FrameContext, TOTAL_INTERNAL_REFLECTION_COLOR,
};
pub use sphere::Sphere;

/// Re-export the math types the renderers are built on
pub use ember_math::{Ray, Vec2, Vec3, Vec4};

//! Glint Renderer - Whitted-style recursive ray tracing.
//!
//! Local Phong shading with hard shadows, combined with recursive mirror
//! reflection and refraction blended by a simplified Fresnel term.
//! Intersection is a linear scan over the scene's surfaces.

mod camera;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod surface;
mod tracer;

pub use camera::{Camera, FOV_RANGE};
pub use plane::Plane;
pub use renderer::{render, render_pixel, render_to_image, FrameSink, ImageBuffer, RenderConfig};
pub use scene::{Scene, SceneBuilder};
pub use shading::{direct_light, light_visibility, shade};
pub use sphere::Sphere;
pub use surface::{Hit, Surface};
pub use tracer::{trace_ray, BIAS, DEPTH_LIMIT, MAX_DEPTH};

/// Re-export scene data and math types used in the public API
pub use glint_core::{AmbientLight, Material, PointLight, SceneError};
pub use glint_math::{Color, DVec3, Interval, Ray};

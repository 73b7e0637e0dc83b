//! Recursive Whitted tracer.
//!
//! Each call finds the nearest surface, shades it locally, then spawns a
//! mirror ray and a refracted ray one level deeper and blends the three with
//! a simplified Fresnel term. The only state carried down the recursion is
//! the depth.

use glint_math::{optics, Color, Ray};

use crate::shading::shade;
use crate::{RenderConfig, Scene};

/// Default recursion bound.
pub const MAX_DEPTH: u32 = 4;

/// Hard ceiling on recursion depth, whatever the config asks for.
///
/// Each level is one stack frame of `trace_ray`; facing mirrors reach the
/// bound on every pixel.
pub const DEPTH_LIMIT: u32 = 16;

/// Offset applied along the normal to secondary ray origins.
pub const BIAS: f64 = 1e-4;

/// Compute the color seen by a ray.
///
/// Primary rays start at depth 0. At `config.max_depth` (capped at
/// [`DEPTH_LIMIT`]) the background is returned without touching the scene.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    let background = scene.background();

    if depth >= config.depth_bound() {
        return background;
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return background;
    };

    let dir = ray.direction();
    let point = hit.point(ray);
    let mut normal = hit.surface.normal_at(point);

    // Ray approaches from inside the surface
    let inside = normal.dot(dir) > 0.0;
    if inside {
        normal = -normal;
    }

    let material = hit.surface.material();

    let facing_ratio = -normal.dot(dir);
    let fresnel = optics::fresnel(facing_ratio);
    let kt = (1.0 - fresnel) * material.transparency;
    let kr = (1.0 - kt) * material.reflectivity;
    let kd = 1.0 - material.transparency;

    // Terms with zero weight are skipped; they would contribute nothing.
    let direct = if kd != 0.0 {
        shade(scene, hit.index, point, normal, -dir)
    } else {
        Color::ZERO
    };

    let reflection = if kr != 0.0 {
        let reflect_dir = optics::reflect(dir, normal);
        let reflect_ray = Ray::new(point + normal * BIAS, reflect_dir);
        trace_ray(&reflect_ray, scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    let refraction = if kt != 0.0 {
        let eta = if inside {
            material.refraction_index
        } else {
            1.0 / material.refraction_index
        };

        // None means total internal reflection
        match optics::refract(dir, normal, eta) {
            Some(refract_dir) => {
                let refract_ray = Ray::new(point - normal * BIAS, refract_dir);
                trace_ray(&refract_ray, scene, depth + 1, config)
            }
            None => Color::ZERO,
        }
    } else {
        Color::ZERO
    };

    // Background falloff for deeper bounces; primary rays get the full term
    let falloff = scene.ambient().intensity * kd / (depth + 1) as f64;

    reflection * kr + refraction * kt + direct * kd + background * falloff
}

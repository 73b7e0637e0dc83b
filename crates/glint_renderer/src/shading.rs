//! Direct (local) Phong illumination with hard and tinted shadows.

use glint_core::PointLight;
use glint_math::{optics, Color, DVec3, Interval, Ray};

use crate::Scene;

/// Shadow hits closer than this to the shaded point are ignored.
pub const SHADOW_EPSILON: f64 = 1e-6;

/// Lights closer than this to the shaded point contribute nothing.
const LIGHT_DISTANCE_EPSILON: f64 = 1e-9;

/// Direct color at `point` on the surface at `surface_index`.
///
/// `normal` must face the viewer's side of the surface and `view_dir` is the
/// unit direction from the point toward the viewer. Diffuse and specular
/// terms are summed over all point lights, then the ambient term is added
/// once.
pub fn shade(
    scene: &Scene,
    surface_index: usize,
    point: DVec3,
    normal: DVec3,
    view_dir: DVec3,
) -> Color {
    let material = scene.surfaces()[surface_index].material();

    let lit: Color = scene
        .lights()
        .iter()
        .map(|light| direct_light(scene, surface_index, light, point, normal, view_dir))
        .sum();

    lit + scene.ambient().radiance() * material.ambient
}

/// Diffuse plus specular contribution of a single light, shadowing included.
pub fn direct_light(
    scene: &Scene,
    surface_index: usize,
    light: &PointLight,
    point: DVec3,
    normal: DVec3,
    view_dir: DVec3,
) -> Color {
    let material = scene.surfaces()[surface_index].material();

    let to_light = light.position - point;
    let distance = to_light.length();
    if distance < LIGHT_DISTANCE_EPSILON {
        return Color::ZERO;
    }
    let light_dir = to_light / distance;

    // Light is behind the surface
    let n_dot_l = normal.dot(light_dir);
    if n_dot_l <= 0.0 {
        return Color::ZERO;
    }

    let visibility = light_visibility(scene, surface_index, point, light_dir, distance);
    if visibility <= 0.0 {
        return Color::ZERO;
    }

    let diffuse = material.diffuse * n_dot_l;

    // Phong: mirror the light direction about the normal and compare with
    // the view direction
    let reflected = 2.0 * n_dot_l * normal - light_dir;
    let r_dot_v = reflected.dot(view_dir);
    let specular = if r_dot_v > 0.0 && material.specular_intensity > 0.0 {
        material.specular * r_dot_v.powf(material.specular_exponent) * material.specular_intensity
    } else {
        Color::ZERO
    };

    (diffuse + specular) * light.color * (light.intensity * visibility)
}

/// Fraction of a light reaching `point` along `light_dir`, in [0, 1].
///
/// Only surfaces strictly between the point and the light occlude; the
/// shading surface itself is skipped. Opaque occluders block the light
/// completely, transparent ones scale it by `(1 - fresnel) * transparency`.
pub fn light_visibility(
    scene: &Scene,
    surface_index: usize,
    point: DVec3,
    light_dir: DVec3,
    light_distance: f64,
) -> f64 {
    let feeler = Ray::new(point, light_dir);
    let span = Interval::new(SHADOW_EPSILON, light_distance);
    let mut visibility = 1.0;

    for (index, occluder) in scene.surfaces().iter().enumerate() {
        if index == surface_index {
            continue;
        }

        let Some(t) = occluder.intersect(&feeler) else {
            continue;
        };
        if !span.surrounds(t) {
            continue;
        }

        let material = occluder.material();
        if material.transparency <= 0.0 {
            return 0.0;
        }

        let occluder_normal = occluder.normal_at(feeler.at(t));
        let facing = occluder_normal.dot(light_dir).abs();
        visibility *= (1.0 - optics::fresnel(facing)) * material.transparency;
    }

    visibility
}

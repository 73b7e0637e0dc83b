//! Reflection, refraction and Fresnel helpers shared by the shader and tracer.

use crate::DVec3;

/// Linear interpolation: `a * (1 - t) + b * t`.
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n` facing the
/// incoming side, using the ratio of indices `eta = n_from / n_to`.
///
/// Returns `None` on total internal reflection.
pub fn refract(v: DVec3, n: DVec3, eta: f64) -> Option<DVec3> {
    let cosi = -n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return None;
    }
    Some((eta * v + (eta * cosi - k.sqrt()) * n).normalize_or_zero())
}

/// Simplified Schlick-style Fresnel term.
///
/// `facing_ratio` is the cosine between the view direction and the normal.
/// This is `mix((1 - facing)^3, 1, 0.1)`, not the dielectric equations, so
/// the result never drops below 0.1.
#[inline]
pub fn fresnel(facing_ratio: f64) -> f64 {
    mix((1.0 - facing_ratio).powi(3), 1.0, 0.1)
}

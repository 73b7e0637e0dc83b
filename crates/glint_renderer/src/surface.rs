//! Surface trait and the hit record returned by the nearest-hit scan.

use glint_core::Material;
use glint_math::{DVec3, Ray};

/// Trait for implicit primitives that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Ray parameter of the nearest forward intersection, if any.
    ///
    /// The ray direction is unit length, so `t` is a world-space distance.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: DVec3) -> DVec3;

    /// Material used for shading this surface.
    fn material(&self) -> &Material;
}

/// Nearest intersection found in a scene.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Position of the surface in scene insertion order
    pub index: usize,
    pub surface: &'a dyn Surface,
}

impl<'a> Hit<'a> {
    /// World-space intersection point for the ray that produced this hit.
    #[inline]
    pub fn point(&self, ray: &Ray) -> DVec3 {
        ray.at(self.t)
    }
}

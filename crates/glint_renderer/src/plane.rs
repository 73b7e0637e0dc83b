//! Infinite plane primitive.

use crate::surface::Surface;
use glint_core::{Material, SceneError};
use glint_math::{DVec3, Ray};

/// Rays with `|direction · normal|` below this are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// An infinite plane through `origin` with a fixed unit normal.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: DVec3,
    normal: DVec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized and must not be zero.
    pub fn new(origin: DVec3, normal: DVec3, material: Material) -> Result<Self, SceneError> {
        let normal = normal.try_normalize().ok_or(SceneError::DegenerateNormal)?;

        Ok(Self {
            origin,
            normal,
            material,
        })
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.origin - ray.origin()).dot(self.normal) / denom;
        (t > 0.0).then_some(t)
    }

    fn normal_at(&self, _point: DVec3) -> DVec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

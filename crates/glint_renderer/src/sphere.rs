//! Sphere primitive for ray tracing.

use crate::surface::Surface;
use glint_core::{Material, SceneError};
use glint_math::{DVec3, Ray};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Result<Self, SceneError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let radius2 = self.radius * self.radius;
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let origin_inside = l.length_squared() < radius2;

        // Sphere is behind the ray
        if tca < 0.0 && !origin_inside {
            return None;
        }

        // Ray passes outside the sphere's cross-section
        let d2 = l.length_squared() - tca * tca;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let near = tca - thc;
        let far = tca + thc;

        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

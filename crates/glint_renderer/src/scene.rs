//! The immutable render scene: ordered surfaces, point lights, ambient light.

use glint_core::{AmbientLight, PointLight, SceneDescription, SceneError, SurfaceDescription};
use glint_math::{Color, Interval, Ray};

use crate::surface::{Hit, Surface};
use crate::{Plane, Sphere};

/// A fully assembled scene.
///
/// Built once through [`SceneBuilder`] or [`Scene::from_description`] and
/// only borrowed immutably while rendering.
pub struct Scene {
    surfaces: Vec<Box<dyn Surface>>,
    lights: Vec<PointLight>,
    ambient: AmbientLight,
}

impl Scene {
    /// Start assembling a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Build a scene from a parsed scene file.
    pub fn from_description(description: &SceneDescription) -> Result<Self, SceneError> {
        let mut builder = SceneBuilder::new().with_ambient(description.ambient.clone());

        for light in &description.lights {
            builder = builder.with_light(light.clone());
        }

        for surface in &description.surfaces {
            builder = match surface {
                SurfaceDescription::Sphere { center, radius, material } => {
                    builder.with_surface(Sphere::new(*center, *radius, material.clone())?)
                }
                SurfaceDescription::Plane { origin, normal, material } => {
                    builder.with_surface(Plane::new(*origin, *normal, material.clone())?)
                }
            };
        }

        builder.build()
    }

    /// Surfaces in insertion order.
    pub fn surfaces(&self) -> &[Box<dyn Surface>] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn ambient(&self) -> &AmbientLight {
        &self.ambient
    }

    /// Color returned for rays that hit nothing.
    #[inline]
    pub fn background(&self) -> Color {
        self.ambient.color
    }

    /// Find the nearest forward intersection by testing every surface.
    ///
    /// Ties keep the surface inserted first.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        if ray.is_degenerate() {
            return None;
        }

        let mut nearest: Option<Hit<'_>> = None;

        for (index, surface) in self.surfaces.iter().enumerate() {
            let Some(t) = surface.intersect(ray) else {
                continue;
            };
            if !Interval::FORWARD.contains(t) {
                continue;
            }
            if nearest.map_or(true, |hit| t < hit.t) {
                nearest = Some(Hit {
                    t,
                    index,
                    surface: surface.as_ref(),
                });
            }
        }

        nearest
    }
}

/// Builder collecting surfaces and lights before the scene is frozen.
pub struct SceneBuilder {
    surfaces: Vec<Box<dyn Surface>>,
    lights: Vec<PointLight>,
    ambient: AmbientLight,
}

impl SceneBuilder {
    /// Create an empty builder with a black ambient light.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
            ambient: AmbientLight::default(),
        }
    }

    /// Append a surface. Insertion order is the tie-break order.
    pub fn with_surface(mut self, surface: impl Surface + 'static) -> Self {
        self.surfaces.push(Box::new(surface));
        self
    }

    pub fn with_light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    /// Set the ambient light, which is also the background color.
    pub fn with_ambient(mut self, ambient: AmbientLight) -> Self {
        self.ambient = ambient;
        self
    }

    /// Validate lights and materials and freeze the scene.
    pub fn build(self) -> Result<Scene, SceneError> {
        self.ambient.validate()?;

        for light in &self.lights {
            light.validate()?;
        }

        for (index, surface) in self.surfaces.iter().enumerate() {
            let material = surface.material();
            material.validate()?;

            if material.exceeds_energy_budget() {
                log::warn!(
                    "Surface {} has reflectivity {} + transparency {} > 1; keeping as authored",
                    index,
                    material.reflectivity,
                    material.transparency
                );
            }
        }

        log::info!(
            "Scene assembled: {} surfaces, {} point lights",
            self.surfaces.len(),
            self.lights.len()
        );

        Ok(Scene {
            surfaces: self.surfaces,
            lights: self.lights,
            ambient: self.ambient,
        })
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

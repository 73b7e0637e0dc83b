//! Phong/Whitted surface material.

use glint_math::Color;
use serde::{Deserialize, Serialize};

use crate::error::{non_negative, SceneError, SceneResult};

/// Surface material shared by the local shading model and the recursive
/// reflection/refraction passes.
///
/// `reflectivity` and `transparency` are meant to stay in [0, 1]; their sum
/// is not clamped or renormalized (see [`Material::exceeds_energy_budget`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse reflectance (RGB, 0-1)
    pub diffuse: Color,

    /// Reflectance of the scene's ambient light
    pub ambient: Color,

    /// Specular highlight color
    pub specular: Color,

    /// Phong exponent (higher = tighter highlight)
    pub specular_exponent: f64,

    /// Scale applied to the specular highlight
    pub specular_intensity: f64,

    /// Fraction of light carried by the mirror bounce
    pub reflectivity: f64,

    /// Fraction of light carried by the refracted ray
    pub transparency: f64,

    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refraction_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::splat(0.8),
            ambient: Color::splat(0.8),
            specular: Color::ONE,
            specular_exponent: 32.0,
            specular_intensity: 0.5,
            reflectivity: 0.0,
            transparency: 0.0,
            refraction_index: 1.0,
        }
    }
}

impl Material {
    /// A matte, opaque material: no highlight, no reflection, no refraction.
    ///
    /// The color is used for both the diffuse and the ambient response.
    pub fn diffuse(color: Color) -> Self {
        Self {
            diffuse: color,
            ambient: color,
            specular_intensity: 0.0,
            ..Default::default()
        }
    }

    /// A tinted mirror.
    pub fn mirror(tint: Color, reflectivity: f64) -> Self {
        Self {
            diffuse: tint * 0.1,
            ambient: tint * 0.1,
            specular_exponent: 128.0,
            specular_intensity: 1.0,
            reflectivity,
            ..Default::default()
        }
    }

    /// A clear dielectric.
    pub fn glass(refraction_index: f64) -> Self {
        Self {
            diffuse: Color::splat(0.05),
            ambient: Color::ZERO,
            specular_exponent: 256.0,
            specular_intensity: 1.0,
            reflectivity: 0.1,
            transparency: 0.9,
            refraction_index,
            ..Default::default()
        }
    }

    /// Set the Phong highlight.
    pub fn with_specular(mut self, specular: Color, exponent: f64, intensity: f64) -> Self {
        self.specular = specular;
        self.specular_exponent = exponent;
        self.specular_intensity = intensity;
        self
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the transparency and index of refraction.
    pub fn with_transparency(mut self, transparency: f64, refraction_index: f64) -> Self {
        self.transparency = transparency;
        self.refraction_index = refraction_index;
        self
    }

    /// Check the values the tracer divides by or raises to a power.
    pub fn validate(&self) -> SceneResult<()> {
        if !(self.refraction_index > 0.0 && self.refraction_index.is_finite()) {
            return Err(SceneError::InvalidRefractionIndex(self.refraction_index));
        }
        non_negative("specular exponent", self.specular_exponent)?;
        non_negative("specular intensity", self.specular_intensity)?;
        Ok(())
    }

    /// True when reflectivity and transparency together exceed 1.
    ///
    /// Such a material can return more light than it receives. It is left as
    /// authored and only reported.
    pub fn exceeds_energy_budget(&self) -> bool {
        self.reflectivity + self.transparency > 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuse_preset() {
        let white = Material::diffuse(Color::ONE);
        assert_eq!(white.diffuse, Color::ONE);
        assert_eq!(white.ambient, Color::ONE);
        assert_eq!(white.specular_intensity, 0.0);
        assert_eq!(white.reflectivity, 0.0);
        assert_eq!(white.transparency, 0.0);
        assert!(white.validate().is_ok());
    }

    #[test]
    fn test_invalid_refraction_index() {
        let material = Material::default().with_transparency(0.5, 0.0);
        assert_eq!(
            material.validate(),
            Err(SceneError::InvalidRefractionIndex(0.0))
        );

        let material = Material::default().with_transparency(0.5, f64::NAN);
        assert!(material.validate().is_err());
    }

    #[test]
    fn test_negative_specular_rejected() {
        let material = Material::default().with_specular(Color::ONE, -4.0, 1.0);
        assert!(matches!(
            material.validate(),
            Err(SceneError::Negative { what: "specular exponent", .. })
        ));
    }

    #[test]
    fn test_energy_budget_is_reported_not_fixed() {
        let material = Material::default()
            .with_reflectivity(1.0)
            .with_transparency(0.9, 1.5);
        assert!(material.exceeds_energy_budget());
        assert!(material.validate().is_ok());
        // Values stay as authored
        assert_eq!(material.reflectivity, 1.0);
        assert_eq!(material.transparency, 0.9);

        assert!(!Material::glass(1.5).exceeds_energy_budget());
        assert!(!Material::mirror(Color::ONE, 0.8).exceeds_energy_budget());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let material: Material =
            serde_json::from_str(r#"{"diffuse": [1.0, 0.0, 0.0], "reflectivity": 0.25}"#).unwrap();

        assert_eq!(material.diffuse, Color::new(1.0, 0.0, 0.0));
        assert_eq!(material.reflectivity, 0.25);
        assert_eq!(material.refraction_index, Material::default().refraction_index);
    }
}

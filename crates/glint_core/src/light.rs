//! Scene light sources.

use glint_math::{Color, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{non_negative, SceneResult};

/// An infinitesimal light that casts hard shadows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// World-space position
    pub position: DVec3,

    /// Light color (RGB, 0-1)
    #[serde(default = "white")]
    pub color: Color,

    /// Brightness multiplier
    #[serde(default = "unit")]
    pub intensity: f64,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: DVec3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Create a white point light.
    pub fn white(position: DVec3, intensity: f64) -> Self {
        Self::new(position, Color::ONE, intensity)
    }

    pub fn validate(&self) -> SceneResult<()> {
        non_negative("light intensity", self.intensity)
    }
}

/// The single scene-wide ambient light.
///
/// Its color doubles as the background color returned for rays that escape
/// the scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f64,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f64) -> Self {
        Self { color, intensity }
    }

    /// Radiance added to every shaded point before material scaling.
    #[inline]
    pub fn radiance(&self) -> Color {
        self.color * self.intensity
    }

    pub fn validate(&self) -> SceneResult<()> {
        non_negative("ambient intensity", self.intensity)
    }
}

fn white() -> Color {
    Color::ONE
}

fn unit() -> f64 {
    1.0
}

//! JSON scene descriptions.
//!
//! A description is plain data: surfaces are listed in the order they will
//! be inserted into the render scene, which is also the tie-break order for
//! equal hit distances. Geometric validation (positive radii, non-zero plane
//! normals) happens when the renderer builds its scene from the description.

use std::fs;
use std::path::Path;

use glint_math::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::{AmbientLight, PointLight};
use crate::material::Material;

/// Errors that can occur while reading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// One implicit surface of a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceDescription {
    Sphere {
        center: DVec3,
        radius: f64,
        #[serde(default)]
        material: Material,
    },
    Plane {
        origin: DVec3,
        normal: DVec3,
        #[serde(default)]
        material: Material,
    },
}

impl SurfaceDescription {
    pub fn material(&self) -> &Material {
        match self {
            SurfaceDescription::Sphere { material, .. } => material,
            SurfaceDescription::Plane { material, .. } => material,
        }
    }

    /// Short kind name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            SurfaceDescription::Sphere { .. } => "sphere",
            SurfaceDescription::Plane { .. } => "plane",
        }
    }
}

/// A complete scene file: ambient light, point lights and ordered surfaces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    pub name: String,

    pub ambient: AmbientLight,

    pub lights: Vec<PointLight>,

    pub surfaces: Vec<SurfaceDescription>,
}

impl SceneDescription {
    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the description as pretty-printed JSON.
    pub fn to_json_string(&self) -> LoadResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a scene description from a JSON file.
///
/// When the file does not name the scene, the file stem is used.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mut description = SceneDescription::from_json_str(&text)?;

    if description.name.is_empty() {
        description.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    log::info!(
        "Loaded scene '{}' from {}: {} surfaces, {} lights",
        description.name,
        path.display(),
        description.surfaces.len(),
        description.lights.len()
    );
    for (index, surface) in description.surfaces.iter().enumerate() {
        log::debug!("  surface {}: {}", index, surface.kind());
    }

    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    const SCENE: &str = r#"{
        "ambient": {"color": [0.6, 0.8, 1.0], "intensity": 0.2},
        "lights": [{"position": [0, 4, 7], "intensity": 1.0}],
        "surfaces": [
            {"type": "sphere", "center": [0, 0, 10], "radius": 1.0,
             "material": {"diffuse": [1, 1, 1], "specular_intensity": 0.0}},
            {"type": "plane", "origin": [0, -1, 0], "normal": [0, 1, 0]}
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let description = SceneDescription::from_json_str(SCENE).unwrap();

        assert_eq!(description.ambient.color, Color::new(0.6, 0.8, 1.0));
        assert_eq!(description.lights.len(), 1);
        assert_eq!(description.lights[0].color, Color::ONE);
        assert_eq!(description.surfaces.len(), 2);

        // Order is preserved
        assert_eq!(description.surfaces[0].kind(), "sphere");
        assert_eq!(description.surfaces[1].kind(), "plane");

        match &description.surfaces[0] {
            SurfaceDescription::Sphere { center, radius, material } => {
                assert_eq!(*center, DVec3::new(0.0, 0.0, 10.0));
                assert_eq!(*radius, 1.0);
                assert_eq!(material.specular_intensity, 0.0);
            }
            other => panic!("expected sphere, got {:?}", other),
        }

        // Missing material falls back to the default
        assert_eq!(description.surfaces[1].material(), &Material::default());
    }

    #[test]
    fn test_unknown_surface_type_is_an_error() {
        let json = r#"{"surfaces": [{"type": "torus", "center": [0, 0, 0]}]}"#;
        assert!(matches!(
            SceneDescription::from_json_str(json),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_scene() {
        let description = SceneDescription::from_json_str(SCENE).unwrap();
        let json = description.to_json_string().unwrap();
        assert_eq!(SceneDescription::from_json_str(&json).unwrap(), description);
    }

    #[test]
    fn test_load_scene_names_from_file_stem() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = std::env::temp_dir().join(format!("glint_load_{}.json", std::process::id()));
        fs::write(&path, SCENE).unwrap();

        let description = load_scene(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(description.name.starts_with("glint_load_"));
        assert_eq!(description.surfaces.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_scene("/nonexistent/glint/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}

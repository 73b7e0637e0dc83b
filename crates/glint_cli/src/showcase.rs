//! Built-in scene rendered when no scene file is given.

use glint_core::{AmbientLight, Material, PointLight, SceneDescription, SurfaceDescription};
use glint_renderer::{Color, DVec3};

/// Floor, back wall, a matte, a mirror and a glass sphere, two lights.
pub fn showcase() -> SceneDescription {
    let floor = Material::diffuse(Color::new(0.8, 0.8, 0.7)).with_reflectivity(0.15);
    let wall = Material::diffuse(Color::new(0.3, 0.5, 0.3));
    let matte = Material::diffuse(Color::new(0.9, 0.2, 0.2)).with_specular(Color::ONE, 32.0, 0.6);

    SceneDescription {
        name: "showcase".to_string(),
        ambient: AmbientLight::new(Color::new(0.6, 0.8, 1.0), 0.2),
        lights: vec![
            PointLight::white(DVec3::new(-4.0, 6.0, 4.0), 0.8),
            PointLight::new(DVec3::new(5.0, 3.0, 6.0), Color::new(1.0, 0.9, 0.7), 0.5),
        ],
        surfaces: vec![
            SurfaceDescription::Plane {
                origin: DVec3::new(0.0, -1.0, 0.0),
                normal: DVec3::Y,
                material: floor,
            },
            SurfaceDescription::Plane {
                origin: DVec3::new(0.0, 0.0, 20.0),
                normal: -DVec3::Z,
                material: wall,
            },
            SurfaceDescription::Sphere {
                center: DVec3::new(-2.2, 0.0, 10.0),
                radius: 1.0,
                material: matte,
            },
            SurfaceDescription::Sphere {
                center: DVec3::new(0.4, 0.5, 12.0),
                radius: 1.5,
                material: Material::mirror(Color::new(0.9, 0.9, 1.0), 0.85),
            },
            SurfaceDescription::Sphere {
                center: DVec3::new(1.6, -0.2, 8.0),
                radius: 0.8,
                material: Material::glass(1.5),
            },
        ],
    }
}

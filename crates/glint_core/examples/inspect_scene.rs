//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/mirrors.json

use std::env;

use glint_core::{load_scene, SurfaceDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- scenes/single_sphere.json");
        println!("  cargo run --example inspect_scene -- scenes/mirrors.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Surfaces: {}", scene.surfaces.len());
            println!("Point lights: {}", scene.lights.len());
            println!(
                "Ambient: ({:.2}, {:.2}, {:.2}) x {:.2}",
                scene.ambient.color.x,
                scene.ambient.color.y,
                scene.ambient.color.z,
                scene.ambient.intensity
            );

            println!("\n--- Surfaces ---");
            for (i, surface) in scene.surfaces.iter().enumerate() {
                match surface {
                    SurfaceDescription::Sphere { center, radius, .. } => println!(
                        "  [{}] sphere at ({:.2}, {:.2}, {:.2}), radius {:.2}",
                        i, center.x, center.y, center.z, radius
                    ),
                    SurfaceDescription::Plane { origin, normal, .. } => println!(
                        "  [{}] plane through ({:.2}, {:.2}, {:.2}), normal ({:.2}, {:.2}, {:.2})",
                        i, origin.x, origin.y, origin.z, normal.x, normal.y, normal.z
                    ),
                }

                let material = surface.material();
                println!(
                    "       reflectivity {:.2}, transparency {:.2}, ior {:.2}",
                    material.reflectivity, material.transparency, material.refraction_index
                );
                if let Err(e) = material.validate() {
                    println!("       invalid material: {}", e);
                }
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] at ({:.2}, {:.2}, {:.2}), intensity {:.2}",
                    i, light.position.x, light.position.y, light.position.z, light.intensity
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}

//! Glint Core - Renderer-agnostic scene data for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Shading inputs**: `Material`, `PointLight`, `AmbientLight`
//! - **Scene descriptions**: serde types for JSON scene files
//! - **Errors**: `SceneError` for invalid scene values, `LoadError` for files
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let description = load_scene("scenes/mirrors.json")?;
//! println!("Loaded {} surfaces, {} lights",
//!     description.surfaces.len(),
//!     description.lights.len());
//! ```

pub mod description;
pub mod error;
pub mod light;
pub mod material;

// Re-export commonly used types
pub use description::{load_scene, LoadError, LoadResult, SceneDescription, SurfaceDescription};
pub use error::SceneError;
pub use light::{AmbientLight, PointLight};
pub use material::Material;

// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod interval;
pub mod optics;
mod ray;

pub use color::{color_to_rgb8, linear_to_gamma, Color};
pub use interval::Interval;
pub use ray::Ray;

//! Render pass driving the tracer over every pixel.
//!
//! Implements:
//! - Raster-order, single-threaded traversal
//! - Per-pixel delivery to a frame sink
//! - 8-bit quantization with optional gamma correction

use crate::tracer::{trace_ray, DEPTH_LIMIT, MAX_DEPTH};
use crate::{Camera, Color, Scene};
use glint_math::color_to_rgb8;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth; rays at this depth return the background.
    /// Values above [`DEPTH_LIMIT`] are capped.
    pub max_depth: u32,
    /// Apply gamma 2.0 when quantizing to 8-bit
    pub gamma_correct: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            gamma_correct: false,
        }
    }
}

impl RenderConfig {
    /// Depth at which tracing stops.
    #[inline]
    pub fn depth_bound(&self) -> u32 {
        self.max_depth.min(DEPTH_LIMIT)
    }
}

/// Receives the final color of every pixel.
pub trait FrameSink {
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);
}

impl<F: FnMut(u32, u32, Color)> FrameSink for F {
    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        self(x, y, color)
    }
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb8(&self, gamma_correct: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color, gamma_correct));
        }
        bytes
    }

    /// Convert to an `image` crate buffer for saving.
    pub fn to_rgb_image(&self, gamma_correct: bool) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb8(self.get(x, y), gamma_correct))
        })
    }
}

impl FrameSink for ImageBuffer {
    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}

/// Trace the primary ray of a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.ray_for_pixel(x, y);
    trace_ray(&ray, scene, 0, config)
}

/// Render the whole image into `sink`.
///
/// Every pixel is delivered exactly once, rows top to bottom and columns
/// left to right.
pub fn render<S: FrameSink + ?Sized>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut S,
) {
    log::info!(
        "Rendering {}x{} (fov {}, max depth {}) with {} surfaces and {} lights",
        camera.width(),
        camera.height(),
        camera.fov(),
        config.depth_bound(),
        scene.surfaces().len(),
        scene.lights().len()
    );

    if config.max_depth > DEPTH_LIMIT {
        log::warn!(
            "Max depth {} exceeds the limit, tracing stops at depth {}",
            config.max_depth,
            DEPTH_LIMIT
        );
    }

    for y in 0..camera.height() {
        for x in 0..camera.width() {
            let color = render_pixel(camera, scene, x, y, config);
            sink.put_pixel(x, y, color);
        }
        log::debug!("Row {}/{} done", y + 1, camera.height());
    }

    log::info!("Render pass complete");
}

/// Render the scene to an image buffer.
pub fn render_to_image(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.width(), camera.height());
    render(camera, scene, config, &mut image);
    image
}

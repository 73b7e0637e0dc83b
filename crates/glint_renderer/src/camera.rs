//! Pinhole camera for primary ray generation.

use glint_math::{DVec3, Ray};

/// Accepted horizontal field of view, in degrees.
pub const FOV_RANGE: (f64, f64) = (1.0, 179.0);

/// Pinhole camera at the world origin looking down +Z.
///
/// The image plane sits at distance 1. Pixel sizes are derived from the
/// horizontal field of view and the aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    image_width: u32,
    image_height: u32,

    /// Horizontal field of view in degrees
    fov: f64,

    // Cached computed values (refreshed by every builder call)
    pixel_width: f64,
    pixel_height: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 640,
            image_height: 640,
            fov: 60.0,
            pixel_width: 0.0,
            pixel_height: 0.0,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width.max(1);
        self.image_height = height.max(1);
        self.initialize();
        self
    }

    /// Set the horizontal field of view in degrees.
    ///
    /// Values outside [`FOV_RANGE`] are clamped; non-finite values are ignored.
    pub fn with_fov(mut self, fov: f64) -> Self {
        let (min, max) = FOV_RANGE;
        if !fov.is_finite() {
            log::warn!("Ignoring non-finite field of view {}, keeping {}", fov, self.fov);
            return self;
        }
        if fov < min || fov > max {
            let clamped = fov.clamp(min, max);
            log::warn!("Field of view {} out of range, using {}", fov, clamped);
            self.fov = clamped;
        } else {
            self.fov = fov;
        }
        self.initialize();
        self
    }

    pub fn width(&self) -> u32 {
        self.image_width
    }

    pub fn height(&self) -> u32 {
        self.image_height
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Physical size of one pixel on the image plane.
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.pixel_width, self.pixel_height)
    }

    fn initialize(&mut self) {
        let aspect_ratio = self.image_height as f64 / self.image_width as f64;

        let physical_width = 2.0 * (self.fov.to_radians() / 2.0).tan();
        let physical_height = aspect_ratio * physical_width;

        self.pixel_width = physical_width / self.image_width as f64;
        self.pixel_height = physical_height / self.image_height as f64;
    }

    /// Primary ray for a pixel measured from the image center.
    ///
    /// `x` grows to the right and `y` grows upward.
    pub fn primary_ray(&self, x: f64, y: f64) -> Ray {
        let direction = DVec3::new(
            (x + 0.5) * self.pixel_width,
            (y + 0.5) * self.pixel_height,
            1.0,
        );
        Ray::new(DVec3::ZERO, direction)
    }

    /// Primary ray for raster pixel (col, row), row 0 at the top.
    pub fn ray_for_pixel(&self, col: u32, row: u32) -> Ray {
        let x = col as f64 - self.image_width as f64 / 2.0;
        let y = self.image_height as f64 / 2.0 - row as f64 - 1.0;
        self.primary_ray(x, y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size() {
        let camera = Camera::new().with_resolution(200, 100).with_fov(90.0);
        let (pixel_width, pixel_height) = camera.pixel_size();

        // tan(45) = 1: the image plane is 2 units wide and 1 unit tall
        assert!((pixel_width - 0.01).abs() < 1e-12);
        assert!((pixel_height - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_center_ray_points_down_z() {
        let camera = Camera::new().with_resolution(640, 640).with_fov(60.0);

        let ray = camera.primary_ray(-0.5, -0.5);
        assert_eq!(ray.origin(), DVec3::ZERO);
        assert_eq!(ray.direction(), DVec3::Z);
    }

    #[test]
    fn test_raster_mapping_orientation() {
        let camera = Camera::new().with_resolution(4, 4).with_fov(90.0);

        // Top-left pixel looks up and to the left
        let top_left = camera.ray_for_pixel(0, 0).direction();
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        // Bottom-right pixel looks down and to the right
        let bottom_right = camera.ray_for_pixel(3, 3).direction();
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);

        // Opposite corners are mirror images
        assert!((top_left.x + bottom_right.x).abs() < 1e-12);
        assert!((top_left.y + bottom_right.y).abs() < 1e-12);
    }

    #[test]
    fn test_fov_out_of_range_is_clamped() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(Camera::new().with_fov(0.0).fov(), FOV_RANGE.0);
        assert_eq!(Camera::new().with_fov(-30.0).fov(), FOV_RANGE.0);
        assert_eq!(Camera::new().with_fov(180.0).fov(), FOV_RANGE.1);
        assert_eq!(Camera::new().with_fov(f64::NAN).fov(), 60.0);

        // Clamped camera still spreads pixels and keeps the image upright
        let camera = Camera::new().with_resolution(4, 4).with_fov(-10.0);
        let top_left = camera.ray_for_pixel(0, 0).direction();
        let bottom_right = camera.ray_for_pixel(3, 3).direction();
        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    }

    #[test]
    fn test_resolution_getters() {
        let camera = Camera::new().with_resolution(0, 240);
        assert_eq!((camera.width(), camera.height()), (1, 240));
    }

    #[test]
    fn test_ray_directions_are_unit() {
        let camera = Camera::new().with_resolution(16, 9).with_fov(75.0);
        for row in 0..9 {
            for col in 0..16 {
                let ray = camera.ray_for_pixel(col, row);
                assert!((ray.direction().length() - 1.0).abs() < 1e-12);
                assert!(ray.direction().z > 0.0);
            }
        }
    }
}

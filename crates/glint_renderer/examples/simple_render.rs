//! Simple Whitted example.
//!
//! Renders one diffuse sphere under a point light and streams the pixels
//! straight into a PPM file through a custom frame sink.

use glint_renderer::{
    render, AmbientLight, Camera, Color, DVec3, FrameSink, Material, PointLight, RenderConfig,
    Scene, Sphere,
};
use glint_math::color_to_rgb8;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Writes pixels as they arrive; relies on raster-order delivery.
struct PpmSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> FrameSink for PpmSink<W> {
    fn put_pixel(&mut self, _x: u32, _y: u32, color: Color) {
        if self.error.is_some() {
            return;
        }
        let [r, g, b] = color_to_rgb8(color, false);
        if let Err(e) = writeln!(self.out, "{} {} {}", r, g, b) {
            self.error = Some(e);
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = Scene::builder()
        .with_surface(
            Sphere::new(DVec3::new(0.0, 0.0, 10.0), 1.0, Material::diffuse(Color::ONE))
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        )
        .with_light(PointLight::white(DVec3::new(0.0, 4.0, 7.0), 1.0))
        .with_ambient(AmbientLight::new(Color::new(0.6, 0.8, 1.0), 0.1))
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let camera = Camera::new().with_resolution(320, 320).with_fov(30.0);

    let filename = "output.ppm";
    let mut out = BufWriter::new(File::create(filename)?);
    writeln!(out, "P3\n{} {}\n255", camera.width(), camera.height())?;

    let start = std::time::Instant::now();
    let mut sink = PpmSink { out, error: None };
    render(&camera, &scene, &RenderConfig::default(), &mut sink);

    if let Some(e) = sink.error {
        return Err(e);
    }
    sink.out.flush()?;

    println!("Rendered in {:?}, saved to {}", start.elapsed(), filename);
    Ok(())
}

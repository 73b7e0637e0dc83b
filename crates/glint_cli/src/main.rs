use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::load_scene;
use glint_renderer::{
    render_to_image, Camera, RenderConfig, Scene, DEPTH_LIMIT, FOV_RANGE, MAX_DEPTH,
};

mod showcase;

/// Render a scene of spheres and planes with a recursive Whitted ray tracer.
#[derive(Parser, Debug)]
#[command(name = "glint", version, long_about = None)]
struct Cli {
    /// Scene description (JSON). Renders the built-in showcase when omitted
    scene: Option<PathBuf>,

    /// Output image path (PNG)
    #[arg(short, long, default_value = "glint.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 640)]
    height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0, value_parser = parse_fov)]
    fov: f64,

    /// Maximum reflection/refraction depth
    #[arg(
        long,
        default_value_t = MAX_DEPTH,
        value_parser = clap::value_parser!(u32).range(0..=DEPTH_LIMIT as i64)
    )]
    max_depth: u32,

    /// Apply gamma 2.0 before writing the image
    #[arg(long)]
    gamma: bool,

    /// Print the scene as JSON and exit without rendering
    #[arg(long)]
    dump_scene: bool,
}

fn parse_fov(s: &str) -> std::result::Result<f64, String> {
    let fov: f64 = s.parse().map_err(|e| format!("{e}"))?;
    let (min, max) = FOV_RANGE;
    if (min..=max).contains(&fov) {
        Ok(fov)
    } else {
        Err(format!("field of view must be between {min} and {max} degrees"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let description = match &cli.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the built-in showcase");
            showcase::showcase()
        }
    };

    if cli.dump_scene {
        println!("{}", description.to_json_string()?);
        return Ok(());
    }

    let scene = Scene::from_description(&description)
        .with_context(|| format!("Invalid scene '{}'", description.name))?;

    let camera = Camera::new()
        .with_resolution(cli.width, cli.height)
        .with_fov(cli.fov);
    let config = RenderConfig {
        max_depth: cli.max_depth,
        gamma_correct: cli.gamma,
    };

    let start = Instant::now();
    let image = render_to_image(&camera, &scene, &config);
    log::info!("Rendered in {:?}", start.elapsed());

    image
        .to_rgb_image(config.gamma_correct)
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    log::info!("Saved to {}", cli.output.display());

    Ok(())
}

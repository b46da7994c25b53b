use std::sync::Arc;

use anyhow::{Context, Result};
use ember_core::{EnvironmentMap, ToneMap};
use ember_renderer::{render, Background, FrameContext, RenderConfig, Scene};

const ENVMAP_PATH: &str = "envmap.jpg";
const OUTPUT_PATH: &str = "raytracer.ppm";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Ember ray tracer");

    let envmap = EnvironmentMap::load(ENVMAP_PATH)
        .with_context(|| format!("failed to load '{}'", ENVMAP_PATH))?;
    log::info!(
        "Loaded {} ({}x{}, {:.1} MB)",
        ENVMAP_PATH,
        envmap.width,
        envmap.height,
        envmap.size_bytes() as f64 / (1024.0 * 1024.0)
    );

    let background = Background::Environment(Arc::new(envmap));
    let config = RenderConfig::default().with_background(background);
    let scene = Scene::showcase();
    let image = render(&scene, &config, &FrameContext::new(1));

    image
        .save_ppm(OUTPUT_PATH, ToneMap::NormalizeMax)
        .with_context(|| format!("failed to write '{}'", OUTPUT_PATH))?;
    log::info!("Wrote {}", OUTPUT_PATH);

    Ok(())
}

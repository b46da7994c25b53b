use anyhow::{Context, Result};
use ember_core::ToneMap;
use ember_renderer::{render_fireball, FireballConfig};

const OUTPUT_PATH: &str = "out.ppm";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Ember fireball");

    let image = render_fireball(&FireballConfig::default());
    image
        .save_ppm(OUTPUT_PATH, ToneMap::Clamp)
        .with_context(|| format!("failed to write '{}'", OUTPUT_PATH))?;
    log::info!("Wrote {}", OUTPUT_PATH);

    Ok(())
}

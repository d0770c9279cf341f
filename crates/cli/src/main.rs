//! okapi scene runner binary.
//!
//! ```bash
//! cargo run -p okapi-cli -- scenes/arena.ron --frames 120
//! OKAPI_OUTPUT=json OKAPI_SCENE=scenes/arena.ron cargo run -p okapi-cli
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use okapi_cli::{CliArgs, CliConfig, logging, output};
use okapi_runtime::Scene;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment, then command line
    let config = CliConfig::from_env().with_args(CliArgs::parse());

    // 2. Setup logging
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    // 3. Resolve inputs
    let scene_path = config
        .scene
        .clone()
        .context("no scene given: pass a path or set OKAPI_SCENE")?;
    let simulation = config.simulation()?;

    tracing::info!("Loading scene {}", scene_path.display());
    tracing::debug!(
        frames = simulation.frames,
        frame_seconds = simulation.frame_seconds,
        "simulation config"
    );

    // 4. Build and run
    let mut scene = Scene::load(&scene_path)?;
    let summary = scene.run(&simulation);

    println!("{}", output::render(config.output, &summary, &scene.snapshot())?);
    Ok(())
}

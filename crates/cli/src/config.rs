//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use clap::Parser;
use okapi_content::{ConfigLoader, LoadResult, SimulationConfig};

/// Output format for the final variable listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// One `name = value` line per variable.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Configuration required to run a scene from the command line.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub scene: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub frames: Option<u32>,
    pub frame_seconds: Option<f32>,
    pub output: OutputFormat,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OKAPI_SCENE` - Scene definition (RON) to run
    /// - `OKAPI_CONFIG` - Simulation config (TOML) (default: built-in defaults)
    /// - `OKAPI_FRAMES` - Frame count, overrides the config file
    /// - `OKAPI_FRAME_SECONDS` - Fixed frame time, overrides the config file
    /// - `OKAPI_OUTPUT` - `text` or `json` (default: text)
    /// - `OKAPI_LOG_DIR` - Write logs to `<dir>/okapi.log` instead of stderr
    pub fn from_env() -> Self {
        Self {
            scene: env::var_os("OKAPI_SCENE").map(PathBuf::from),
            config_file: env::var_os("OKAPI_CONFIG").map(PathBuf::from),
            frames: read_env::<u32>("OKAPI_FRAMES"),
            frame_seconds: read_env::<f32>("OKAPI_FRAME_SECONDS").map(|s| s.max(0.0)),
            output: read_env::<OutputFormat>("OKAPI_OUTPUT").unwrap_or_default(),
            log_dir: env::var_os("OKAPI_LOG_DIR").map(PathBuf::from),
        }
    }

    /// Resolves the simulation config: file (or defaults), then env overrides.
    pub fn simulation(&self) -> LoadResult<SimulationConfig> {
        let mut simulation = match &self.config_file {
            Some(path) => ConfigLoader::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(frames) = self.frames {
            simulation.frames = frames;
        }
        if let Some(frame_seconds) = self.frame_seconds {
            simulation.frame_seconds = frame_seconds;
        }

        Ok(simulation)
    }
}

/// Run an okapi scene for a number of frames and print its variables.
#[derive(Parser, Debug, Default)]
#[command(name = "okapi")]
#[command(about = "Run an okapi scene and print its variables", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// Scene definition (RON), overrides OKAPI_SCENE
    pub scene: Option<PathBuf>,

    /// Simulation config (TOML), overrides OKAPI_CONFIG
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of frames to run, overrides OKAPI_FRAMES
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Fixed frame time in seconds, overrides OKAPI_FRAME_SECONDS
    #[arg(long)]
    pub frame_seconds: Option<f32>,

    /// Output format (text or json), overrides OKAPI_OUTPUT
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Write logs to <dir>/okapi.log, overrides OKAPI_LOG_DIR
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Applies command line arguments on top of this configuration.
    pub fn with_args(mut self, args: CliArgs) -> Self {
        if args.scene.is_some() {
            self.scene = args.scene;
        }
        if args.config.is_some() {
            self.config_file = args.config;
        }
        if args.frames.is_some() {
            self.frames = args.frames;
        }
        if let Some(frame_seconds) = args.frame_seconds {
            self.frame_seconds = Some(frame_seconds.max(0.0));
        }
        if let Some(output) = args.output {
            self.output = output;
        }
        if args.log_dir.is_some() {
            self.log_dir = args.log_dir;
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! Command-line host for okapi scenes.
//!
//! Loads a scene definition, steps it on a fixed clock for the configured
//! number of frames and prints every variable. Configuration comes from the
//! environment (optionally a `.env` file), an optional TOML file and command
//! line arguments, which take precedence.

mod config;
pub mod logging;
pub mod output;

pub use config::{CliArgs, CliConfig, OutputFormat};

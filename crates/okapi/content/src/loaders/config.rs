//! Simulation configuration loader.

use std::path::Path;

use crate::definitions::SimulationConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for simulation configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<SimulationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SimulationConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("frames = 10\n").unwrap();
        assert_eq!(config.frames, 10);
        assert_eq!(config.frame_seconds, SimulationConfig::DEFAULT_FRAME_SECONDS);
        assert!(config.validate_on_load);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simulation.toml");
        std::fs::write(&path, "frames = 3\nframe_seconds = 0.5\nvalidate_on_load = false\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(
            config,
            SimulationConfig {
                frames: 3,
                frame_seconds: 0.5,
                validate_on_load: false,
            }
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("frames = \"many\"\n").is_err());
    }
}

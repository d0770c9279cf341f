//! Scene definition loader.

use std::path::Path;

use crate::definitions::SceneDefinition;
use crate::loaders::{LoadResult, read_file};

/// Loader for scene definitions from RON files.
pub struct SceneLoader;

impl SceneLoader {
    /// Load a scene definition from a RON file.
    ///
    /// Only the file format is checked here; name resolution happens when the
    /// runtime builds the scene.
    pub fn load(path: &Path) -> LoadResult<SceneDefinition> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load scene {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<SceneDefinition> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scene RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use okapi_core::{ChangeOperation, Limits, ValueKind};

    use super::*;

    const SCENE: &str = r#"
(
    variables: [
        (name: "score", config: (kind: Integer, initial: 0.0, default: 0.0, limits: None)),
        (name: "health", config: (kind: Float, initial: 10.0, default: 10.0, limits: Some((min: 0.0, max: 10.0)))),
    ],
    behaviors: [
        (
            name: "player",
            instances: [(name: "ammo", config: (kind: Integer, initial: 5.0, default: 5.0))],
            actions: [
                (asset: Some("health"), operation: Change(delta: -1.5, scale_by_elapsed: true)),
                (enabled: false, instance: Some("ammo"), operation: Set(value: 3.0)),
                (asset: Some("score"), operation: Reset),
            ],
        ),
    ],
)
"#;

    #[test]
    fn parses_full_scene() {
        let scene = SceneLoader::parse(SCENE).unwrap();

        assert_eq!(scene.variables.len(), 2);
        assert_eq!(scene.variables[0].config.kind, ValueKind::Integer);
        assert_eq!(scene.variables[1].config.limits, Some(Limits::new(0.0, 10.0)));

        let player = &scene.behaviors[0];
        assert_eq!(player.instances[0].config.limits, None);
        assert_eq!(player.actions.len(), 3);
        assert!(player.actions[0].enabled);
        assert_eq!(
            player.actions[0].operation,
            ChangeOperation::Change {
                delta: -1.5,
                scale_by_elapsed: true
            }
        );
        assert!(!player.actions[1].enabled);
        assert_eq!(player.actions[1].instance.as_deref(), Some("ammo"));
        assert_eq!(player.actions[2].operation, ChangeOperation::Reset);
    }

    #[test]
    fn empty_scene_is_valid() {
        let scene = SceneLoader::parse("()").unwrap();
        assert!(scene.variables.is_empty());
        assert!(scene.behaviors.is_empty());
    }

    #[test]
    fn reports_file_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(variables: [").unwrap();

        let error = SceneLoader::load(&path).unwrap_err().to_string();
        assert!(error.contains("broken.ron"), "unexpected error: {error}");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(SceneLoader::load(Path::new("/nonexistent/scene.ron")).is_err());
    }
}

//! Errors raised while building a scene.
//!
//! Stepping a built scene never fails; everything here is detected up front.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SceneError>;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to load scene: {0:#}")]
    Load(anyhow::Error),

    #[error("variable '{name}' is defined more than once")]
    DuplicateVariable { name: String },

    #[error("behavior '{name}' is defined more than once")]
    DuplicateBehavior { name: String },

    #[error("behavior '{behavior}' defines instance '{name}' more than once")]
    DuplicateInstance { behavior: String, name: String },

    #[error("action #{action} of behavior '{behavior}' refers to unknown variable '{name}'")]
    UnknownVariable {
        behavior: String,
        action: usize,
        name: String,
    },

    #[error("action #{action} of behavior '{behavior}' refers to unknown instance '{name}'")]
    UnknownInstance {
        behavior: String,
        action: usize,
        name: String,
    },
}

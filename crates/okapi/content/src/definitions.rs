//! Serializable scene layout.

use okapi_core::{ChangeOperation, VariableConfig};
use serde::{Deserialize, Serialize};

/// A complete scene: shared variable assets plus the behaviors using them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDefinition {
    #[serde(default)]
    pub variables: Vec<VariableDefinition>,
    #[serde(default)]
    pub behaviors: Vec<BehaviorDefinition>,
}

/// A named variable: a scene-level asset or a behavior-level instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    pub name: String,
    #[serde(default)]
    pub config: VariableConfig,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>, config: VariableConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// A host object owning private variable instances and a list of actions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorDefinition {
    pub name: String,
    #[serde(default)]
    pub instances: Vec<VariableDefinition>,
    #[serde(default)]
    pub actions: Vec<ActionDefinition>,
}

/// A change-value action referring to its target(s) by name.
///
/// `asset` names a scene variable; `instance` names one of the owning
/// behavior's instances. Setting both is allowed and resolved in favour of
/// the instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionDefinition {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
    pub operation: ChangeOperation,
}

fn enabled_by_default() -> bool {
    true
}

/// How the host steps a scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of frames to run.
    pub frames: u32,
    /// Elapsed time reported for every frame, in seconds.
    pub frame_seconds: f32,
    /// Report configuration diagnostics when a scene is built.
    pub validate_on_load: bool,
}

impl SimulationConfig {
    pub const DEFAULT_FRAMES: u32 = 60;
    pub const DEFAULT_FRAME_SECONDS: f32 = 1.0 / 60.0;
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: Self::DEFAULT_FRAMES,
            frame_seconds: Self::DEFAULT_FRAME_SECONDS,
            validate_on_load: true,
        }
    }
}

//! Data-driven scene definitions and loaders.
//!
//! This crate describes what a scene contains, by name, and loads it from data
//! files:
//! - Scene definitions (variable assets, behaviors, their instances and
//!   actions) via RON
//! - Simulation configuration (frame count, frame time) via TOML
//!
//! Definitions refer to variables by name. Resolving names into shared
//! handles is the runtime's job.

pub mod definitions;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use definitions::{
    ActionDefinition, BehaviorDefinition, SceneDefinition, SimulationConfig, VariableDefinition,
};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SceneLoader};

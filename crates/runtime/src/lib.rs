//! Host frame loop for okapi scenes.
//!
//! This crate plays the role of the game engine around `okapi-core`: it
//! builds a [`Scene`] from a data definition, resolves variable names into
//! shared handles, activates behaviors, and steps their actions once per frame
//! with the elapsed time supplied by a [`FrameClock`].
//!
//! Modules are organized by responsibility:
//! - [`scene`] owns variable assets and behaviors, and runs the frame loop
//! - [`behavior`] hosts instances and gated actions for one object
//! - [`clock`] supplies per-frame elapsed time
//! - [`snapshot`] exposes read-only views of every variable for display
//!
//! Configuration diagnostics and mutations are reported through `tracing`.
pub mod behavior;
pub mod clock;
pub mod error;
pub mod scene;
pub mod snapshot;

pub use behavior::{Behavior, Diagnostic};
pub use clock::{FrameClock, FrameTime};
pub use error::{Result, SceneError};
pub use scene::{RunSummary, Scene};
pub use snapshot::{VariableScope, VariableSnapshot};

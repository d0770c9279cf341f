//! Actions that mutate variables.
//!
//! # Module Structure
//!
//! - `target`: Target binding and the explicit asset/instance tie-break
//! - `change_value`: [`ChangeValueAction`] (Set / Change / Reset)
//!
//! Actions are stateless between invocations apart from their configuration.
//! A host calls [`Action::execute`] once per trigger with the elapsed frame
//! time; preconditions are evaluated by the host and passed to
//! [`Action::execute_if`].

mod change_value;
mod target;

pub use change_value::{ChangeOperation, ChangeValueAction, ExecuteOutcome};
pub use target::{Target, TargetBinding};

use crate::condition::Precondition;
use crate::error::ConfigurationError;

/// Defines how an action reports its configuration and mutates its target.
pub trait Action: Send + Sync {
    /// Disabled actions never mutate anything.
    fn is_enabled(&self) -> bool;

    /// Advisory configuration diagnostics. Never blocks execution.
    fn validate(&self) -> Vec<ConfigurationError>;

    /// Runs the action once. `elapsed_seconds` is the host's frame time.
    fn execute(&self, elapsed_seconds: f32) -> ExecuteOutcome;

    /// One-line human-readable summary of what the action does.
    fn describe(&self) -> String;

    /// Runs the action only if `gate` is satisfied.
    fn execute_if(&self, gate: &dyn Precondition, elapsed_seconds: f32) -> ExecuteOutcome {
        if !self.is_enabled() || !gate.is_satisfied() {
            return ExecuteOutcome::Skipped;
        }
        self.execute(elapsed_seconds)
    }
}

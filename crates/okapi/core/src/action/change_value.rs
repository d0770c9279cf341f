use super::{Action, Target, TargetBinding};
use crate::error::ConfigurationError;
use crate::value::{Mutation, ValueChange};
use crate::variable::ValueTarget;

/// What a [`ChangeValueAction`] does to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeOperation {
    /// Replace the value with `value`.
    Set { value: f32 },

    /// Add `delta`, optionally multiplied by the elapsed frame time so the
    /// delta reads as "per second".
    Change {
        delta: f32,
        #[cfg_attr(feature = "serde", serde(default))]
        scale_by_elapsed: bool,
    },

    /// Restore the default value.
    Reset,
}

impl ChangeOperation {
    /// Translates the operation into a value mutation for this frame.
    pub fn mutation(&self, elapsed_seconds: f32) -> Mutation {
        match *self {
            Self::Set { value } => Mutation::Set(value),
            Self::Change {
                delta,
                scale_by_elapsed,
            } => {
                let effective = if scale_by_elapsed {
                    delta * elapsed_seconds
                } else {
                    delta
                };
                Mutation::Change(effective)
            }
            Self::Reset => Mutation::Reset,
        }
    }
}

/// Result of one [`Action::execute`] call. Execution itself cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecuteOutcome {
    /// Action disabled or precondition not satisfied.
    Skipped,

    /// No variable bound; nothing happened.
    NoTarget,

    /// The target was mutated.
    Applied { variable: String, change: ValueChange },
}

impl ExecuteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Sets, changes or resets a variable asset or variable instance.
#[derive(Clone, Debug)]
pub struct ChangeValueAction {
    binding: TargetBinding,
    operation: ChangeOperation,
    enabled: bool,
}

impl ChangeValueAction {
    pub fn new(binding: impl Into<TargetBinding>, operation: ChangeOperation) -> Self {
        Self {
            binding: binding.into(),
            operation,
            enabled: true,
        }
    }

    pub fn set(binding: impl Into<TargetBinding>, value: f32) -> Self {
        Self::new(binding, ChangeOperation::Set { value })
    }

    pub fn change(binding: impl Into<TargetBinding>, delta: f32) -> Self {
        Self::new(
            binding,
            ChangeOperation::Change {
                delta,
                scale_by_elapsed: false,
            },
        )
    }

    /// Change scaled by elapsed time: `delta` is applied per second.
    pub fn change_per_second(binding: impl Into<TargetBinding>, delta: f32) -> Self {
        Self::new(
            binding,
            ChangeOperation::Change {
                delta,
                scale_by_elapsed: true,
            },
        )
    }

    pub fn reset(binding: impl Into<TargetBinding>) -> Self {
        Self::new(binding, ChangeOperation::Reset)
    }

    /// Sets the enabled flag (builder pattern).
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn binding(&self) -> &TargetBinding {
        &self.binding
    }

    pub fn operation(&self) -> &ChangeOperation {
        &self.operation
    }

    /// The variable this action mutates, after the tie-break.
    pub fn target(&self) -> Target<'_> {
        self.binding.resolve()
    }
}

impl Action for ChangeValueAction {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn validate(&self) -> Vec<ConfigurationError> {
        let mut errors = Vec::new();

        match (&self.binding.asset, &self.binding.instance) {
            (None, None) => errors.push(ConfigurationError::NoTarget),
            (Some(asset), Some(instance)) => errors.push(ConfigurationError::AmbiguousTarget {
                asset: asset.name(),
                instance: instance.name(),
            }),
            _ => {}
        }

        if matches!(self.operation, ChangeOperation::Change { delta, .. } if delta == 0.0) {
            errors.push(ConfigurationError::ZeroDelta);
        }

        if let Some(target) = self.target().as_value_target() {
            match target.limits() {
                Some(limits) if !limits.admits(target.kind()) => {
                    errors.push(ConfigurationError::InvalidLimits {
                        variable: target.name(),
                        min: limits.min,
                        max: limits.max,
                    });
                }
                _ => {}
            }
        }

        errors
    }

    fn execute(&self, elapsed_seconds: f32) -> ExecuteOutcome {
        if !self.enabled {
            return ExecuteOutcome::Skipped;
        }

        let Some(target) = self.target().as_value_target() else {
            return ExecuteOutcome::NoTarget;
        };

        let change = target.apply(self.operation.mutation(elapsed_seconds));
        ExecuteOutcome::Applied {
            variable: target.name(),
            change,
        }
    }

    fn describe(&self) -> String {
        let name = self
            .target()
            .as_value_target()
            .map_or_else(|| "<no target>".to_owned(), |target| target.name());

        match self.operation {
            ChangeOperation::Set { value } => format!("Set {name} to {value}"),
            ChangeOperation::Change {
                delta,
                scale_by_elapsed: true,
            } => format!("Change {name} by {delta} per second"),
            ChangeOperation::Change { delta, .. } => format!("Change {name} by {delta}"),
            ChangeOperation::Reset => format!("Reset {name}"),
        }
    }
}

//! Host objects owning variable instances and gated actions.

use std::fmt;

use okapi_core::{
    Action, ConfigurationError, ExecuteOutcome, InstanceHandle, PreconditionSet, ValueTarget,
    VariableConfig,
};

use crate::error::{Result, SceneError};

/// Configuration problem found in one action of one behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub behavior: String,
    pub action: usize,
    pub description: String,
    pub error: ConfigurationError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}#{} ({}): {}",
            self.error.severity().as_str(),
            self.behavior,
            self.action,
            self.description,
            self.error
        )
    }
}

struct ActionSlot {
    action: Box<dyn Action>,
    gate: PreconditionSet,
}

/// A game object: private variable instances plus the actions it triggers.
///
/// Every action has its own precondition gate; an empty gate always opens.
pub struct Behavior {
    name: String,
    instances: Vec<InstanceHandle>,
    actions: Vec<ActionSlot>,
    active: bool,
}

impl Behavior {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instances: Vec::new(),
            actions: Vec::new(),
            active: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declares a private instance. Names must be unique within the behavior.
    pub fn add_instance(
        &mut self,
        name: impl Into<String>,
        config: VariableConfig,
    ) -> Result<InstanceHandle> {
        let name = name.into();
        if self.instance(&name).is_some() {
            return Err(SceneError::DuplicateInstance {
                behavior: self.name.clone(),
                name,
            });
        }

        let handle = InstanceHandle::create(name, config);
        self.instances.push(handle.clone());
        Ok(handle)
    }

    pub fn instance(&self, name: &str) -> Option<&InstanceHandle> {
        self.instances
            .iter()
            .find(|instance| instance.with(|i| i.name() == name))
    }

    pub fn instances(&self) -> &[InstanceHandle] {
        &self.instances
    }

    /// Appends an action that runs every frame.
    pub fn add_action(&mut self, action: impl Action + 'static) {
        self.add_gated_action(action, PreconditionSet::new());
    }

    /// Appends an action that runs only while `gate` is satisfied.
    pub fn add_gated_action(&mut self, action: impl Action + 'static, gate: PreconditionSet) {
        self.actions.push(ActionSlot {
            action: Box::new(action),
            gate,
        });
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activation: materializes every instance from its configuration.
    pub fn activate(&mut self) {
        for instance in &self.instances {
            instance.activate();
        }
        self.active = true;
        tracing::debug!(
            behavior = %self.name,
            instances = self.instances.len(),
            "behavior activated"
        );
    }

    /// Collects configuration diagnostics from every action.
    pub fn validate(&self) -> Vec<Diagnostic> {
        self.actions
            .iter()
            .enumerate()
            .flat_map(|(index, slot)| {
                let description = slot.action.describe();
                slot.action
                    .validate()
                    .into_iter()
                    .map(move |error| Diagnostic {
                        behavior: self.name.clone(),
                        action: index,
                        description: description.clone(),
                        error,
                    })
            })
            .collect()
    }

    /// Runs every action once, in declaration order.
    ///
    /// Returns the number of actions that mutated a variable.
    pub fn step(&self, elapsed_seconds: f32) -> usize {
        let mut applied = 0;

        for (index, slot) in self.actions.iter().enumerate() {
            match slot.action.execute_if(&slot.gate, elapsed_seconds) {
                ExecuteOutcome::Applied { variable, change } => {
                    applied += 1;
                    tracing::debug!(
                        behavior = %self.name,
                        action = index,
                        variable = %variable,
                        before = change.before,
                        after = change.after,
                        "value changed"
                    );
                }
                ExecuteOutcome::NoTarget => {
                    tracing::trace!(behavior = %self.name, action = index, "action has no target");
                }
                ExecuteOutcome::Skipped => {
                    tracing::trace!(behavior = %self.name, action = index, "action skipped");
                }
            }
        }

        applied
    }

    /// Current value of one of this behavior's instances.
    pub fn instance_value(&self, name: &str) -> Option<f32> {
        self.instance(name).map(|instance| instance.current_value())
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("name", &self.name)
            .field("instances", &self.instances.len())
            .field("actions", &self.actions.len())
            .field("active", &self.active)
            .finish()
    }
}

//! Scene assembly and the frame loop.
//!
//! A [`Scene`] owns the shared variable assets and the behaviors that act on
//! them. It is built either programmatically or from a
//! [`SceneDefinition`], in which case every name is resolved up front so that
//! stepping can never fail.

use std::collections::HashMap;
use std::path::Path;

use okapi_content::{SceneDefinition, SceneLoader, SimulationConfig};
use okapi_core::{ChangeValueAction, TargetBinding, VariableConfig, VariableHandle};

use crate::behavior::{Behavior, Diagnostic};
use crate::clock::FrameClock;
use crate::error::{Result, SceneError};
use crate::snapshot::VariableSnapshot;

/// Totals of a [`Scene::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub mutations: usize,
    pub simulated_seconds: f64,
}

/// Variable assets plus the behaviors referencing them.
#[derive(Debug, Default)]
pub struct Scene {
    variables: Vec<VariableHandle>,
    variable_index: HashMap<String, usize>,
    behaviors: Vec<Behavior>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a RON scene definition and builds it.
    pub fn load(path: &Path) -> Result<Self> {
        let definition = SceneLoader::load(path).map_err(SceneError::Load)?;
        Self::from_definition(&definition)
    }

    /// Builds a scene, resolving every action's target names.
    pub fn from_definition(definition: &SceneDefinition) -> Result<Self> {
        let mut scene = Self::new();

        for variable in &definition.variables {
            scene.add_variable(&variable.name, &variable.config)?;
        }

        for entry in &definition.behaviors {
            let mut behavior = Behavior::new(&entry.name);

            for instance in &entry.instances {
                behavior.add_instance(&instance.name, instance.config.clone())?;
            }

            for (index, action) in entry.actions.iter().enumerate() {
                let asset = match action.asset.as_deref() {
                    Some(name) => Some(scene.variable(name).cloned().ok_or_else(|| {
                        SceneError::UnknownVariable {
                            behavior: entry.name.clone(),
                            action: index,
                            name: name.to_owned(),
                        }
                    })?),
                    None => None,
                };

                let instance = match action.instance.as_deref() {
                    Some(name) => Some(behavior.instance(name).cloned().ok_or_else(|| {
                        SceneError::UnknownInstance {
                            behavior: entry.name.clone(),
                            action: index,
                            name: name.to_owned(),
                        }
                    })?),
                    None => None,
                };

                behavior.add_action(
                    ChangeValueAction::new(TargetBinding { asset, instance }, action.operation)
                        .with_enabled(action.enabled),
                );
            }

            scene.add_behavior(behavior)?;
        }

        tracing::info!(
            variables = scene.variables.len(),
            behaviors = scene.behaviors.len(),
            "scene built"
        );
        Ok(scene)
    }

    /// Creates a shared variable asset. Names must be unique.
    pub fn add_variable(&mut self, name: &str, config: &VariableConfig) -> Result<VariableHandle> {
        if self.variable_index.contains_key(name) {
            return Err(SceneError::DuplicateVariable {
                name: name.to_owned(),
            });
        }

        let handle = VariableHandle::create(name, config);
        self.variable_index
            .insert(name.to_owned(), self.variables.len());
        self.variables.push(handle.clone());
        Ok(handle)
    }

    pub fn variable(&self, name: &str) -> Option<&VariableHandle> {
        self.variable_index
            .get(name)
            .map(|&index| &self.variables[index])
    }

    pub fn add_behavior(&mut self, behavior: Behavior) -> Result<()> {
        if self.behavior(behavior.name()).is_some() {
            return Err(SceneError::DuplicateBehavior {
                name: behavior.name().to_owned(),
            });
        }
        self.behaviors.push(behavior);
        Ok(())
    }

    pub fn behavior(&self, name: &str) -> Option<&Behavior> {
        self.behaviors.iter().find(|b| b.name() == name)
    }

    pub fn behavior_mut(&mut self, name: &str) -> Option<&mut Behavior> {
        self.behaviors.iter_mut().find(|b| b.name() == name)
    }

    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    /// Activates every behavior (materializes their instances).
    pub fn activate(&mut self) {
        for behavior in &mut self.behaviors {
            behavior.activate();
        }
        tracing::info!(behaviors = self.behaviors.len(), "scene activated");
    }

    /// Collects configuration diagnostics from every behavior.
    pub fn validate(&self) -> Vec<Diagnostic> {
        self.behaviors
            .iter()
            .flat_map(|behavior| behavior.validate())
            .collect()
    }

    /// Validates and logs each diagnostic. Returns how many were found.
    pub fn report_diagnostics(&self) -> usize {
        let diagnostics = self.validate();
        for diagnostic in &diagnostics {
            if diagnostic.error.severity().is_error() {
                tracing::error!(code = diagnostic.error.error_code(), "{}", diagnostic);
            } else {
                tracing::warn!(code = diagnostic.error.error_code(), "{}", diagnostic);
            }
        }
        diagnostics.len()
    }

    /// Runs every behavior once. Returns the number of mutations.
    pub fn step(&self, elapsed_seconds: f32) -> usize {
        self.behaviors
            .iter()
            .map(|behavior| behavior.step(elapsed_seconds))
            .sum()
    }

    /// Activates the scene and steps it `config.frames` times on a fixed clock.
    pub fn run(&mut self, config: &SimulationConfig) -> RunSummary {
        if config.validate_on_load {
            self.report_diagnostics();
        }
        self.activate();

        let mut clock = FrameClock::fixed(config.frame_seconds);
        let mut summary = RunSummary::default();

        for _ in 0..config.frames {
            let time = clock.tick();
            let mutations = self.step(time.elapsed_seconds);
            tracing::trace!(frame = time.index, mutations, "frame stepped");

            summary.mutations += mutations;
            summary.simulated_seconds = time.total_seconds;
        }
        summary.frames = clock.frames();

        tracing::info!(
            frames = summary.frames,
            mutations = summary.mutations,
            "scene run finished"
        );
        summary
    }

    /// Values of every asset followed by every behavior's instances.
    pub fn snapshot(&self) -> Vec<VariableSnapshot> {
        let globals = self.variables.iter().map(VariableSnapshot::of_asset);
        let locals = self.behaviors.iter().flat_map(|behavior| {
            behavior
                .instances()
                .iter()
                .map(move |instance| VariableSnapshot::of_instance(behavior.name(), instance))
        });
        globals.chain(locals).collect()
    }
}

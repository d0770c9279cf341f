use std::sync::Arc;

use parking_lot::Mutex;

use super::{ValueTarget, VariableConfig};
use crate::value::{Limits, Mutation, TypedValue, ValueChange, ValueKind};

/// A named, shared variable ("global" state across behaviors).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableAsset {
    name: String,
    value: TypedValue,
}

impl VariableAsset {
    pub fn new(name: impl Into<String>, config: &VariableConfig) -> Self {
        Self {
            name: name.into(),
            value: config.to_value(),
        }
    }

    /// Replaces kind, initial/default values and limits.
    ///
    /// This is a construction-time operation. Calling it after running
    /// behaviors started referencing the asset discards their writes.
    pub fn configure(&mut self, config: &VariableConfig) {
        self.value = config.to_value();
    }

    pub fn set(&mut self, value: f32) {
        self.value.set(value);
    }

    pub fn change(&mut self, delta: f32) {
        self.value.change(delta);
    }

    pub fn reset(&mut self) {
        self.value.reset();
    }

    pub fn apply(&mut self, mutation: Mutation) -> ValueChange {
        self.value.apply(mutation)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &TypedValue {
        &self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    pub fn current_value(&self) -> f32 {
        self.value.current()
    }

    pub fn default_value(&self) -> f32 {
        self.value.default_value()
    }

    pub fn min_value(&self) -> f32 {
        self.value.min()
    }

    pub fn max_value(&self) -> f32 {
        self.value.max()
    }

    pub fn to_display_string(&self) -> String {
        self.value.to_display_string()
    }
}

/// Shared, reference-counted handle to a [`VariableAsset`].
///
/// Clones point at the same asset. The asset lives as long as its longest
/// holder.
#[derive(Clone, Debug)]
pub struct VariableHandle(Arc<Mutex<VariableAsset>>);

impl VariableHandle {
    pub fn new(asset: VariableAsset) -> Self {
        Self(Arc::new(Mutex::new(asset)))
    }

    /// Creates and configures a new asset in one step.
    pub fn create(name: impl Into<String>, config: &VariableConfig) -> Self {
        Self::new(VariableAsset::new(name, config))
    }

    /// Returns true if both handles refer to the same asset.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Runs `f` with shared access to the asset.
    pub fn with<R>(&self, f: impl FnOnce(&VariableAsset) -> R) -> R {
        f(&self.0.lock())
    }

    /// See [`VariableAsset::configure`].
    pub fn configure(&self, config: &VariableConfig) {
        self.0.lock().configure(config);
    }

    pub fn set(&self, value: f32) {
        self.0.lock().set(value);
    }

    pub fn change(&self, delta: f32) {
        self.0.lock().change(delta);
    }

    pub fn reset(&self) {
        self.0.lock().reset();
    }

    pub fn min_value(&self) -> f32 {
        self.0.lock().min_value()
    }

    pub fn max_value(&self) -> f32 {
        self.0.lock().max_value()
    }

    pub fn to_display_string(&self) -> String {
        self.0.lock().to_display_string()
    }

    /// Copy of the asset at this point in time.
    pub fn snapshot(&self) -> VariableAsset {
        self.0.lock().clone()
    }
}

impl ValueTarget for VariableHandle {
    fn apply(&self, mutation: Mutation) -> ValueChange {
        self.0.lock().apply(mutation)
    }

    fn current_value(&self) -> f32 {
        self.0.lock().current_value()
    }

    fn name(&self) -> String {
        self.0.lock().name().to_owned()
    }

    fn limits(&self) -> Option<Limits> {
        self.0.lock().value().limits()
    }

    fn kind(&self) -> ValueKind {
        self.0.lock().kind()
    }
}

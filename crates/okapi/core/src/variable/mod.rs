//! Variable assets and per-behavior variable instances.
//!
//! Two flavours of variable share one contract (set / change / reset):
//!
//! - [`VariableAsset`]: a named, shared value. Behaviors hold clones of a
//!   [`VariableHandle`]; a mutation through one clone is visible to all.
//! - [`VariableInstance`]: a private value owned by one behavior, materialized
//!   lazily from its [`VariableConfig`] on first use.
//!
//! Handles wrap their variable in a `parking_lot::Mutex`. Each operation takes
//! the lock once, so a mutation runs to completion before the next begins even
//! when a host steps behaviors from several threads.

mod asset;
mod config;
mod instance;

pub use asset::{VariableAsset, VariableHandle};
pub use config::VariableConfig;
pub use instance::{InstanceHandle, ValueView, VariableInstance};

use crate::value::{Limits, Mutation, ValueChange, ValueKind};

/// Anything an action can mutate: a shared asset or a behavior's instance.
pub trait ValueTarget {
    /// Applies a mutation atomically and reports the before/after values.
    fn apply(&self, mutation: Mutation) -> ValueChange;

    /// Current value (the configured default for unmaterialized instances).
    fn current_value(&self) -> f32;

    /// Variable name, used in descriptions and diagnostics.
    fn name(&self) -> String;

    /// Declared limits, if any.
    fn limits(&self) -> Option<Limits>;

    fn kind(&self) -> ValueKind;

    fn set_value(&self, value: f32) {
        self.apply(Mutation::Set(value));
    }

    fn change_value(&self, delta: f32) {
        self.apply(Mutation::Change(delta));
    }

    fn reset_value(&self) {
        self.apply(Mutation::Reset);
    }
}

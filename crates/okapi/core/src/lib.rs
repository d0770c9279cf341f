//! Typed-value variables and the actions that mutate them.
//!
//! `okapi-core` defines the canonical value rules (clamping, integer
//! truncation, reset-to-default) and exposes pure APIs reused by the runtime
//! and offline tools. Values are reached either through a shared
//! [`VariableHandle`] (a "global" variable asset) or through an
//! [`InstanceHandle`] owned by a single behavior, and are mutated by
//! [`ChangeValueAction`].
//!
//! The crate performs no I/O and does no logging. Hosts own the frame loop,
//! supply elapsed time, and evaluate preconditions.
pub mod action;
pub mod condition;
pub mod error;
pub mod value;
pub mod variable;

pub use action::{
    Action, ChangeOperation, ChangeValueAction, ExecuteOutcome, Target, TargetBinding,
};
pub use condition::{Precondition, PreconditionSet};
pub use error::{ConfigurationError, DiagnosticSeverity};
pub use value::{Limits, Mutation, TypedValue, ValueChange, ValueKind};
pub use variable::{
    InstanceHandle, ValueTarget, ValueView, VariableAsset, VariableConfig, VariableHandle,
    VariableInstance,
};

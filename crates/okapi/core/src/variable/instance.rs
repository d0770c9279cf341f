use std::sync::Arc;

use parking_lot::Mutex;

use super::{ValueTarget, VariableConfig};
use crate::value::{Limits, Mutation, TypedValue, ValueChange, ValueKind};

/// A per-behavior variable with its own default and limits.
///
/// The private [`TypedValue`] is created from the configuration snapshot on
/// the first value-affecting operation or on [`ensure_materialized`]
/// (activation), and is never shared with another instance. Until then,
/// queries fall back to the configured default.
///
/// [`ensure_materialized`]: VariableInstance::ensure_materialized
#[derive(Clone, Debug, PartialEq)]
pub struct VariableInstance {
    name: String,
    config: VariableConfig,
    /// `None` until materialized; never reset back to `None`.
    value: Option<TypedValue>,
}

impl VariableInstance {
    pub fn new(name: impl Into<String>, config: VariableConfig) -> Self {
        Self {
            name: name.into(),
            config,
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &VariableConfig {
        &self.config
    }

    pub fn is_materialized(&self) -> bool {
        self.value.is_some()
    }

    /// Unmaterialized → Materialized transition. Idempotent.
    pub fn ensure_materialized(&mut self) -> &mut TypedValue {
        let config = &self.config;
        self.value.get_or_insert_with(|| config.to_value())
    }

    /// Read-only view: the live value, or a fallback reporting the default.
    pub fn get_value(&self) -> ValueView<'_> {
        match &self.value {
            Some(value) => ValueView::Live(value),
            None => ValueView::Fallback(&self.config),
        }
    }

    pub fn set_value(&mut self, value: f32) {
        self.ensure_materialized().set(value);
    }

    pub fn change_value(&mut self, delta: f32) {
        self.ensure_materialized().change(delta);
    }

    pub fn reset_value(&mut self) {
        self.ensure_materialized().reset();
    }

    pub fn apply(&mut self, mutation: Mutation) -> ValueChange {
        self.ensure_materialized().apply(mutation)
    }

    pub fn current_value(&self) -> f32 {
        self.get_value().current()
    }

    pub fn to_display_string(&self) -> String {
        self.get_value().to_display_string()
    }
}

/// Borrowed view over an instance's value.
#[derive(Clone, Copy, Debug)]
pub enum ValueView<'a> {
    /// The materialized private value.
    Live(&'a TypedValue),
    /// Not yet materialized: reports the configured default as current.
    Fallback(&'a VariableConfig),
}

impl ValueView<'_> {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Live(value) => value.kind(),
            Self::Fallback(config) => config.kind,
        }
    }

    pub fn current(&self) -> f32 {
        match self {
            Self::Live(value) => value.current(),
            Self::Fallback(config) => config.default_value(),
        }
    }

    pub fn default_value(&self) -> f32 {
        match self {
            Self::Live(value) => value.default_value(),
            Self::Fallback(config) => config.default_value(),
        }
    }

    pub fn limits(&self) -> Option<Limits> {
        match self {
            Self::Live(value) => value.limits(),
            Self::Fallback(config) => config.limits,
        }
    }

    pub fn min(&self) -> f32 {
        self.limits().map_or(f32::NEG_INFINITY, |l| l.min)
    }

    pub fn max(&self) -> f32 {
        self.limits().map_or(f32::INFINITY, |l| l.max)
    }

    pub fn to_display_string(&self) -> String {
        match self {
            Self::Live(value) => value.to_display_string(),
            Self::Fallback(config) => config.kind.format(config.default_value()),
        }
    }
}

/// Handle through which a behavior's actions address one of its instances.
#[derive(Clone, Debug)]
pub struct InstanceHandle(Arc<Mutex<VariableInstance>>);

impl InstanceHandle {
    pub fn new(instance: VariableInstance) -> Self {
        Self(Arc::new(Mutex::new(instance)))
    }

    pub fn create(name: impl Into<String>, config: VariableConfig) -> Self {
        Self::new(VariableInstance::new(name, config))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Explicit activation; see [`VariableInstance::ensure_materialized`].
    pub fn activate(&self) {
        self.0.lock().ensure_materialized();
    }

    pub fn is_materialized(&self) -> bool {
        self.0.lock().is_materialized()
    }

    /// Runs `f` with shared access to the instance.
    pub fn with<R>(&self, f: impl FnOnce(&VariableInstance) -> R) -> R {
        f(&self.0.lock())
    }

    pub fn to_display_string(&self) -> String {
        self.0.lock().to_display_string()
    }

    pub fn snapshot(&self) -> VariableInstance {
        self.0.lock().clone()
    }
}

impl ValueTarget for InstanceHandle {
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
        self.0.lock().config().limits
    }

    fn kind(&self) -> ValueKind {
        self.0.lock().config().kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_before_materialization() {
        let instance = VariableInstance::new("ammo", VariableConfig::integer(5.0).with_initial(9.0));

        assert!(!instance.is_materialized());
        assert!(!instance.get_value().is_live());
        assert_eq!(instance.current_value(), 5.0);
        assert_eq!(instance.to_display_string(), "5");
    }

    #[test]
    fn fractional_integer_default_reads_consistently() {
        let config = VariableConfig {
            kind: ValueKind::Integer,
            initial: 5.7,
            default: 5.7,
            limits: None,
        };
        let mut instance = VariableInstance::new("ammo", config);

        assert_eq!(instance.current_value(), 5.0);
        assert_eq!(instance.to_display_string(), "5");

        instance.reset_value();
        assert_eq!(instance.current_value(), 5.0);
    }

    #[test]
    fn first_mutation_materializes_from_config() {
        let mut instance = VariableInstance::new("ammo", VariableConfig::integer(5.0));

        instance.change_value(3.7);

        assert!(instance.is_materialized());
        assert_eq!(instance.current_value(), 8.0);
        assert_eq!(instance.to_display_string(), "8");
    }

    #[test]
    fn activation_uses_initial_value() {
        let mut instance = VariableInstance::new(
            "timer",
            VariableConfig::float(0.0).with_initial(2.5).with_limits(0.0, 3.0),
        );

        instance.ensure_materialized();
        assert_eq!(instance.current_value(), 2.5);

        instance.change_value(1.0);
        assert_eq!(instance.current_value(), 3.0);

        instance.reset_value();
        assert_eq!(instance.current_value(), 0.0);
    }

    #[test]
    fn instances_never_share_values() {
        let config = VariableConfig::float(1.0);
        let mut first = VariableInstance::new("hp", config.clone());
        let mut second = VariableInstance::new("hp", config);

        first.set_value(4.0);
        second.ensure_materialized();

        assert_eq!(first.current_value(), 4.0);
        assert_eq!(second.current_value(), 1.0);
    }

    #[test]
    fn reset_materializes_at_default() {
        let mut instance = VariableInstance::new("lives", VariableConfig::integer(3.0).with_initial(1.0));
        instance.reset_value();
        assert!(instance.is_materialized());
        assert_eq!(instance.current_value(), 3.0);
    }

    #[test]
    fn fallback_view_reports_configured_limits() {
        let instance = VariableInstance::new("fuel", VariableConfig::float(50.0).with_limits(0.0, 100.0));
        let view = instance.get_value();
        assert_eq!(view.min(), 0.0);
        assert_eq!(view.max(), 100.0);
        assert_eq!(view.kind(), ValueKind::Float);
    }

    #[test]
    fn handle_activation_is_idempotent() {
        let handle = InstanceHandle::create("charge", VariableConfig::float(1.0));
        handle.activate();
        handle.change_value(1.5);
        handle.activate();
        assert!(handle.is_materialized());
        assert_eq!(handle.current_value(), 2.5);
        assert_eq!(handle.name(), "charge");
    }
}

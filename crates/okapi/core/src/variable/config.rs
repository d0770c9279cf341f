use crate::value::{Limits, TypedValue, ValueKind};

/// Persisted configuration of a variable asset or instance.
///
/// `initial` seeds the current value; `default` is what `reset` restores.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ValueKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub limits: Option<Limits>,
}

impl VariableConfig {
    /// Configuration whose initial value equals its default.
    pub const fn new(kind: ValueKind, default: f32) -> Self {
        Self {
            kind,
            initial: default,
            default,
            limits: None,
        }
    }

    pub const fn float(default: f32) -> Self {
        Self::new(ValueKind::Float, default)
    }

    /// Integer configuration; the default is truncated toward zero.
    pub fn integer(default: f32) -> Self {
        Self::new(ValueKind::Integer, ValueKind::Integer.normalize(default))
    }

    /// Overrides the initial value (builder pattern).
    #[must_use]
    pub const fn with_initial(mut self, initial: f32) -> Self {
        self.initial = initial;
        self
    }

    /// Attaches inclusive limits (builder pattern).
    #[must_use]
    pub const fn with_limits(mut self, min: f32, max: f32) -> Self {
        self.limits = Some(Limits::new(min, max));
        self
    }

    pub const fn has_limits(&self) -> bool {
        self.limits.is_some()
    }

    /// Initial value after the kind's truncation policy.
    ///
    /// Configurations loaded from data files bypass the constructors, so the
    /// raw fields may hold fractional values for integer kinds.
    pub fn initial_value(&self) -> f32 {
        self.kind.normalize(self.initial)
    }

    /// Default value after the kind's truncation policy.
    pub fn default_value(&self) -> f32 {
        self.kind.normalize(self.default)
    }

    /// Builds a fresh value from this configuration snapshot.
    pub fn to_value(&self) -> TypedValue {
        TypedValue::new(self.kind, self.initial_value(), self.default_value(), self.limits)
    }
}

impl Default for VariableConfig {
    fn default() -> Self {
        Self::float(0.0)
    }
}

impl From<&VariableConfig> for TypedValue {
    fn from(config: &VariableConfig) -> Self {
        config.to_value()
    }
}

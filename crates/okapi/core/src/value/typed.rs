use super::{Limits, ValueKind};

/// A single mutation request against a [`TypedValue`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mutation {
    /// Replace the current value (clamped, then truncated).
    Set(f32),
    /// Add a delta to the current value (clamped, then truncated).
    Change(f32),
    /// Restore the default value.
    Reset,
}

/// Current value before and after a mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueChange {
    pub before: f32,
    pub after: f32,
}

impl ValueChange {
    /// Returns true if the mutation changed the stored value.
    pub fn is_changed(&self) -> bool {
        self.before != self.after
    }
}

/// Numeric value with a declared kind, a default and optional limits.
///
/// Invariants (hold after every `set`/`change`):
/// - with limits, `min <= current <= max`
/// - with [`ValueKind::Integer`], `current` is integral
///
/// `reset` copies the default verbatim. Defaults are expected to lie within
/// the limits by configuration contract; they are not re-clamped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedValue {
    kind: ValueKind,
    current: f32,
    default: f32,
    limits: Option<Limits>,
}

impl TypedValue {
    /// Creates a value with explicit initial properties.
    ///
    /// `current` is stored as given; normalization starts with the first
    /// mutation.
    pub const fn new(kind: ValueKind, current: f32, default: f32, limits: Option<Limits>) -> Self {
        Self {
            kind,
            current,
            default,
            limits,
        }
    }

    /// Unbounded float value starting at its default.
    pub const fn float(default: f32) -> Self {
        Self::new(ValueKind::Float, default, default, None)
    }

    /// Unbounded integer value starting at its default.
    pub fn integer(default: f32) -> Self {
        let default = ValueKind::Integer.normalize(default);
        Self::new(ValueKind::Integer, default, default, None)
    }

    /// Attaches limits (builder pattern).
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// `current = clamp(value)`, then truncated for integers.
    pub fn set(&mut self, value: f32) {
        self.current = self.normalize(value);
    }

    /// `current = clamp(current + delta)`, then truncated for integers.
    ///
    /// Clamping happens per call, so `change(a); change(b)` may differ from
    /// `change(a + b)` when the intermediate sum leaves the limits.
    pub fn change(&mut self, delta: f32) {
        self.current = self.normalize(self.current + delta);
    }

    /// `current = default`.
    pub fn reset(&mut self) {
        self.current = self.default;
    }

    /// Applies a mutation and reports the value before and after it.
    pub fn apply(&mut self, mutation: Mutation) -> ValueChange {
        let before = self.current;
        match mutation {
            Mutation::Set(value) => self.set(value),
            Mutation::Change(delta) => self.change(delta),
            Mutation::Reset => self.reset(),
        }
        ValueChange {
            before,
            after: self.current,
        }
    }

    fn normalize(&self, value: f32) -> f32 {
        let clamped = match &self.limits {
            Some(limits) => limits.for_kind(self.kind).clamp(value),
            None => value,
        };
        self.kind.normalize(clamped)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_integer(&self) -> bool {
        self.kind.is_integer()
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn default_value(&self) -> f32 {
        self.default
    }

    pub fn limits(&self) -> Option<Limits> {
        self.limits
    }

    /// Lower bound, or negative infinity without limits.
    pub fn min(&self) -> f32 {
        self.limits.map_or(f32::NEG_INFINITY, |l| l.min)
    }

    /// Upper bound, or positive infinity without limits.
    pub fn max(&self) -> f32 {
        self.limits.map_or(f32::INFINITY, |l| l.max)
    }

    /// Renders the current value: truncated integer or default float text.
    pub fn to_display_string(&self) -> String {
        self.kind.format(self.current)
    }
}

impl std::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

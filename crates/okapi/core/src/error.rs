//! Advisory configuration diagnostics.
//!
//! Nothing in this crate fails at execution time: out-of-range inputs are
//! clamped and an action without a target does nothing. What *can* be wrong
//! is configuration, and that is reported ahead of time by
//! [`Action::validate`](crate::Action::validate) as a list of
//! [`ConfigurationError`]s. Hosts surface them (logs, editor markers) and keep
//! running.

/// Severity of a configuration diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticSeverity {
    /// Suspicious but well-defined (e.g. both targets bound; the instance wins).
    Warning,

    /// Almost certainly a misconfiguration (e.g. nothing to mutate).
    Error,
}

impl DiagnosticSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Configuration problem reported by validation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigurationError {
    #[error("no target variable configured")]
    NoTarget,

    #[error(
        "both variable asset '{asset}' and variable instance '{instance}' are configured; the instance is used"
    )]
    AmbiguousTarget { asset: String, instance: String },

    #[error("change operation has a zero delta")]
    ZeroDelta,

    #[error("variable '{variable}' has limits [{min}, {max}] that admit no value")]
    InvalidLimits { variable: String, min: f32, max: f32 },
}

impl ConfigurationError {
    pub const fn severity(&self) -> DiagnosticSeverity {
        match self {
            Self::AmbiguousTarget { .. } => DiagnosticSeverity::Warning,
            Self::NoTarget | Self::ZeroDelta | Self::InvalidLimits { .. } => {
                DiagnosticSeverity::Error
            }
        }
    }

    /// Stable identifier, useful for filtering and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoTarget => "no_target",
            Self::AmbiguousTarget { .. } => "ambiguous_target",
            Self::ZeroDelta => "zero_delta",
            Self::InvalidLimits { .. } => "invalid_limits",
        }
    }
}

use super::ValueKind;

/// Inclusive bounds applied to a value after every `set`/`change`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub min: f32,
    pub max: f32,
}

impl Limits {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Restricts `value` to `[min, max]`.
    ///
    /// Unlike [`f32::clamp`] this never panics. An inverted range resolves to
    /// `max`; [`Limits::is_valid`] lets callers report it ahead of time.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns false when `min > max` or either bound is NaN.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Bounds as seen by a value of `kind`.
    ///
    /// Integer values can only reach whole numbers, so fractional bounds are
    /// pulled inward to `[ceil(min), floor(max)]`.
    pub fn for_kind(&self, kind: ValueKind) -> Self {
        match kind {
            ValueKind::Float => *self,
            ValueKind::Integer => Self::new(self.min.ceil(), self.max.floor()),
        }
    }

    /// Returns true when at least one value of `kind` lies within the bounds.
    pub fn admits(&self, kind: ValueKind) -> bool {
        self.is_valid() && self.for_kind(kind).is_valid()
    }
}

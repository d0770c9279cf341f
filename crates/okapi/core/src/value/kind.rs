/// Numeric kind of a variable.
///
/// The kind decides the truncation policy applied after every mutation and
/// how the value is rendered as text.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ValueKind {
    /// Floating point value, stored as-is.
    #[default]
    Float,
    /// Integral value; fractional parts are discarded toward zero.
    Integer,
}

impl ValueKind {
    /// Returns true for [`ValueKind::Integer`].
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer)
    }

    /// Applies the kind's truncation policy.
    ///
    /// Integer values are truncated toward zero (`2.9 → 2`, `-2.9 → -2`),
    /// never rounded.
    #[inline]
    pub fn normalize(self, value: f32) -> f32 {
        match self {
            Self::Float => value,
            Self::Integer => value.trunc(),
        }
    }

    /// Renders a value as text according to this kind.
    pub fn format(self, value: f32) -> String {
        match self {
            Self::Integer => {
                let whole = value.trunc();
                // Small negatives truncate to -0.
                if whole == 0.0 {
                    "0".to_owned()
                } else {
                    format!("{whole:.0}")
                }
            }
            Self::Float => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_truncates_toward_zero() {
        assert_eq!(ValueKind::Integer.normalize(2.9), 2.0);
        assert_eq!(ValueKind::Integer.normalize(-2.9), -2.0);
        assert_eq!(ValueKind::Float.normalize(2.9), 2.9);
    }

    #[test]
    fn formats_per_kind() {
        assert_eq!(ValueKind::Integer.format(8.7), "8");
        assert_eq!(ValueKind::Integer.format(-0.5), "0");
        assert_eq!(ValueKind::Integer.format(-3.2), "-3");
        assert_eq!(ValueKind::Float.format(10.0), "10");
        assert_eq!(ValueKind::Float.format(2.5), "2.5");
    }

    #[test]
    fn integer_format_does_not_saturate() {
        let huge = 2f32.powi(70);
        assert_eq!(ValueKind::Integer.format(huge), "1180591620717411303424");
        assert_eq!(ValueKind::Integer.format(-huge), "-1180591620717411303424");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("integer".parse::<ValueKind>(), Ok(ValueKind::Integer));
        assert_eq!("Float".parse::<ValueKind>(), Ok(ValueKind::Float));
        assert!("string".parse::<ValueKind>().is_err());
        assert_eq!(ValueKind::Integer.to_string(), "Integer");
    }
}

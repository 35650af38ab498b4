//! Field-level validation primitives.
//!
//! Validators return either the typed, validated value or a [`Violation`]
//! describing the first rule the raw input broke.

use serde::Serialize;

/// Category of a failed field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Value has the wrong length (or digit count).
    InvalidLength,
    /// Text is shorter than the minimum.
    TooShort,
    /// Value is not one of the allowed variants.
    InvalidEnum,
    /// Required value is absent, or a collection is empty.
    EmptyOrMissing,
    /// Value has the wrong JSON type (e.g. text where a number was expected).
    InvalidType,
}

/// A single failed field rule with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    /// Required field was not supplied.
    pub fn missing(field: &'static str) -> Self {
        Self::new(field, ViolationKind::EmptyOrMissing, format!("{field} is required"))
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Unwrap a required field or report it as missing.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, Violation> {
    value.ok_or_else(|| Violation::missing(field))
}

/// Check that `value` is exactly `len` characters long.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn exact_chars(
    field: &'static str,
    value: &str,
    len: usize,
    message: &str,
) -> Result<(), Violation> {
    if value.chars().count() != len {
        return Err(Violation::new(field, ViolationKind::InvalidLength, message));
    }
    Ok(())
}

/// Check that `value` is at least `min` characters long.
pub fn min_chars(
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) -> Result<(), Violation> {
    if value.chars().count() < min {
        return Err(Violation::new(field, ViolationKind::TooShort, message));
    }
    Ok(())
}

//! Safe integer parsing and the tri-state field value
//!
//! `parse_int` follows number-coercion semantics: surrounding whitespace is
//! ignored, fractional values are floored toward negative infinity and
//! anything non-finite is rejected. `FieldValue` layers the
//! absent/invalid distinction on top so validation and arithmetic share one
//! representation.

use crate::error::InvalidReason;

/// Parse a raw field into an integer, or `None` when empty or not a finite number
///
/// Only decimal notation is accepted; radix prefixes such as `0x10`, `0b101` and `0o7` are rejected.
pub fn parse_int(input: &str) -> Option<i64> {
    if input.is_empty() {
        return None;
    }

    let trimmed = input.trim();
    // Whitespace-only coerces to zero rather than failing
    if trimmed.is_empty() {
        return Some(0);
    }

    let number: f64 = trimmed.parse().ok()?;
    if !number.is_finite() {
        return None;
    }

    let floored = number.floor();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return None;
    }

    Some(floored as i64)
}

/// Parse a raw field, keeping "left blank" apart from "typed garbage"
pub fn parse_field(input: &str) -> FieldValue {
    if input.is_empty() {
        return FieldValue::Absent;
    }
    match parse_int(input) {
        Some(n) => FieldValue::Value(n),
        None => FieldValue::Invalid(InvalidReason::NotANumber),
    }
}

/// A parsed form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// Left blank
    Absent,
    /// Present but unusable
    Invalid(InvalidReason),
    /// Present and in range
    Value(i64),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Absent
    }
}

impl FieldValue {
    /// The usable value, if any
    pub fn value(&self) -> Option<i64> {
        match self {
            FieldValue::Value(n) => Some(*n),
            _ => None,
        }
    }

    /// Arithmetic default: absent and invalid both count as zero
    pub fn or_zero(&self) -> i64 {
        self.value().unwrap_or(0)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValue::Invalid(_))
    }

    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        match self {
            FieldValue::Invalid(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Chain a check that may itself reject the value
    pub fn and_then<F>(self, f: F) -> FieldValue
    where
        F: FnOnce(i64) -> FieldValue,
    {
        match self {
            FieldValue::Value(n) => f(n),
            other => other,
        }
    }

    /// Reject values below `min`
    pub fn at_least(self, min: i64) -> FieldValue {
        self.and_then(|value| {
            if value < min {
                FieldValue::Invalid(InvalidReason::BelowMinimum { value, min })
            } else {
                FieldValue::Value(value)
            }
        })
    }

    /// Sum of several fields with absent/invalid counted as zero
    pub fn sum<'a, I>(fields: I) -> i64
    where
        I: IntoIterator<Item = &'a FieldValue>,
    {
        fields
            .into_iter()
            .fold(0i64, |acc, field| acc.saturating_add(field.or_zero()))
    }
}

//! Break-even System - derivation engine for insurance break-even calculators
//!
//! This library provides:
//! - Digit normalization and safe integer parsing of raw form input
//! - Field validation with absent / invalid / value tri-state fields
//! - Count-based (caregiver) and pension-style (long-term care) break-even points
//! - Remaining-lifetime estimates against a lifelong basis age
//! - Currency formatting and plain-text result summaries

pub mod calculator;
pub mod error;
pub mod format;
pub mod input;
pub mod summary;

// Re-export commonly used types
pub use calculator::{BreakEven, BreakEvenEngine, BreakEvenResult, CalculatorMode, LifelongBasis, Quote};
pub use error::{CalcError, InvalidReason};
pub use input::{FieldValue, FormField, ParsedInputs, RawForm};

//! Calculation output structures

use super::lifetime::{LifelongBasis, RemainingLifetime};
use super::mode::CalculatorMode;
use crate::format::format_months;
use crate::input::FieldErrors;
use serde::Serialize;

/// Break-even point, shaped by the mode that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakEven {
    /// floor(total / daily payout) days, floor(days / 30) months
    CountBased { days: i64, months: i64 },

    /// Raw months = total / monthly pension. Days are floor(raw × 30),
    /// never derived from the rounded months.
    PensionStyle {
        months_raw: f64,
        months_rounded: f64,
        days: i64,
    },
}

impl BreakEven {
    pub fn days(&self) -> i64 {
        match self {
            BreakEven::CountBased { days, .. } => *days,
            BreakEven::PensionStyle { days, .. } => *days,
        }
    }

    /// Months as displayed: whole months, or one decimal for pension style
    pub fn months_label(&self) -> String {
        match self {
            BreakEven::CountBased { months, .. } => months.to_string(),
            BreakEven::PensionStyle { months_rounded, .. } => format_months(*months_rounded),
        }
    }
}

/// Everything derived from one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakEvenResult {
    pub mode: CalculatorMode,

    /// Current age, when entered and valid
    pub age: Option<i64>,

    /// Lifelong basis used for the remaining-lifetime estimate
    pub lifelong_basis: Option<LifelongBasis>,

    /// Sum of premium components
    pub monthly_premium: i64,

    pub pay_count: i64,

    /// monthly premium × payment count (total planned payment)
    pub total_premium: i64,

    /// Daily payout (count based) or monthly pension total (pension style)
    pub payout: i64,

    /// `None` when the payout is zero or missing
    pub break_even: Option<BreakEven>,

    /// `None` when age is missing or the basis is unsupported
    pub remaining: Option<RemainingLifetime>,
}

impl BreakEvenResult {
    pub fn break_even_days(&self) -> Option<i64> {
        self.break_even.as_ref().map(BreakEven::days)
    }
}

/// A result together with the form context needed to present it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub name: String,
    pub errors: FieldErrors,
    pub result: BreakEvenResult,
}

impl Quote {
    /// Whether the inputs are complete and valid enough to share a result
    pub fn is_calc_ready(&self) -> bool {
        self.errors.is_empty() && self.result.payout >= self.result.mode.payout_minimum().max(1)
    }
}

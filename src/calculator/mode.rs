//! Calculator variants

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formula and rounding policy used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorMode {
    /// Caregiver insurance: monthly premium × payment count against a daily payout.
    /// Break-even days are floored, months are floor(days / 30).
    #[serde(rename = "caregiver", alias = "count-based")]
    CountBased,

    /// Long-term-care / dementia insurance: summed premiums against summed
    /// monthly pension. Months are rounded to one decimal for display,
    /// days come from the unrounded months.
    #[serde(rename = "ltc-dementia", alias = "pension-style")]
    PensionStyle,
}

impl CalculatorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorMode::CountBased => "caregiver",
            CalculatorMode::PensionStyle => "ltc-dementia",
        }
    }

    /// Heading used in summaries
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorMode::CountBased => "간병인보험 손익분기점 계산기",
            CalculatorMode::PensionStyle => "장기요양 치매 보험계산기",
        }
    }

    /// Smallest acceptable payout component
    ///
    /// A daily payout must be at least 1; pension components may be 0
    /// as long as their sum is positive.
    pub fn payout_minimum(&self) -> i64 {
        match self {
            CalculatorMode::CountBased => 1,
            CalculatorMode::PensionStyle => 0,
        }
    }
}

impl Default for CalculatorMode {
    fn default() -> Self {
        CalculatorMode::CountBased
    }
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "caregiver" | "count-based" | "A" | "a" => Ok(CalculatorMode::CountBased),
            "ltc-dementia" | "pension-style" | "B" | "b" => Ok(CalculatorMode::PensionStyle),
            other => Err(CalcError::UnknownMode(other.to_string())),
        }
    }
}

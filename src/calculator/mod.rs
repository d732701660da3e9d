//! Break-even calculation for the caregiver and long-term-care calculators

mod engine;
mod lifetime;
mod mode;
mod result;

pub use engine::{count_based_break_even, pension_break_even, BreakEvenEngine, DAYS_PER_MONTH};
pub use lifetime::{estimate_remaining_lifetime, parse_reference_date, LifelongBasis, RemainingLifetime};
pub use mode::CalculatorMode;
pub use result::{BreakEven, BreakEvenResult, Quote};

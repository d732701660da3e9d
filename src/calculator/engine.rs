//! Break-even engine shared by every calculator variant

use super::lifetime::estimate_remaining_lifetime;
use super::mode::CalculatorMode;
use super::result::{BreakEven, BreakEvenResult, Quote};
use crate::format::round_to_one_decimal;
use crate::input::{FieldErrors, ParsedInputs, RawForm};
use chrono::NaiveDate;
use log::debug;

/// Days counted per month when converting break-even points
pub const DAYS_PER_MONTH: i64 = 30;

/// Count-based break-even: floored days, then floored 30-day months
///
/// Returns `None` when the daily payout is not positive.
pub fn count_based_break_even(total_premium: i64, daily_payout: i64) -> Option<BreakEven> {
    if daily_payout <= 0 {
        return None;
    }
    // div_euclid with a positive divisor floors toward negative infinity
    let days = total_premium.div_euclid(daily_payout);
    let months = days.div_euclid(DAYS_PER_MONTH);
    Some(BreakEven::CountBased { days, months })
}

/// Pension-style break-even: true-division months, rounded only for display
///
/// Returns `None` when the monthly pension is not positive.
pub fn pension_break_even(total_planned_pay: i64, monthly_pension: i64) -> Option<BreakEven> {
    if monthly_pension <= 0 {
        return None;
    }
    let months_raw = total_planned_pay as f64 / monthly_pension as f64;
    let months_rounded = round_to_one_decimal(months_raw);
    let days = (months_raw * DAYS_PER_MONTH as f64).floor() as i64;
    Some(BreakEven::PensionStyle {
        months_raw,
        months_rounded,
        days,
    })
}

/// Stateless calculator configured with a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakEvenEngine {
    mode: CalculatorMode,
}

impl BreakEvenEngine {
    pub fn new(mode: CalculatorMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CalculatorMode {
        self.mode
    }

    /// Derive all metrics from parsed inputs as of `today`
    pub fn calculate(&self, inputs: &ParsedInputs, today: NaiveDate) -> BreakEvenResult {
        let monthly_premium = inputs.monthly_premium();
        let pay_count = inputs.pay_count.or_zero();
        let total_premium = monthly_premium.saturating_mul(pay_count);
        let payout = inputs.payout_total();

        let break_even = match self.mode {
            CalculatorMode::CountBased => count_based_break_even(total_premium, payout),
            CalculatorMode::PensionStyle => pension_break_even(total_premium, payout),
        };

        let age = inputs.age.value();
        let lifelong_basis = inputs.lifelong_basis();
        let remaining = age
            .zip(lifelong_basis)
            .and_then(|(age, basis)| estimate_remaining_lifetime(age, basis, today));

        debug!(
            "{} calculation: monthly={} count={} total={} payout={} break_even={:?}",
            self.mode, monthly_premium, pay_count, total_premium, payout, break_even
        );

        BreakEvenResult {
            mode: self.mode,
            age,
            lifelong_basis,
            monthly_premium,
            pay_count,
            total_premium,
            payout,
            break_even,
            remaining,
        }
    }

    /// Parse, validate and calculate a raw form
    pub fn quote(&self, form: &RawForm, today: NaiveDate) -> Quote {
        let parsed = ParsedInputs::parse(form, self.mode);
        let errors = FieldErrors::from_parsed(&parsed, self.mode);
        let result = self.calculate(&parsed, today);

        Quote {
            name: form.name.clone(),
            errors,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FormField;
    use approx::assert_relative_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_count_based_formula() {
        // 35,000 × 240 = 8,400,000 ; / 150,000 = 56 days ; 1 month
        assert_eq!(
            count_based_break_even(8_400_000, 150_000),
            Some(BreakEven::CountBased { days: 56, months: 1 })
        );
        assert_eq!(
            count_based_break_even(0, 150_000),
            Some(BreakEven::CountBased { days: 0, months: 0 })
        );
    }

    #[test]
    fn test_count_based_matches_floor_for_grid() {
        for m in [0i64, 1, 999, 35_000, 123_457] {
            for c in [0i64, 1, 7, 240] {
                for d in [1i64, 3, 29, 150_000] {
                    let days = (m * c) / d;
                    assert_eq!(
                        count_based_break_even(m * c, d),
                        Some(BreakEven::CountBased { days, months: days / 30 })
                    );
                }
            }
        }
    }

    #[test]
    fn test_count_based_zero_or_negative_payout() {
        assert_eq!(count_based_break_even(1_000, 0), None);
        assert_eq!(count_based_break_even(1_000, -5), None);
    }

    #[test]
    fn test_count_based_negative_total_floors() {
        assert_eq!(
            count_based_break_even(-7, 2),
            Some(BreakEven::CountBased { days: -4, months: -1 })
        );
    }

    #[test]
    fn test_pension_days_use_unrounded_months() {
        // raw months 11.96 -> displays 12.0, but days = floor(358.8) = 358
        let result = pension_break_even(1_196, 100).unwrap();
        match result {
            BreakEven::PensionStyle { months_raw, months_rounded, days } => {
                assert_relative_eq!(months_raw, 11.96, epsilon = 1e-12);
                assert_relative_eq!(months_rounded, 12.0);
                assert_eq!(days, 358);
                assert_ne!(days, (months_rounded * 30.0).floor() as i64);
            }
            other => panic!("unexpected break-even shape: {:?}", other),
        }
        assert_eq!(result.months_label(), "12.0");
    }

    #[test]
    fn test_pension_zero_payout() {
        assert_eq!(pension_break_even(1_000_000, 0), None);
    }

    #[test]
    fn test_calculate_count_based() {
        let form = RawForm::from_pairs([
            ("age", "45"),
            ("monthlyPremium", "35000"),
            ("payCount", "240"),
            ("dailyPay", "150000"),
        ])
        .unwrap();
        let engine = BreakEvenEngine::new(CalculatorMode::CountBased);
        let quote = engine.quote(&form, today());

        assert!(quote.errors.is_empty());
        assert!(quote.is_calc_ready());
        let result = &quote.result;
        assert_eq!(result.total_premium, 8_400_000);
        assert_eq!(result.break_even_days(), Some(56));
        let remaining = result.remaining.as_ref().unwrap();
        assert_eq!(remaining.target_date_label, "2069.12.31");
        assert_eq!(remaining.remaining_days, 16635);
    }

    #[test]
    fn test_calculate_defaults_missing_inputs_to_zero() {
        let form = RawForm::default().with(FormField::Payout(0), "150000");
        let engine = BreakEvenEngine::new(CalculatorMode::CountBased);
        let result = engine.quote(&form, today()).result;

        assert_eq!(result.total_premium, 0);
        assert_eq!(result.break_even, Some(BreakEven::CountBased { days: 0, months: 0 }));
        assert!(result.remaining.is_none());
        assert!(result.age.is_none());
    }

    #[test]
    fn test_calculate_missing_daily_payout() {
        let form = RawForm::default()
            .with(FormField::Premium(0), "35000")
            .with(FormField::PayCount, "240");
        let engine = BreakEvenEngine::new(CalculatorMode::CountBased);
        let quote = engine.quote(&form, today());

        assert_eq!(quote.result.total_premium, 8_400_000);
        assert!(quote.result.break_even.is_none());
        assert!(!quote.is_calc_ready());
    }

    #[test]
    fn test_invalid_daily_payout_is_absent_in_result() {
        let form = RawForm::from_pairs([("monthlyPremium", "1000"), ("payCount", "10"), ("dailyPay", "0")]).unwrap();
        let quote = BreakEvenEngine::new(CalculatorMode::CountBased).quote(&form, today());

        assert!(quote.errors.contains(FormField::Payout(0)));
        assert!(quote.result.break_even.is_none());
    }

    #[test]
    fn test_calculate_pension_style() {
        let form = RawForm::from_pairs([
            ("premiumTool", "12000"),
            ("premiumDaycare", "18000"),
            ("premiumHome", "22000"),
            ("receiveTool", "50000"),
            ("receiveDaycare", "150000"),
            ("receiveHome", "200000"),
            ("payCount", "240"),
        ])
        .unwrap();
        let engine = BreakEvenEngine::new(CalculatorMode::PensionStyle);
        let quote = engine.quote(&form, today());

        let result = &quote.result;
        assert_eq!(result.monthly_premium, 52_000);
        assert_eq!(result.payout, 400_000);
        assert_eq!(result.total_premium, 12_480_000);
        // 12,480,000 / 400,000 = 31.2 months
        match result.break_even {
            Some(BreakEven::PensionStyle { months_raw, months_rounded, days }) => {
                assert_relative_eq!(months_raw, 31.2, epsilon = 1e-12);
                assert_relative_eq!(months_rounded, 31.2);
                assert_eq!(days, 936);
            }
            other => panic!("unexpected break-even: {:?}", other),
        }
        assert!(quote.is_calc_ready());
    }

    #[test]
    fn test_pension_style_zero_pension_not_ready() {
        let form = RawForm::from_pairs([("premium1", "10000"), ("payout1", "0"), ("payCount", "12")]).unwrap();
        let quote = BreakEvenEngine::new(CalculatorMode::PensionStyle).quote(&form, today());

        assert!(quote.errors.is_empty());
        assert!(quote.result.break_even.is_none());
        assert!(!quote.is_calc_ready());
    }

    #[test]
    fn test_unsupported_basis_drops_remaining_lifetime() {
        let form = RawForm::from_pairs([("age", "45"), ("lifelongBasis", "95")]).unwrap();
        let result = BreakEvenEngine::new(CalculatorMode::CountBased).quote(&form, today()).result;

        assert_eq!(result.age, Some(45));
        assert!(result.lifelong_basis.is_none());
        assert!(result.remaining.is_none());
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let form = RawForm::from_pairs([("premium1", "9000000000000000000"), ("payCount", "10")]).unwrap();
        let result = BreakEvenEngine::new(CalculatorMode::CountBased).quote(&form, today()).result;
        assert_eq!(result.total_premium, i64::MAX);
    }
}

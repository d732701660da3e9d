//! Plain-text result summaries
//!
//! Builds the labeled, one-metric-per-line text a user copies out of a
//! calculator, plus the short sentence shown under the result.

use crate::calculator::{BreakEven, CalculatorMode, Quote};
use crate::format::{format_count, format_months, to_currency_label};

/// Full copy-out summary for a quote
pub fn copy_text(quote: &Quote) -> String {
    let result = &quote.result;
    let mut lines: Vec<String> = Vec::new();

    if !quote.name.is_empty() {
        lines.push(format!("{}님", quote.name));
    }

    match result.mode {
        CalculatorMode::CountBased => {
            lines.push("간병인보험 손익분기점 계산 결과".to_string());
            if let Some(age) = result.age {
                lines.push(format!("현재 나이: {}세", age));
            }
            lines.push(format!("월보험료: {}", to_currency_label(result.monthly_premium)));
            lines.push(format!("납입 횟수: {}회", result.pay_count));
            lines.push(format!("종신 기준: {}", basis_label(quote)));
            let daily = if result.payout > 0 {
                format!("{} / 일", to_currency_label(result.payout))
            } else {
                "-".to_string()
            };
            lines.push(format!("일 지급 금액: {}", daily));
            lines.push(format!("총보험료: {}", to_currency_label(result.total_premium)));
            let break_even = match result.break_even {
                Some(BreakEven::CountBased { days, months }) => format!("{}일({}달)", days, months),
                _ => "계산 불가(일 지급 금액 확인)".to_string(),
            };
            lines.push(format!("손익분기: {}", break_even));
        }
        CalculatorMode::PensionStyle => {
            lines.push("장기요양 치매 보험계산기 결과".to_string());
            if let Some(age) = result.age {
                lines.push(format!("현재 나이: {}세", age));
            }
            lines.push(format!("월 보험료(합계): {}", to_currency_label(result.monthly_premium)));
            lines.push(format!("납입 횟수: {}회", result.pay_count));
            lines.push(format!("총 납부 예정 금액: {}", to_currency_label(result.total_premium)));
            lines.push(format!("월 연금 수령액(합계): {}", to_currency_label(result.payout)));
            let break_even = match result.break_even {
                Some(BreakEven::PensionStyle { months_rounded, days, .. }) => {
                    format!("{}달({}일)", format_months(months_rounded), days)
                }
                _ => "계산 불가(월 연금 수령액 확인)".to_string(),
            };
            lines.push(format!("손익분기점: {}", break_even));
        }
    }

    if let Some(remaining) = &result.remaining {
        lines.push(format!(
            "앞으로 남은 날(추정): 종신 {}세 기준 {}까지 {}일",
            remaining.lifelong_basis.years(),
            remaining.target_date_label,
            remaining.remaining_days
        ));
    }

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// One-sentence takeaway, or `None` when there is nothing to summarize
pub fn one_line_summary(quote: &Quote) -> Option<String> {
    let result = &quote.result;
    match (result.mode, result.break_even) {
        (CalculatorMode::CountBased, Some(BreakEven::CountBased { days, .. })) => {
            if result.remaining.is_some() {
                Some(format!(
                    "앞으로 남은 날 대비, {}일만 입원하면 손익분기점에 도달해요.",
                    format_count(days)
                ))
            } else {
                Some(format!("{}일만 입원하면 손익분기점에 도달해요.", format_count(days)))
            }
        }
        (CalculatorMode::PensionStyle, Some(BreakEven::PensionStyle { months_rounded, days, .. }))
            if quote.is_calc_ready() =>
        {
            Some(format!(
                "매달 약 {}을 수령한다면, 약 {}달({}일) 뒤에 손익분기점에 도달해요.",
                to_currency_label(result.payout),
                format_months(months_rounded),
                days
            ))
        }
        _ => None,
    }
}

/// Note describing the remaining-lifetime assumption, or a prompt to enter an age
pub fn remaining_note(quote: &Quote) -> String {
    match &quote.result.remaining {
        Some(remaining) => format!(
            "종신 {}세 기준 {}까지 약 {}일 남았다고 가정해요.",
            remaining.lifelong_basis.years(),
            remaining.target_date_label,
            format_count(remaining.remaining_days)
        ),
        None => "* “앞으로 남은 날 대비” 계산을 보려면 현재 나이를 입력해주세요.".to_string(),
    }
}

fn basis_label(quote: &Quote) -> String {
    quote
        .result
        .lifelong_basis
        .map(|basis| basis.years().to_string())
        .unwrap_or_else(|| "-".to_string())
}

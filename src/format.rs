//! Presentation helpers: won amounts, grouped counts and one-decimal months

/// Currency suffix appended to amounts
pub const CURRENCY_SUFFIX: &str = "원";

/// Group digits in threes with `,` (ko-KR convention)
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount in won, e.g. `8400000` -> `8,400,000원`
pub fn to_currency_label(n: i64) -> String {
    format!("{}{}", format_count(n), CURRENCY_SUFFIX)
}

/// Round to one decimal place, halves away from zero
pub fn round_to_one_decimal(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

/// Months with exactly one decimal, e.g. `12.0`
pub fn format_months(months: f64) -> String {
    format!("{:.1}", months)
}

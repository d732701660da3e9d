//! Digit-only normalization applied to numeric form fields on every edit

/// Remove every character that is not an ASCII digit
///
/// A leading `-` is stripped like any other character, so `"-5"` becomes `"5"`.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

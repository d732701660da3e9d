//! Raw form data and its parsed counterpart

use super::normalize::normalize_digits;
use super::parse::{parse_field, FieldValue};
use crate::calculator::{CalculatorMode, LifelongBasis};
use crate::error::{CalcError, InvalidReason};
use std::fmt;
use std::str::FromStr;

/// Number of premium and payout inputs a form can carry
pub const MAX_COMPONENTS: usize = 3;

/// A single input on a calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Age,
    /// Premium component, 0-indexed
    Premium(usize),
    /// Payout component, 0-indexed (daily payout or monthly pension)
    Payout(usize),
    PayCount,
    LifelongBasis,
}

impl FormField {
    /// Every field a form can hold, in display order
    pub fn all() -> Vec<FormField> {
        let mut fields = vec![FormField::Name, FormField::Age];
        fields.extend((0..MAX_COMPONENTS).map(FormField::Premium));
        fields.extend((0..MAX_COMPONENTS).map(FormField::Payout));
        fields.push(FormField::PayCount);
        fields.push(FormField::LifelongBasis);
        fields
    }

    /// Whether edits to this field are reduced to digits
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FormField::Name)
    }

    pub fn key(&self) -> String {
        match self {
            FormField::Name => "name".to_string(),
            FormField::Age => "age".to_string(),
            FormField::Premium(i) => format!("premium{}", i + 1),
            FormField::Payout(i) => format!("payout{}", i + 1),
            FormField::PayCount => "payCount".to_string(),
            FormField::LifelongBasis => "lifelongBasis".to_string(),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for FormField {
    type Err = CalcError;

    /// Accepts the generic keys plus the field names used by the caregiver
    /// and long-term-care forms (`monthlyPremium`, `dailyPay`, `premiumTool`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "name" => FormField::Name,
            "age" => FormField::Age,
            "payCount" | "pay_count" => FormField::PayCount,
            "lifelongBasis" | "lifelong_basis" => FormField::LifelongBasis,
            "monthlyPremium" | "monthly_premium" | "premiumTool" => FormField::Premium(0),
            "premiumDaycare" => FormField::Premium(1),
            "premiumHome" => FormField::Premium(2),
            "dailyPay" | "daily_pay" | "receiveTool" => FormField::Payout(0),
            "receiveDaycare" => FormField::Payout(1),
            "receiveHome" => FormField::Payout(2),
            other => {
                let indexed = |prefix: &str| {
                    other
                        .strip_prefix(prefix)
                        .and_then(|n| n.parse::<usize>().ok())
                        .filter(|n| (1..=MAX_COMPONENTS).contains(n))
                        .map(|n| n - 1)
                };
                if let Some(i) = indexed("premium") {
                    FormField::Premium(i)
                } else if let Some(i) = indexed("payout") {
                    FormField::Payout(i)
                } else {
                    return Err(CalcError::UnknownField(other.to_string()));
                }
            }
        };
        Ok(field)
    }
}

/// Form contents exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawForm {
    pub name: String,

    pub age: String,

    pub premiums: [String; MAX_COMPONENTS],

    pub payouts: [String; MAX_COMPONENTS],

    pub pay_count: String,

    pub lifelong_basis: String,
}

fn default_lifelong_basis() -> String {
    LifelongBasis::default().years().to_string()
}

impl Default for RawForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            premiums: Default::default(),
            payouts: Default::default(),
            pay_count: String::new(),
            lifelong_basis: default_lifelong_basis(),
        }
    }
}

impl RawForm {
    /// Build a form from `(field, value)` pairs, storing values verbatim
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CalcError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = RawForm::default();
        for (key, value) in pairs {
            let field: FormField = key.as_ref().parse()?;
            form.set(field, value);
        }
        Ok(form)
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Premium(i) => self.premiums.get(i).map(String::as_str).unwrap_or(""),
            FormField::Payout(i) => self.payouts.get(i).map(String::as_str).unwrap_or(""),
            FormField::PayCount => &self.pay_count,
            FormField::LifelongBasis => &self.lifelong_basis,
        }
    }

    /// Store a value verbatim. Component indices past the last slot are ignored.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Premium(i) => {
                if let Some(slot) = self.premiums.get_mut(i) {
                    *slot = value;
                }
            }
            FormField::Payout(i) => {
                if let Some(slot) = self.payouts.get_mut(i) {
                    *slot = value;
                }
            }
            FormField::PayCount => self.pay_count = value,
            FormField::LifelongBasis => self.lifelong_basis = value,
        }
    }

    /// Apply an edit the way an input control would: numeric fields keep digits only
    pub fn input(&mut self, field: FormField, value: &str) {
        if field.is_numeric() {
            self.set(field, normalize_digits(value));
        } else {
            self.set(field, value);
        }
    }

    /// Builder form of [`RawForm::input`]
    pub fn with(mut self, field: FormField, value: &str) -> Self {
        self.input(field, value);
        self
    }
}

/// Every form field parsed and range-checked for a given mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInputs {
    pub age: FieldValue,
    pub premiums: [FieldValue; MAX_COMPONENTS],
    pub payouts: [FieldValue; MAX_COMPONENTS],
    pub pay_count: FieldValue,
    pub lifelong_basis: FieldValue,
}

impl ParsedInputs {
    pub fn parse(form: &RawForm, mode: CalculatorMode) -> Self {
        let payout_min = mode.payout_minimum();

        Self {
            age: parse_field(&form.age).at_least(0),
            premiums: form.premiums.each_ref().map(|raw| parse_field(raw).at_least(0)),
            payouts: form.payouts.each_ref().map(|raw| parse_field(raw).at_least(payout_min)),
            pay_count: parse_field(&form.pay_count).at_least(0),
            lifelong_basis: parse_field(&form.lifelong_basis).and_then(|years| {
                match LifelongBasis::from_years(years) {
                    Some(_) => FieldValue::Value(years),
                    None => FieldValue::Invalid(InvalidReason::UnsupportedLifelongBasis(years)),
                }
            }),
        }
    }

    pub fn get(&self, field: FormField) -> FieldValue {
        match field {
            FormField::Name => FieldValue::Absent,
            FormField::Age => self.age,
            FormField::Premium(i) => self.premiums.get(i).copied().unwrap_or_default(),
            FormField::Payout(i) => self.payouts.get(i).copied().unwrap_or_default(),
            FormField::PayCount => self.pay_count,
            FormField::LifelongBasis => self.lifelong_basis,
        }
    }

    /// Sum of premium components
    pub fn monthly_premium(&self) -> i64 {
        FieldValue::sum(&self.premiums)
    }

    /// Sum of payout components
    pub fn payout_total(&self) -> i64 {
        FieldValue::sum(&self.payouts)
    }

    /// Lifelong basis to estimate against; blank falls back to the form default,
    /// an unsupported value yields `None`
    pub fn lifelong_basis(&self) -> Option<LifelongBasis> {
        match self.lifelong_basis {
            FieldValue::Absent => Some(LifelongBasis::default()),
            FieldValue::Value(years) => LifelongBasis::from_years(years),
            FieldValue::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip() {
        for field in FormField::all() {
            assert_eq!(field.key().parse::<FormField>().unwrap(), field);
        }
    }

    #[test]
    fn test_legacy_field_names() {
        assert_eq!("monthlyPremium".parse::<FormField>().unwrap(), FormField::Premium(0));
        assert_eq!("dailyPay".parse::<FormField>().unwrap(), FormField::Payout(0));
        assert_eq!("receiveHome".parse::<FormField>().unwrap(), FormField::Payout(2));
        assert!("premium4".parse::<FormField>().is_err());
        assert!("premium0".parse::<FormField>().is_err());
    }

    #[test]
    fn test_input_normalizes_numeric_fields() {
        let form = RawForm::default()
            .with(FormField::Name, "홍길동 1")
            .with(FormField::Premium(0), "35,000원")
            .with(FormField::Age, "-45");

        assert_eq!(form.name, "홍길동 1");
        assert_eq!(form.premiums[0], "35000");
        assert_eq!(form.age, "45");
    }

    #[test]
    fn test_from_pairs_keeps_values_verbatim() {
        let form = RawForm::from_pairs([("age", "-3"), ("dailyPay", "150000")]).unwrap();
        assert_eq!(form.age, "-3");
        assert_eq!(form.payouts[0], "150000");
        assert_eq!(form.lifelong_basis, "90");

        assert!(RawForm::from_pairs([("premium", "1")]).is_err());
    }

    #[test]
    fn test_parse_applies_mode_minimums() {
        let form = RawForm::from_pairs([("payout1", "0"), ("age", "-1")]).unwrap();

        let count_based = ParsedInputs::parse(&form, CalculatorMode::CountBased);
        assert!(count_based.payouts[0].is_invalid());
        assert!(count_based.age.is_invalid());

        let pension = ParsedInputs::parse(&form, CalculatorMode::PensionStyle);
        assert_eq!(pension.payouts[0], FieldValue::Value(0));
    }

    #[test]
    fn test_lifelong_basis_parsing() {
        let mut form = RawForm::default();
        let parsed = ParsedInputs::parse(&form, CalculatorMode::CountBased);
        assert_eq!(parsed.lifelong_basis(), Some(LifelongBasis::Ninety));

        form.set(FormField::LifelongBasis, "100");
        let parsed = ParsedInputs::parse(&form, CalculatorMode::CountBased);
        assert_eq!(parsed.lifelong_basis(), Some(LifelongBasis::Hundred));

        form.set(FormField::LifelongBasis, "95");
        let parsed = ParsedInputs::parse(&form, CalculatorMode::CountBased);
        assert_eq!(parsed.lifelong_basis(), None);
        assert_eq!(
            parsed.lifelong_basis,
            FieldValue::Invalid(InvalidReason::UnsupportedLifelongBasis(95))
        );

        form.set(FormField::LifelongBasis, "");
        let parsed = ParsedInputs::parse(&form, CalculatorMode::CountBased);
        assert_eq!(parsed.lifelong_basis(), Some(LifelongBasis::Ninety));
    }

    #[test]
    fn test_component_sums() {
        let form = RawForm::from_pairs([
            ("premiumTool", "12000"),
            ("premiumDaycare", "18000"),
            ("premiumHome", ""),
            ("receiveTool", "50000"),
            ("receiveDaycare", "abc"),
            ("receiveHome", "200000"),
        ])
        .unwrap();
        let parsed = ParsedInputs::parse(&form, CalculatorMode::PensionStyle);
        assert_eq!(parsed.monthly_premium(), 30_000);
        assert_eq!(parsed.payout_total(), 250_000);
    }
}

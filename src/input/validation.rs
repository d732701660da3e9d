//! Field-level validation messages

use super::form::{FormField, ParsedInputs};
use crate::calculator::CalculatorMode;
use crate::error::InvalidReason;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Invalid fields of a form, keyed by field
///
/// Blank fields never appear here; they are absent, not invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    mode: CalculatorMode,
    errors: BTreeMap<FormField, InvalidReason>,
}

impl FieldErrors {
    /// Collect every invalid field from parsed inputs
    pub fn from_parsed(parsed: &ParsedInputs, mode: CalculatorMode) -> Self {
        let errors = FormField::all()
            .into_iter()
            .filter_map(|field| parsed.get(field).invalid_reason().map(|reason| (field, reason)))
            .collect();
        Self { mode, errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn reason(&self, field: FormField) -> Option<InvalidReason> {
        self.errors.get(&field).copied()
    }

    /// User-facing message for an invalid field
    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).map(|_| field_message(self.mode, field))
    }

    /// `(field, message)` pairs in display order
    pub fn messages(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors
            .keys()
            .map(move |&field| (field, field_message(self.mode, field)))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in self.messages() {
            map.serialize_entry(&field.key(), message)?;
        }
        map.end()
    }
}

fn field_message(mode: CalculatorMode, field: FormField) -> &'static str {
    match (mode, field) {
        (_, FormField::Age) => "현재 나이는 0 이상 정수로 입력해주세요.",
        (_, FormField::PayCount) => "납입 횟수는 0 이상 정수로 입력해주세요.",
        (_, FormField::LifelongBasis) => "종신 기준은 90 또는 100만 선택할 수 있어요.",
        (CalculatorMode::CountBased, FormField::Premium(_)) => "월보험료는 0 이상 정수로 입력해주세요.",
        (CalculatorMode::CountBased, FormField::Payout(_)) => "일 지급 금액은 1 이상 정수로 입력해주세요.",
        (CalculatorMode::PensionStyle, FormField::Premium(_) | FormField::Payout(_)) => {
            "0 이상 정수로 입력해주세요."
        }
        (_, FormField::Name) => "",
    }
}

/// Parse and validate a form in one step
pub fn validate(form: &super::RawForm, mode: CalculatorMode) -> FieldErrors {
    FieldErrors::from_parsed(&ParsedInputs::parse(form, mode), mode)
}

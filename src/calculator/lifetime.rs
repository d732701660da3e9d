//! Remaining-lifetime estimate against a lifelong basis age
//!
//! Only the current age is known, so the birthday is assumed to be today:
//! the birth year is `today.year - age` and the horizon ends on December 31
//! of `birth year + basis`.

use crate::error::CalcError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parse a `YYYY-MM-DD` reference date
pub fn parse_reference_date(input: &str) -> Result<NaiveDate, CalcError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| CalcError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Assumed end-of-coverage age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LifelongBasis {
    Ninety,
    Hundred,
}

impl LifelongBasis {
    pub fn from_years(years: i64) -> Option<Self> {
        match years {
            90 => Some(LifelongBasis::Ninety),
            100 => Some(LifelongBasis::Hundred),
            _ => None,
        }
    }

    pub fn years(&self) -> u32 {
        match self {
            LifelongBasis::Ninety => 90,
            LifelongBasis::Hundred => 100,
        }
    }
}

impl Default for LifelongBasis {
    fn default() -> Self {
        LifelongBasis::Ninety
    }
}

impl TryFrom<u32> for LifelongBasis {
    type Error = String;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        LifelongBasis::from_years(i64::from(years))
            .ok_or_else(|| format!("unsupported lifelong basis: {}", years))
    }
}

impl From<LifelongBasis> for u32 {
    fn from(basis: LifelongBasis) -> u32 {
        basis.years()
    }
}

/// Days left until December 31 of the year the lifelong basis age is reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainingLifetime {
    pub lifelong_basis: LifelongBasis,
    pub assumed_birth_year: i32,
    pub target_year: i32,
    pub target_date: NaiveDate,
    /// Never negative; a target already passed gives 0
    pub remaining_days: i64,
    /// `YYYY.12.31`
    pub target_date_label: String,
}

/// Estimate remaining days from `today` for someone currently `age` years old
///
/// Returns `None` only when the target year falls outside the calendar range.
pub fn estimate_remaining_lifetime(
    age: i64,
    basis: LifelongBasis,
    today: NaiveDate,
) -> Option<RemainingLifetime> {
    let assumed_birth_year = i64::from(today.year()).checked_sub(age)?;
    let target_year = assumed_birth_year.checked_add(i64::from(basis.years()))?;

    let assumed_birth_year = i32::try_from(assumed_birth_year).ok()?;
    let target_year = i32::try_from(target_year).ok()?;
    let target_date = NaiveDate::from_ymd_opt(target_year, 12, 31)?;

    let remaining_days = target_date.signed_duration_since(today).num_days().max(0);

    Some(RemainingLifetime {
        lifelong_basis: basis,
        assumed_birth_year,
        target_year,
        target_date,
        remaining_days,
        target_date_label: format!("{}.12.31", target_year),
    })
}

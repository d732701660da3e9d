//! Load quote forms from CSV
//!
//! Headers are matched through `FormField` so a CSV accepts the same names as
//! `RawForm::from_pairs` (`premium1`, `payCount`, `dailyPay`, ...). A `mode`
//! column is required; any other unrecognized header fails the load.

use super::form::{FormField, RawForm};
use crate::calculator::CalculatorMode;
use crate::error::CalcError;
use csv::Reader;
use std::path::Path;

/// One CSV row ready for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// 1-indexed data row (header excluded)
    pub row: usize,
    pub mode: CalculatorMode,
    pub form: RawForm,
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Mode,
    Field(FormField),
}

fn parse_header(header: &str) -> Result<Column, CalcError> {
    match header.trim() {
        "mode" => Ok(Column::Mode),
        other => other
            .parse::<FormField>()
            .map(Column::Field)
            .map_err(|_| CalcError::UnknownColumn(other.to_string())),
    }
}

/// Load quotes from a CSV file
pub fn load_quotes<P: AsRef<Path>>(path: P) -> Result<Vec<QuoteRecord>, CalcError> {
    load_quotes_from_reader(Reader::from_path(path)?)
}

/// Load quotes from any reader (e.g., string buffer, network stream)
pub fn load_quotes_from_reader<R: std::io::Read>(mut csv_reader: Reader<R>) -> Result<Vec<QuoteRecord>, CalcError> {
    let columns = csv_reader
        .headers()?
        .iter()
        .map(parse_header)
        .collect::<Result<Vec<_>, _>>()?;

    if !columns.iter().any(|c| matches!(c, Column::Mode)) {
        return Err(CalcError::MissingColumn("mode"));
    }

    let mut quotes = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = result?;

        let mut mode = None;
        let mut form = RawForm::default();
        for (column, value) in columns.iter().zip(record.iter()) {
            match column {
                Column::Mode => {
                    let parsed = value.parse::<CalculatorMode>().map_err(|e| CalcError::InvalidRow {
                        row,
                        source: Box::new(e),
                    })?;
                    mode = Some(parsed);
                }
                // Blank basis keeps the form default
                Column::Field(FormField::LifelongBasis) if value.is_empty() => {}
                Column::Field(field) => form.set(*field, value),
            }
        }

        let mode = mode.ok_or(CalcError::MissingColumn("mode"))?;
        quotes.push(QuoteRecord { row, mode, form });
    }

    Ok(quotes)
}

/// Load quotes from CSV text held in memory
pub fn load_quotes_from_str(data: &str) -> Result<Vec<QuoteRecord>, CalcError> {
    load_quotes_from_reader(Reader::from_reader(data.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{BreakEven, BreakEvenEngine};
    use chrono::NaiveDate;

    #[test]
    fn test_form_style_headers_are_accepted() {
        let quotes = load_quotes_from_str("mode,name,premium1,payout1,payCount\ncaregiver,kim,35000,150000,240\n").unwrap();
        assert_eq!(quotes.len(), 1);

        let quote = &quotes[0];
        assert_eq!(quote.row, 1);
        assert_eq!(quote.mode, CalculatorMode::CountBased);
        assert_eq!(quote.form.pay_count, "240");

        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let result = BreakEvenEngine::new(quote.mode).quote(&quote.form, today).result;
        assert_eq!(result.total_premium, 8_400_000);
        assert_eq!(result.break_even, Some(BreakEven::CountBased { days: 56, months: 1 }));
    }

    #[test]
    fn test_snake_case_and_legacy_headers() {
        let data = "mode,age,monthlyPremium,dailyPay,pay_count,lifelong_basis\n\
                    caregiver,45,35000,150000,240,100\n";
        let quote = &load_quotes_from_str(data).unwrap()[0];
        assert_eq!(quote.form.premiums[0], "35000");
        assert_eq!(quote.form.payouts[0], "150000");
        assert_eq!(quote.form.lifelong_basis, "100");
    }

    #[test]
    fn test_unknown_header_fails_load() {
        let err = load_quotes_from_str("mode,premium1,payCont\ncaregiver,35000,240\n").unwrap_err();
        assert!(matches!(err, CalcError::UnknownColumn(ref c) if c == "payCont"), "{:?}", err);
    }

    #[test]
    fn test_blank_lifelong_basis_defaults_to_90() {
        let data = "mode,age,lifelong_basis\nltc-dementia,45,\nltc-dementia,45,100\n";
        let quotes = load_quotes_from_str(data).unwrap();
        assert_eq!(quotes[0].form.lifelong_basis, "90");
        assert_eq!(quotes[1].form.lifelong_basis, "100");
        assert_eq!(quotes[1].row, 2);
    }

    #[test]
    fn test_mode_column_required() {
        let err = load_quotes_from_str("premium1,payout1\n1,2\n").unwrap_err();
        assert!(matches!(err, CalcError::MissingColumn("mode")));
    }

    #[test]
    fn test_bad_mode_reports_row() {
        let err = load_quotes_from_str("mode,premium1\ncaregiver,1\nannuity,2\n").unwrap_err();
        match err {
            CalcError::InvalidRow { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, CalcError::UnknownMode(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_values_kept_verbatim() {
        let quote = &load_quotes_from_str("mode,age\ncaregiver,-5\n").unwrap()[0];
        assert_eq!(quote.form.age, "-5");
    }
}

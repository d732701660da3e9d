//! Error types shared by the input layer and the binaries

use thiserror::Error;

/// Why a lexically present field could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Not a finite number after coercion
    #[error("not a finite number")]
    NotANumber,

    /// Parsed fine but below the field's allowed minimum
    #[error("value {value} is below the minimum of {min}")]
    BelowMinimum { value: i64, min: i64 },

    /// Lifelong basis outside {90, 100}
    #[error("lifelong basis {0} is not supported (expected 90 or 100)")]
    UnsupportedLifelongBasis(i64),
}

/// Errors raised when building a form from external data
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unknown calculator mode: {0}")]
    UnknownMode(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("unknown CSV column: {0}")]
    UnknownColumn(String),

    #[error("missing required CSV column: {0}")]
    MissingColumn(&'static str),

    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<CalcError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid reference date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

//! Form input handling: digit normalization, safe parsing, validation and CSV loading

mod form;
pub mod loader;
mod normalize;
mod parse;
pub mod validation;

pub use form::{FormField, ParsedInputs, RawForm, MAX_COMPONENTS};
pub use loader::{load_quotes, load_quotes_from_reader, load_quotes_from_str, QuoteRecord};
pub use normalize::normalize_digits;
pub use parse::{parse_field, parse_int, FieldValue};
pub use validation::{validate, FieldErrors};

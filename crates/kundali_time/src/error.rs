//! Error types for civil time conversion.

use thiserror::Error;

/// Errors from civil date/time validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its canonical range.
    #[error("invalid date: {0}")]
    InvalidDate(&'static str),
    /// UTC offset outside [-12, +14] hours.
    #[error("timezone offset {0} h outside [-12, +14]")]
    InvalidTimezone(f64),
}

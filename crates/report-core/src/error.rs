//! Client-input error taxonomy

use thiserror::Error;

/// Result type for request validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors produced while validating raw report-request input.
///
/// Display strings are user-facing and are passed through verbatim in
/// HTTP 400 responses; inner values exist for server-side logging only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the required fields is absent or empty
    #[error("All fields are required")]
    MissingField(&'static str),

    /// The currency code is not in the supported set
    #[error("Invalid currency selected")]
    InvalidCurrency(String),

    /// A date field does not parse as `YYYY-MM-DD`
    #[error("Invalid date format")]
    InvalidDateFormat(String),

    /// The start date is not strictly earlier than the end date
    #[error("End date must be after start date")]
    InvalidDateRange,
}

//! Reporting item validation errors
//!
//! One variant per invariant class. The builder reports the **first**
//! violated invariant in its documented field order, so a caller fixing
//! errors one by one converges on a valid item.

use thiserror::Error;

/// Errors raised when building a reporting item
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// No exchange timestamp was supplied
    #[error("exchange instant is missing")]
    MissingExchangeInstant,

    /// No direction was supplied
    #[error("direction is missing")]
    MissingDirection,

    /// A required string field was never set
    #[error("{field} is missing")]
    MissingField { field: &'static str },

    /// A required string field was set to an empty value
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A field exceeds its maximum length
    #[error("{field} exceeds the maximum length of {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    /// A country code is not two characters of [0-9A-Z]
    #[error("{field} '{value}' is not a valid two-character country code")]
    InvalidCountryCode { field: &'static str, value: String },

    /// A receiving item was built without a C4 country code
    #[error("C4 country code is required for receiving items")]
    MissingC4CountryCode,

    /// A sending item was built with a C4 country code
    #[error("C4 country code must be absent for sending items")]
    UnexpectedC4CountryCode,
}

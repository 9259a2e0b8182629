use thiserror::Error;

use super::Country;

/// Errors from the strict entry points of this crate.
///
/// Handler operations never fail; these only surface when a caller asks for a
/// plate that must be valid, or parses a country name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LicensePlateError {
    /// The value is empty or whitespace only.
    #[error("license plate value must not be empty")]
    Empty,

    /// The normalized value fails the rules of the country's handler.
    #[error("invalid license plate '{value}' for country {country}")]
    Invalid {
        /// Normalized value that failed validation.
        value: String,
        /// Country whose rules were applied.
        country: Country,
    },

    /// No country matches the given name or code.
    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

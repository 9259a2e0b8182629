//! Country-specific normalization and validation of license plate values.
//!
//! Every handler implements [`LicensePlateHandler`]. [`DefaultLicensePlateHandler`]
//! covers unspecified or unsupported countries; country handlers sit next to it
//! and are selected through [`handler_for`] or [`Country::handler`].
//!
//! # Example
//!
//! ```rust
//! use kennzeichen::{Country, handler_for};
//!
//! let fallback = handler_for(None);
//! assert_eq!(fallback.normalize("ab  12"), "AB-12");
//! assert!(fallback.validate("ab  12"));
//!
//! let unspecified = handler_for(Some(Country::Unspecified));
//! assert!(!unspecified.validate("AB#12"));
//! ```

mod default;
#[cfg(feature = "swiss")]
mod swiss;

pub use default::DefaultLicensePlateHandler;
#[cfg(feature = "swiss")]
pub use swiss::{CANTONS, SwissLicensePlateHandler, is_known_canton};

use crate::core::Country;

/// Normalization and validation rules for the license plates of one country.
///
/// Both operations are total: any string, including the empty one, yields a
/// normalized value or a verdict. `validate` always checks the value produced
/// by the same handler's `normalize`, never the raw input.
pub trait LicensePlateHandler: Send + Sync + std::fmt::Debug {
    /// Canonical form of `value`. Idempotent and deterministic.
    fn normalize(&self, value: &str) -> String;

    /// Whether the normalized form of `value` is a valid plate for this handler.
    fn validate(&self, value: &str) -> bool;
}

/// Strip leading and trailing whitespace. Every handler trims before anything else.
pub fn trim(value: &str) -> &str {
    value.trim()
}

static DEFAULT: DefaultLicensePlateHandler = DefaultLicensePlateHandler;
#[cfg(feature = "swiss")]
static SWISS: SwissLicensePlateHandler = SwissLicensePlateHandler;

/// Select the handler for `country`; an absent country selects the default handler.
pub fn handler_for(country: Option<Country>) -> &'static dyn LicensePlateHandler {
    let handler: &'static dyn LicensePlateHandler = match country {
        #[cfg(feature = "swiss")]
        Some(Country::Switzerland) => &SWISS,
        _ => &DEFAULT,
    };
    tracing::trace!(?country, ?handler, "selected license plate handler");
    handler
}

//! Country tags used to select a license plate handler.

use std::fmt;
use std::str::FromStr;

use super::LicensePlateError;
use crate::handler::{LicensePlateHandler, handler_for};

/// Country whose license plate rules apply.
///
/// Adding a country means adding a variant here and a handler in
/// [`crate::handler`]; nothing else changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Country {
    /// No country given; the default handler applies.
    #[default]
    Unspecified,
    Switzerland,
}

impl Country {
    /// Every variant, in declaration order.
    pub const ALL: &'static [Country] = &[Country::Unspecified, Country::Switzerland];

    /// Handler for this country. Never fails: countries without dedicated
    /// rules get the default handler.
    pub fn handler(self) -> &'static dyn LicensePlateHandler {
        handler_for(Some(self))
    }

    /// ISO 3166-1 alpha-2 code, if the variant names a real country.
    pub fn iso_code(self) -> Option<&'static str> {
        match self {
            Country::Unspecified => None,
            Country::Switzerland => Some("CH"),
        }
    }

    /// Look up a country by ISO 3166-1 alpha-2 code (case-insensitive).
    /// Unknown codes map to [`Country::Unspecified`].
    pub fn from_iso_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "CH" => Country::Switzerland,
            _ => Country::Unspecified,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Country::Unspecified => "UNSPECIFIED",
            Country::Switzerland => "SWITZERLAND",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = LicensePlateError;

    /// Accepts an ISO code (`"CH"`) or a variant name (`"switzerland"`),
    /// ignoring case. `"none"` is an alias for [`Country::Unspecified`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "" | "NONE" | "UNSPECIFIED" => Ok(Country::Unspecified),
            "CH" | "SWITZERLAND" => Ok(Country::Switzerland),
            _ => Err(LicensePlateError::UnknownCountry(s.to_string())),
        }
    }
}

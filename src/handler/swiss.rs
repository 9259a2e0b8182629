//! Swiss license plates: a two-letter canton code followed by up to six digits.
//!
//! Examples: `FR 24539`, `SZ 65726`, `ZH 445789`, `GR 123`.
//!
//! Plates with letter suffixes (dealer plates) and plates for official or
//! military use are not covered and never validate.
//!
//! ```rust
//! use kennzeichen::{Country, LicensePlateHandler, SwissLicensePlateHandler, handler_for, is_known_canton};
//!
//! let handler = SwissLicensePlateHandler;
//! assert_eq!(handler.normalize("FR-245 39"), "FR 24539");
//! assert_eq!(handler.normalize("fr24539"), "fr 24539");
//! assert!(handler.validate("FR 24539"));
//! assert!(!handler.validate("fr 24539"));
//! assert!(!handler.validate("ZH12A"));
//!
//! assert!(handler_for(Some(Country::Switzerland)).validate("ZH-445789"));
//! assert!(is_known_canton("GR"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::{LicensePlateHandler, trim};

const CANTON_CODE_LEN: usize = 2;

static STRUCTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2} [0-9]{1,6}$").expect("static regex"));

/// The 26 Swiss canton codes. Sorted for binary search.
pub static CANTONS: &[&str] = &[
    "AG", "AI", "AR", "BE", "BL", "BS", "FR", "GE", "GL", "GR", "JU", "LU", "NE", "NW", "OW", "SG",
    "SH", "SO", "SZ", "TG", "TI", "UR", "VD", "VS", "ZG", "ZH",
];

/// Check whether `code` is a Swiss canton code. Case-sensitive: only upper case matches.
pub fn is_known_canton(code: &str) -> bool {
    CANTONS.binary_search(&code).is_ok()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwissLicensePlateHandler;

impl LicensePlateHandler for SwissLicensePlateHandler {
    /// Remove all whitespace and hyphens, then separate the canton code from
    /// the rest with a single space. Values of two characters or fewer are
    /// returned unsplit. Case is left untouched.
    fn normalize(&self, value: &str) -> String {
        let compact: Vec<char> = trim(value)
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if compact.len() <= CANTON_CODE_LEN {
            return compact.into_iter().collect();
        }

        let mut normalized = String::with_capacity(compact.len() + 1);
        normalized.extend(&compact[..CANTON_CODE_LEN]);
        normalized.push(' ');
        normalized.extend(&compact[CANTON_CODE_LEN..]);
        normalized
    }

    fn validate(&self, value: &str) -> bool {
        let normalized = self.normalize(value);

        if !STRUCTURE.is_match(&normalized) {
            tracing::debug!(value = %value, normalized = %normalized, "not a swiss plate structure");
            return false;
        }

        // structure guarantees two ASCII letters up front
        let canton = &normalized[..CANTON_CODE_LEN];
        let known = is_known_canton(canton);
        if !known {
            tracing::debug!(value = %value, canton, "unknown swiss canton");
        }
        known
    }
}

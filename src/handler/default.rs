use std::sync::LazyLock;

use regex::Regex;

use super::{LicensePlateHandler, trim};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("static regex"));
// Accepts spaces even though `normalize` never emits them.
static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}0-9\- ]*$").expect("static regex"));

/// Handler for plates without a country, or of a country without dedicated rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLicensePlateHandler;

impl LicensePlateHandler for DefaultLicensePlateHandler {
    /// Trim, turn every whitespace run into a hyphen, collapse hyphen runs and
    /// upper-case the result: `"ab  - 12"` becomes `"AB-12"`.
    fn normalize(&self, value: &str) -> String {
        let hyphenated = WHITESPACE_RUN.replace_all(trim(value), "-");
        let normalized = HYPHEN_RUN.replace_all(&hyphenated, "-").to_uppercase();

        tracing::debug!(value = %value, normalized = %normalized, "normalized license plate");

        normalized
    }

    /// Valid when the normalized value holds nothing but letters (any script),
    /// ASCII digits, hyphens and spaces.
    fn validate(&self, value: &str) -> bool {
        ALLOWED.is_match(&self.normalize(value))
    }
}

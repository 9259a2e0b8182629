//! Country-agnostic plausibility check for license plates.

use std::sync::LazyLock;

use regex::Regex;

use super::LicensePlate;

static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}0-9\-]*$").expect("static regex"));

/// Loose check that `value` could be a license plate of any country:
/// after upper-casing and removing all whitespace, only letters (any script),
/// ASCII digits and hyphens may remain.
///
/// ```rust
/// use kennzeichen::is_valid_plate;
///
/// assert!(is_valid_plate("AB 12"));
/// assert!(!is_valid_plate("AB@12"));
/// ```
pub fn is_valid_plate(value: &str) -> bool {
    let compact: String = value
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    ALLOWED.is_match(&compact)
}

/// Validation of license plates independent of any country handler.
pub trait LicensePlateValidator {
    fn is_valid(&self, plate: &LicensePlate) -> bool;
}

/// [`LicensePlateValidator`] backed by [`is_valid_plate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLicensePlateValidator;

impl LicensePlateValidator for DefaultLicensePlateValidator {
    fn is_valid(&self, plate: &LicensePlate) -> bool {
        is_valid_plate(plate.value())
    }
}

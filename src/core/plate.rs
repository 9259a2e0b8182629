use std::fmt;

use super::{Country, LicensePlateError};

/// A license plate, normalized according to the rules of its country.
///
/// The stored value is always the output of the country handler's
/// `normalize`, so two plates built from differently formatted input compare
/// equal when they denote the same plate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicensePlate {
    value: String,
    country: Country,
}

impl LicensePlate {
    /// Normalize `value` for `country`. Never fails; use [`LicensePlate::is_valid`]
    /// or [`LicensePlate::parse`] to check the result.
    pub fn new(value: impl AsRef<str>, country: Country) -> Self {
        Self {
            value: country.handler().normalize(value.as_ref()),
            country,
        }
    }

    /// Normalize `value` and require it to be a valid plate for `country`.
    pub fn parse(value: impl AsRef<str>, country: Country) -> Result<Self, LicensePlateError> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(LicensePlateError::Empty);
        }

        let plate = Self::new(value, country);
        if !plate.is_valid() {
            return Err(LicensePlateError::Invalid {
                value: plate.value,
                country,
            });
        }
        Ok(plate)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// Whether the plate is valid under its country's rules.
    pub fn is_valid(&self) -> bool {
        self.country.handler().validate(&self.value)
    }
}

impl AsRef<str> for LicensePlate {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Country, LicensePlate};

    #[derive(Serialize, Deserialize)]
    struct Repr<'a> {
        #[serde(borrow)]
        value: std::borrow::Cow<'a, str>,
        #[serde(default)]
        country: Country,
    }

    impl Serialize for LicensePlate {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Repr {
                value: self.value.as_str().into(),
                country: self.country,
            }
            .serialize(serializer)
        }
    }

    // Re-normalizes, so stored values written by older rules stay canonical.
    impl<'de> Deserialize<'de> for LicensePlate {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let repr = Repr::deserialize(deserializer)?;
            Ok(LicensePlate::new(repr.value, repr.country))
        }
    }
}

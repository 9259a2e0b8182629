//! Country tags, the license plate value type, and the country-agnostic validator.

mod country;
mod error;
mod plate;
mod validator;

pub use country::Country;
pub use error::LicensePlateError;
pub use plate::LicensePlate;
pub use validator::{DefaultLicensePlateValidator, LicensePlateValidator, is_valid_plate};

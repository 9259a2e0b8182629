//! # kennzeichen
//!
//! Normalization and validation of vehicle license plates, with
//! country-specific rules where they exist and a permissive default
//! everywhere else.
//!
//! Free-form input (mixed case, stray whitespace, repeated hyphens) is turned
//! into a canonical form by the handler selected for a [`Country`]; the same
//! handler then decides whether that form is a valid plate. No operation
//! fails: unusable input simply normalizes to something that does not validate.
//!
//! ## Quick Start
//!
//! ```rust
//! use kennzeichen::*;
//!
//! let plate = LicensePlate::new("hh  ab--1234", Country::Unspecified);
//! assert_eq!(plate.value(), "HH-AB-1234");
//! assert!(plate.is_valid());
//!
//! let err = LicensePlate::parse("ab#12", Country::Unspecified).unwrap_err();
//! assert_eq!(err.to_string(), "invalid license plate 'AB#12' for country UNSPECIFIED");
//!
//! let handler = handler_for(None);
//! assert_eq!(handler.normalize("ab  - 12"), "AB-12");
//!
//! assert!(is_valid_plate("AB 12"));
//! assert!(!is_valid_plate("AB@12"));
//! ```
//!
//! Swiss rules live in [`handler`] behind the `swiss` feature.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Country tags, plate type, default handler, generic validator |
//! | `swiss` (default) | Swiss handler with canton validation |
//! | `serde` (default) | `Serialize`/`Deserialize` for `Country` and `LicensePlate` |
//! | `all` | Everything |
//!
//! Without `swiss`, [`Country::Switzerland`] falls back to the default handler.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod handler;

// Re-export the public surface at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::handler::{DefaultLicensePlateHandler, LicensePlateHandler, handler_for};
#[cfg(feature = "swiss")]
pub use crate::handler::{SwissLicensePlateHandler, is_known_canton};

#![cfg(all(feature = "swiss", feature = "serde"))]

use kennzeichen::*;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_swiss() {
    let plate = LicensePlate::new(" sz-657 26 ", Country::Switzerland);
    insta::assert_snapshot!(plate, @"sz 65726");
    assert!(!plate.is_valid());
}

#[test]
fn new_default() {
    let plate = LicensePlate::new("  b - - mw 2024 ", Country::Unspecified);
    insta::assert_snapshot!(plate, @"B-MW-2024");
    assert!(plate.is_valid());
}

#[test]
fn parse_swiss_valid() {
    let plate = LicensePlate::parse("ZH445789", Country::Switzerland).unwrap();
    assert_eq!(plate.value(), "ZH 445789");
    assert_eq!(plate.country(), Country::Switzerland);
}

#[test]
fn parse_swiss_unknown_canton() {
    let err = LicensePlate::parse("XX 1234", Country::Switzerland).unwrap_err();
    insta::assert_snapshot!(err, @"invalid license plate 'XX 1234' for country SWITZERLAND");
}

#[test]
fn parse_empty() {
    let err = LicensePlate::parse("", Country::Switzerland).unwrap_err();
    assert_eq!(err, LicensePlateError::Empty);
}

#[test]
fn parse_from_iso_code() {
    let country: Country = "ch".parse().unwrap();
    assert!(LicensePlate::parse("GR 123", country).is_ok());
}

#[test]
fn unknown_country_name() {
    let err = "Atlantis".parse::<Country>().unwrap_err();
    insta::assert_snapshot!(err, @"unknown country: Atlantis");
}

// ---------------------------------------------------------------------------
// Generic validator
// ---------------------------------------------------------------------------

#[test]
fn generic_validator_on_plates() {
    let validator = DefaultLicensePlateValidator;
    assert!(validator.is_valid(&LicensePlate::new("FR 24539", Country::Switzerland)));
    assert!(!validator.is_valid(&LicensePlate::new("FR@24539", Country::Unspecified)));
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn country_serializes_as_name() {
    assert_eq!(
        serde_json::to_string(&Country::Switzerland).unwrap(),
        r#""SWITZERLAND""#
    );
    assert_eq!(
        serde_json::from_str::<Country>(r#""UNSPECIFIED""#).unwrap(),
        Country::Unspecified
    );
}

#[test]
fn plate_serializes_value_and_country() {
    let plate = LicensePlate::new("FR24539", Country::Switzerland);
    let json = serde_json::to_string(&plate).unwrap();
    insta::assert_snapshot!(json, @r#"{"value":"FR 24539","country":"SWITZERLAND"}"#);
}

#[test]
fn plate_deserialization_normalizes() {
    let plate: LicensePlate =
        serde_json::from_str(r#"{"value":"zh-445-789","country":"SWITZERLAND"}"#).unwrap();
    assert_eq!(plate.value(), "zh 445789");

    let plate: LicensePlate = serde_json::from_str(r#"{"value":"ab  12"}"#).unwrap();
    assert_eq!(plate.value(), "AB-12");
    assert_eq!(plate.country(), Country::Unspecified);
}

#[test]
fn plate_serde_preserves_plate() {
    let plate = LicensePlate::new("ZH 445789", Country::Switzerland);
    let json = serde_json::to_value(&plate).unwrap();
    let back: LicensePlate = serde_json::from_value(json).unwrap();
    assert_eq!(back, plate);
}

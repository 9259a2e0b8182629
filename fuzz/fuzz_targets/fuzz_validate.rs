#![no_main]

use kennzeichen::{Country, LicensePlate, is_valid_plate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine.
        let _ = is_valid_plate(s);
        for country in Country::ALL {
            let _ = LicensePlate::parse(s, *country);
        }
    }
});

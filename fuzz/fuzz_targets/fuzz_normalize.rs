#![no_main]

use kennzeichen::{Country, handler_for};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Normalizing twice must give the same value as normalizing once.
        for country in Country::ALL {
            let handler = handler_for(Some(*country));
            let once = handler.normalize(s);
            assert_eq!(handler.normalize(&once), once);
        }
    }
});

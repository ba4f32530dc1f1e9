#![no_main]

use libfuzzer_sys::fuzz_target;
use research_portal::route::Route;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(route) = Route::parse(raw) {
            // Canonical paths always parse again
            assert!(Route::parse(&route.to_path()).is_ok());
        }
    }
});

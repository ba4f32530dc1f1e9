#![no_main]

use libfuzzer_sys::fuzz_target;
use research_portal::models::{TopTreatment, TreatmentDetail};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(detail) = serde_json::from_value::<TreatmentDetail>(json.clone()) {
            let _ = detail.search_terms("fallback");
        }
        let _ = serde_json::from_value::<Vec<TopTreatment>>(json);
    }
});

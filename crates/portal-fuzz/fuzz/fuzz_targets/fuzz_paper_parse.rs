#![no_main]

use libfuzzer_sys::fuzz_target;
use research_portal::models::{DataEnvelope, DistributionPoint, Paper};

fuzz_target!(|data: &[u8]| {
    // Result pages and histograms must never panic, only return Ok or Err
    let _ = serde_json::from_slice::<DataEnvelope<Vec<Paper>>>(data);
    let _ = serde_json::from_slice::<DataEnvelope<Vec<DistributionPoint>>>(data);
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use waterblocks::{parse_heights, ParseMode};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Neither mode may panic, and whatever survives must be non-negative
        for mode in [ParseMode::Lenient, ParseMode::Strict] {
            if let Ok(heights) = parse_heights(input, mode) {
                assert!(!heights.is_empty());
                assert!(heights.iter().all(|&h| h >= 0));
            }
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use waterblocks::compute;

fuzz_target!(|heights: Vec<i64>| {
    let result = compute(&heights);

    assert_eq!(result.water_levels.len(), heights.len());
    for (&level, &height) in result.water_levels.iter().zip(&heights) {
        assert!(level >= height);
    }
});

//! Property tests for the trapped water calculator.

use proptest::prelude::*;

use waterblocks::compute;

/// O(n²) definition: min of the prefix max and the suffix max.
fn naive_levels(h: &[i64]) -> Vec<i64> {
    (0..h.len())
        .map(|i| {
            let left = h[..=i].iter().copied().max().unwrap_or(0);
            let right = h[i..].iter().copied().max().unwrap_or(0);
            left.min(right)
        })
        .collect()
}

fn heights() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(0i64..=50, 0..=40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: water never sits below its column.
    #[test]
    fn property_levels_at_least_heights(h in heights()) {
        let result = compute(&h);
        prop_assert_eq!(result.water_levels.len(), h.len());
        for (level, height) in result.water_levels.iter().zip(&h) {
            prop_assert!(level >= height);
        }
    }

    /// PROPERTY: total is exactly the sum of per-column depths.
    #[test]
    fn property_total_is_sum_of_depths(h in heights()) {
        let result = compute(&h);
        let expected: i64 = result
            .water_levels
            .iter()
            .zip(&h)
            .map(|(level, height)| (level - height).max(0))
            .sum();
        prop_assert_eq!(result.total, expected as u64);
    }

    /// PROPERTY: levels match the prefix/suffix maximum definition.
    #[test]
    fn property_levels_match_definition(h in heights()) {
        prop_assert_eq!(compute(&h).water_levels, naive_levels(&h));
    }

    /// PROPERTY: sorted sequences trap nothing, in either direction.
    #[test]
    fn property_monotonic_traps_nothing(mut h in heights()) {
        h.sort_unstable();
        prop_assert_eq!(compute(&h).total, 0);
        h.reverse();
        prop_assert_eq!(compute(&h).total, 0);
    }

    /// PROPERTY: computing twice yields identical results.
    #[test]
    fn property_idempotent(h in heights()) {
        prop_assert_eq!(compute(&h), compute(&h));
    }

    /// PROPERTY: mirroring the columns mirrors the levels and keeps the total.
    #[test]
    fn property_mirror_symmetry(h in heights()) {
        let result = compute(&h);
        let mut mirrored = h.clone();
        mirrored.reverse();
        let mirrored_result = compute(&mirrored);

        let mut levels = result.water_levels.clone();
        levels.reverse();
        prop_assert_eq!(mirrored_result.water_levels, levels);
        prop_assert_eq!(mirrored_result.total, result.total);
    }

    /// PROPERTY: negative input is not rejected and still satisfies the definition.
    #[test]
    fn property_negative_heights_consistent(
        h in proptest::collection::vec(-50i64..=50, 0..=30)
    ) {
        let result = compute(&h);
        prop_assert_eq!(result.water_levels, naive_levels(&h));
    }
}

#[test]
fn known_examples() {
    let result = compute(&[4, 2, 0, 3, 2, 5]);
    assert_eq!(result.total, 9);
    assert_eq!(result.water_levels, vec![4, 4, 4, 4, 4, 5]);

    assert_eq!(compute(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]).total, 6);
    assert_eq!(compute(&[1, 2, 3, 4]).total, 0);
    assert_eq!(compute(&[4, 3, 2, 1]).total, 0);

    let empty = compute(&[]);
    assert_eq!(empty.total, 0);
    assert!(empty.water_levels.is_empty());

    let single = compute(&[5]);
    assert_eq!(single.total, 0);
    assert_eq!(single.water_levels, vec![5]);
}

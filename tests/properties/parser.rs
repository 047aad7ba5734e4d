//! Property tests for comma-separated height parsing.

use proptest::prelude::*;

use waterblocks::{parse_heights, BlocksError, ParseMode};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: lenient parsing never panics and only yields non-negative heights.
    #[test]
    fn property_lenient_never_panics(input in "(?s).{0,128}") {
        if let Ok(heights) = parse_heights(&input, ParseMode::Lenient) {
            prop_assert!(!heights.is_empty());
            prop_assert!(heights.iter().all(|&h| h >= 0));
        }
    }

    /// PROPERTY: strict parsing never panics.
    #[test]
    fn property_strict_never_panics(input in "(?s).{0,128}") {
        let _ = parse_heights(&input, ParseMode::Strict);
    }

    /// PROPERTY: a joined list of non-negative integers parses back exactly.
    #[test]
    fn property_strict_accepts_formatted_lists(
        values in proptest::collection::vec(0i64..=1_000_000, 1..=20),
        sep in prop_oneof![Just(","), Just(", "), Just(" , ")],
    ) {
        let input = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(sep);
        let heights = parse_heights(&input, ParseMode::Strict).unwrap();
        prop_assert_eq!(heights.as_slice(), values.as_slice());
    }

    /// PROPERTY: strict parsing rejects any list containing a negative value.
    #[test]
    fn property_strict_rejects_negatives(
        mut values in proptest::collection::vec(0i64..=100, 1..=10),
        idx in any::<proptest::sample::Index>(),
        neg in 1i64..=100,
    ) {
        let at = idx.index(values.len());
        values[at] = -neg;
        let input = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let err = parse_heights(&input, ParseMode::Strict).unwrap_err();
        let is_negative_error = matches!(err, BlocksError::NegativeHeight { index, .. } if index == at);
        prop_assert!(is_negative_error);
    }

    /// PROPERTY: lenient parsing keeps valid tokens in order and drops negatives.
    #[test]
    fn property_lenient_filters_negatives(
        values in proptest::collection::vec(-100i64..=100, 1..=20),
    ) {
        let input = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let kept: Vec<i64> = values.iter().copied().filter(|&v| v >= 0).collect();

        match parse_heights(&input, ParseMode::Lenient) {
            Ok(heights) => prop_assert_eq!(heights.as_slice(), kept.as_slice()),
            Err(BlocksError::NoValidHeights) => prop_assert!(kept.is_empty()),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

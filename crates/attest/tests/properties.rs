//! Property-based tests for the command family.
//!
//! Each command must agree with the native operator it wraps, and every
//! failure must carry a real, ordered span over its operands.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use attest::{
    assert_equal, assert_greater, assert_greater_or_equal, assert_length, assert_less,
    assert_less_or_equal, assert_not_equal, assert_str_contains,
};
use proptest::prelude::*;

/// Floats including the values where native comparison is surprising.
fn float_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
        any::<f64>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Exactly one of equal / not equal passes.
    #[test]
    fn prop_equal_not_equal_complement(a in -50i64..50, b in -50i64..50) {
        let equal = assert_equal!(a, b).is_ok();
        let not_equal = assert_not_equal!(a, b).is_ok();
        prop_assert!(equal != not_equal);
        prop_assert_eq!(equal, a == b);
    }

    /// The complement also holds for floats, NaN included.
    #[test]
    fn prop_float_equal_complement(a in float_strategy(), b in float_strategy()) {
        let equal = assert_equal!(a, b).is_ok();
        let not_equal = assert_not_equal!(a, b).is_ok();
        prop_assert!(equal != not_equal);
    }

    /// Ordering commands agree with the native operators.
    #[test]
    fn prop_ordering_matches_operators(a in float_strategy(), b in float_strategy()) {
        prop_assert_eq!(assert_less!(a, b).is_ok(), a < b);
        prop_assert_eq!(assert_less_or_equal!(a, b).is_ok(), a <= b);
        prop_assert_eq!(assert_greater!(a, b).is_ok(), a > b);
        prop_assert_eq!(assert_greater_or_equal!(a, b).is_ok(), a >= b);
    }

    /// Length passes iff the element count matches.
    #[test]
    fn prop_length_matches_len(items in prop::collection::vec(any::<u8>(), 0..20), n in 0usize..20) {
        prop_assert_eq!(assert_length!(items, n).is_ok(), items.len() == n);
    }

    /// Containment agrees with `str::contains`, and every string contains
    /// its own substrings.
    #[test]
    fn prop_str_contains_matches_contains(
        haystack in "[a-c]{0,12}",
        needle in "[a-c]{0,3}",
        cut in 0usize..12,
    ) {
        prop_assert_eq!(
            assert_str_contains!(haystack, needle).is_ok(),
            haystack.contains(needle.as_str())
        );

        let start = cut.min(haystack.len());
        let own = &haystack[start..];
        prop_assert!(assert_str_contains!(haystack, own).is_ok());
    }

    /// Every raised label spans real text of the invocation, start <= end.
    #[test]
    fn prop_failure_spans_are_ordered(a in any::<i32>(), b in any::<i32>()) {
        let results = [
            assert_equal!(a, b),
            assert_not_equal!(a, b),
            assert_less!(a, b),
            assert_greater_or_equal!(a, b),
        ];
        for result in results {
            if let Err(err) = result {
                let diag = err.diagnostic();
                prop_assert!(diag.label.start() <= diag.label.end());
                prop_assert_eq!(diag.snippet(), Some("a, b"));
            }
        }
    }
}

//! Overlap symmetry.
//!
//! The check picks the interval with the earlier start and tests only that
//! interval's end, so symmetry is not obvious from the code. These tests swap
//! the arguments and demand the same verdict, including for empty and
//! negative-count intervals. The `u128` cases cover starts on both sides of
//! `i128::MAX`, where the arithmetic has to stay exact.

use super::common::interval;
use super::oracles::oracle_overlap;
use devcheck::try_no_overlap;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn overlap_is_symmetric((a, ca) in interval(), (b, cb) in interval()) {
        prop_assert_eq!(
            try_no_overlap(a, b, ca, cb).is_ok(),
            try_no_overlap(b, a, cb, ca).is_ok()
        );
    }

    #[test]
    fn overlap_symmetric_at_type_edges(a: i64, b: i64, ca: i64, cb: i64) {
        prop_assert_eq!(
            try_no_overlap(a, b, ca, cb).is_ok(),
            try_no_overlap(b, a, cb, ca).is_ok()
        );
    }

    #[test]
    fn interval_overlaps_itself_unless_empty((a, ca) in interval()) {
        prop_assert_eq!(try_no_overlap(a, a, ca, ca).is_err(), ca > 0);
    }
}

/// Every pair of intervals with starts in -4..4 and counts in -2..5.
#[test]
fn exhaustive_small_ranges() {
    for a in -4..4 {
        for b in -4..4 {
            for ca in -2..5 {
                for cb in -2..5 {
                    let forward = try_no_overlap(a, b, ca, cb).is_err();
                    let backward = try_no_overlap(b, a, cb, ca).is_err();
                    assert_eq!(forward, backward, "[{a}, +{ca}) vs [{b}, +{cb})");
                    assert_eq!(
                        forward,
                        oracle_overlap(a, b, ca, cb),
                        "[{a}, +{ca}) vs [{b}, +{cb})"
                    );
                }
            }
        }
    }
}

/// Half-open intersection by direct comparison. An end past `u128::MAX` is
/// beyond every start.
fn wide_intersects(a: u128, b: u128, ca: u128, cb: u128) -> bool {
    let before_end = |start: u128, other: u128, count: u128| match other.checked_add(count) {
        Some(end) => start < end,
        None => true,
    };
    ca > 0 && cb > 0 && before_end(a, b, cb) && before_end(b, a, ca)
}

fn near_half_u128() -> impl Strategy<Value = u128> {
    (-64i64..64).prop_map(|offset| (1u128 << 127).wrapping_add_signed(offset as i128))
}

proptest! {
    #[test]
    fn overlap_exact_across_i128_max(
        a in near_half_u128(),
        b in near_half_u128(),
        ca in 0u128..80,
        cb in 0u128..80,
    ) {
        prop_assert_eq!(try_no_overlap(a, b, ca, cb).is_err(), wide_intersects(a, b, ca, cb));
        prop_assert_eq!(
            try_no_overlap(a, b, ca, cb).is_ok(),
            try_no_overlap(b, a, cb, ca).is_ok()
        );
    }

    #[test]
    fn overlap_matches_direct_comparison_for_u128(a: u128, b: u128, ca: u128, cb: u128) {
        prop_assert_eq!(try_no_overlap(a, b, ca, cb).is_err(), wide_intersects(a, b, ca, cb));
    }
}

#[test]
fn u128_intervals_straddling_i128_max_overlap() {
    let half = 1u128 << 127;
    assert!(try_no_overlap(half - 6, half + 1, 10, 1).is_err());
    assert!(try_no_overlap(half + 1, half - 6, 1, 10).is_err());
    assert!(try_no_overlap(half - 6, half + 4, 10, 1).is_ok());
}

#[test]
fn u128_intervals_above_i128_max_overlap() {
    let half = 1u128 << 127;
    assert!(try_no_overlap(half + 10, half + 50, 100, 1).is_err());
    assert!(try_no_overlap(half + 50, half + 10, 1, 100).is_err());
    assert!(try_no_overlap(half + 10, half + 110, 100, 1).is_ok());
}

#[test]
fn i128_intervals_at_the_top_of_the_range() {
    assert!(try_no_overlap(i128::MAX - 1, i128::MAX - 3, 1, 3).is_err());
    assert!(try_no_overlap(i128::MAX - 3, i128::MAX - 1, 3, 1).is_err());
    assert!(try_no_overlap(i128::MAX - 1, i128::MAX - 3, 1, 2).is_ok());
    assert!(try_no_overlap(i128::MIN, i128::MAX - 1, i128::MAX, 1).is_ok());
}

//! The documented guarantees of each check, as concrete cases and properties.

use devcheck::{
    try_defined_shift, try_false, try_in_range, try_index_in_bounds, try_no_overlap, try_true,
    try_valid_subrange,
};
use proptest::prelude::*;

// ============================================================================
// TRUTHINESS
// ============================================================================

proptest! {
    #[test]
    fn truthiness_polarity(b: bool) {
        prop_assert_eq!(try_true(b).is_err(), !b);
        prop_assert_eq!(try_false(b).is_err(), b);
    }
}

// ============================================================================
// BOUNDS AND SUBRANGES
// ============================================================================

#[test]
fn bounds_boundary_cases() {
    assert!(try_index_in_bounds(-1, 5).is_err());
    assert!(try_index_in_bounds(5, 5).is_err());
    assert!(try_index_in_bounds(4, 5).is_ok());
}

#[test]
fn subrange_boundary_cases() {
    // covers indices 2, 3, 4
    assert!(try_valid_subrange(2, 3, 5).is_ok());
    // would reach index 6
    assert!(try_valid_subrange(2, 4, 5).is_err());
}

#[test]
fn overlap_boundary_cases() {
    assert!(try_no_overlap(0, 3, 3, 3).is_ok());
    assert!(try_no_overlap(0, 3, 4, 3).is_err());
}

#[test]
fn bounds_accepts_usize_indices() {
    let data = vec![0u8; 10];
    for i in 0..data.len() {
        assert!(try_index_in_bounds(i, data.len()).is_ok());
    }
    assert!(try_index_in_bounds(data.len(), data.len()).is_err());
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn in_range_cases() {
    assert!(try_in_range(5, 1, 10).is_ok());
    assert!(try_in_range(11, 1, 10).is_err());
}

proptest! {
    #[test]
    fn in_range_matches_definition(v: i32, lo: i32, hi: i32) {
        prop_assume!(lo <= hi);
        prop_assert_eq!(try_in_range(v, lo, hi).is_ok(), lo <= v && v <= hi);
    }
}

// ============================================================================
// BIT SHIFTS
// ============================================================================

#[test]
fn shift_cases_for_32_bit_type() {
    assert!(try_defined_shift::<i32, _>(31).is_ok());
    assert!(try_defined_shift::<i32, _>(32).is_err());
    assert!(try_defined_shift::<i32, _>(-1).is_err());
}

proptest! {
    #[test]
    fn shift_defined_iff_below_width(amount: i32) {
        prop_assert_eq!(
            try_defined_shift::<u64, _>(amount).is_ok(),
            (0..64).contains(&amount)
        );
    }
}

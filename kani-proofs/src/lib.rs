// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the devcheck range predicates.
//!
//! This standalone crate extracts the bounds, subrange, overlap and shift
//! predicates (specialised to `i32`, widened the same way the main crate
//! widens) and proves them against their mathematical definitions.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Bounds**: the unsigned comparison accepts exactly `0 <= i < n`
//! 2. **Subrange**: accepts exactly `0 <= i < n && c >= 0 && i + c <= n`
//! 3. **Overlap symmetry**: swapping the two intervals never changes the verdict
//! 4. **Overlap exactness**: the verdict equals "some element lies in both"
//! 5. **Shift**: the unsigned comparison accepts exactly `0 <= amount < bits`

// ============================================================================
// PREDICATES (copied from src/checks/, specialised to i32)
// ============================================================================

/// `true` iff `0 <= index < length`.
pub fn in_bounds(index: i32, length: i32) -> bool {
    !(length < 0 || (index as i128 as u128) >= (length as i128 as u128))
}

/// `true` iff the subrange `[index, index + count)` fits in `length`.
pub fn valid_subrange(index: i32, count: i32, length: i32) -> bool {
    if !in_bounds(index, length) || count < 0 {
        return false;
    }
    match (index as u128).checked_add(count as u128) {
        Some(end) => end <= length as u128,
        None => false,
    }
}

/// `true` iff the two half-open intervals intersect.
pub fn overlaps(index_a: i32, index_b: i32, count_a: i32, count_b: i32) -> bool {
    let (start_a, len_a) = (index_a as i128, count_a as i128);
    let (start_b, len_b) = (index_b as i128, count_b as i128);

    if len_a <= 0 || len_b <= 0 {
        return false;
    }

    let (earlier, later) = if start_a < start_b {
        ((start_a, len_a), (start_b, len_b))
    } else {
        ((start_b, len_b), (start_a, len_a))
    };

    earlier.0 + earlier.1 > later.0
}

/// `true` iff shifting a value of `bits` width by `amount` is defined.
pub fn defined_shift(amount: i32, bits: u32) -> bool {
    (amount as i128 as u128) < bits as u128
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    #[kani::proof]
    fn verify_in_bounds_exact() {
        let index: i32 = kani::any();
        let length: i32 = kani::any();

        kani::assert(
            in_bounds(index, length) == (0 <= index && index < length),
            "Unsigned comparison must accept exactly 0 <= index < length",
        );
    }

    #[kani::proof]
    fn verify_valid_subrange_exact() {
        let index: i32 = kani::any();
        let count: i32 = kani::any();
        let length: i32 = kani::any();

        let expected = 0 <= index
            && index < length
            && count >= 0
            && (index as i64) + (count as i64) <= length as i64;

        kani::assert(
            valid_subrange(index, count, length) == expected,
            "Subrange must match its definition",
        );
    }

    #[kani::proof]
    fn verify_overlap_symmetric() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        let ca: i32 = kani::any();
        let cb: i32 = kani::any();

        kani::assert(
            overlaps(a, b, ca, cb) == overlaps(b, a, cb, ca),
            "Overlap must not depend on argument order",
        );
    }

    /// Intersection of half-open intervals is non-empty iff
    /// `max(starts) < min(ends)` with both intervals non-empty.
    #[kani::proof]
    fn verify_overlap_exact() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        let ca: i32 = kani::any();
        let cb: i32 = kani::any();

        let (a, b, ca, cb) = (a as i64, b as i64, ca as i64, cb as i64);
        let intersect = ca > 0 && cb > 0 && a.max(b) < (a + ca).min(b + cb);

        kani::assert(
            overlaps(a as i32, b as i32, ca as i32, cb as i32) == intersect,
            "Overlap must equal non-empty intersection",
        );
    }

    #[kani::proof]
    fn verify_defined_shift_exact() {
        let amount: i32 = kani::any();
        let bits: u32 = kani::any_where(|&b| b == 8 || b == 16 || b == 32 || b == 64);

        kani::assert(
            defined_shift(amount, bits) == (amount >= 0 && (amount as u32) < bits),
            "Shift must be defined exactly for 0 <= amount < bits",
        );
    }
}

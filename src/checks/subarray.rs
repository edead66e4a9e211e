// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subrange validity and overlap checks.
//!
//! A subrange is the half-open interval `[index, index + count)`. Sums are done
//! in 128 bits, so no combination of primitive inputs can overflow.

use crate::checks::bounds::try_index_in_bounds;
use crate::error::CheckError;
use crate::flags::{CheckFamily, SUBARRAY_CHECKS};
use crate::int::CheckInt;
use crate::violation::enforce;

// ============================================================================
// VALIDITY
// ============================================================================

/// `Ok` iff `0 <= index < length`, `count >= 0` and `index + count <= length`.
///
/// INVARIANT: the start must itself be a valid index, so an empty range sitting
/// exactly at `length` is rejected.
#[inline]
pub fn try_valid_subrange<I: CheckInt>(index: I, count: I, length: I) -> Result<(), CheckError> {
    try_index_in_bounds(index, length)?;

    if count.is_negative() {
        return Err(CheckError::invalid_argument(format!(
            "count {} was expected not to be smaller than 0",
            count
        )));
    }

    // Both operands are non-negative here, so the unsigned view is exact.
    match index.as_unsigned().checked_add(count.as_unsigned()) {
        Some(end) if end <= length.as_unsigned() => Ok(()),
        end => Err(CheckError::out_of_range(format!(
            "index + count is {}, which is larger than length {}",
            end.map_or_else(|| "beyond u128::MAX".to_string(), |end| end.to_string()),
            length
        ))),
    }
}

/// Check that `[index, index + count)` lies within a sequence of `length`.
///
/// # Panics (when `subarray-checks` is active)
/// Panics if the start is out of bounds, `count` is negative, or the range
/// runs past `length`.
#[inline(always)]
#[track_caller]
pub fn expect_valid_subrange<I: CheckInt>(index: I, count: I, length: I) {
    if SUBARRAY_CHECKS {
        enforce(
            CheckFamily::Subarray,
            try_valid_subrange(index, count, length),
        );
    }
}

// ============================================================================
// OVERLAP
// ============================================================================

/// `Ok` iff `[index_a, index_a + count_a)` and `[index_b, index_b + count_b)`
/// share no element.
///
/// The earlier start decides which interval is tested: the earlier interval
/// overlaps iff the distance to the later start is smaller than its count.
/// No sum is ever formed, so operands anywhere in the range of their type are
/// compared exactly.
///
/// INVARIANT: symmetric in its two intervals. Empty intervals (and intervals
/// with a negative count) contain nothing and never overlap, which is what makes
/// equal starts agree in both argument orders.
#[inline]
pub fn try_no_overlap<I: CheckInt>(
    index_a: I,
    index_b: I,
    count_a: I,
    count_b: I,
) -> Result<(), CheckError> {
    if is_empty(count_a) || is_empty(count_b) {
        return Ok(());
    }

    let (earlier, later) = if index_a.order_key() < index_b.order_key() {
        ((index_a, count_a), (index_b, count_b))
    } else {
        ((index_b, count_b), (index_a, count_a))
    };

    // later >= earlier, and the true gap is below 2^128 for every primitive
    // type, so the wrapping difference of the two's-complement views is exact.
    let gap = later.0.as_unsigned().wrapping_sub(earlier.0.as_unsigned());

    if gap < earlier.1.as_unsigned() {
        return Err(CheckError::out_of_range(format!(
            "Subarray from {} to {} overlaps with subarray from {} to {}",
            earlier.0,
            last_element(earlier.0, earlier.1),
            later.0,
            last_element(later.0, later.1)
        )));
    }
    Ok(())
}

#[inline(always)]
fn is_empty<I: CheckInt>(count: I) -> bool {
    count.is_negative() || count.as_unsigned() == 0
}

/// `start + count - 1` for a non-empty interval, rendered exactly.
#[cold]
fn last_element<I: CheckInt>(start: I, count: I) -> String {
    let span = count.as_unsigned() - 1;
    if start.is_negative() {
        let end = start.as_unsigned().wrapping_add(span);
        if span < start.as_unsigned().wrapping_neg() {
            (end as i128).to_string()
        } else {
            end.to_string()
        }
    } else {
        start
            .as_unsigned()
            .checked_add(span)
            .map_or_else(|| "beyond u128::MAX".to_string(), |end| end.to_string())
    }
}

/// Check that two subranges of the same sequence are disjoint.
///
/// # Panics (when `subarray-checks` is active)
/// Panics if the two half-open intervals intersect.
#[inline(always)]
#[track_caller]
pub fn expect_no_overlap<I: CheckInt>(index_a: I, index_b: I, count_a: I, count_b: I) {
    if SUBARRAY_CHECKS {
        enforce(
            CheckFamily::Subarray,
            try_no_overlap(index_a, index_b, count_a, count_b),
        );
    }
}

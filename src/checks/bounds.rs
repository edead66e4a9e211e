// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index bounds check.

use crate::error::CheckError;
use crate::flags::{CheckFamily, BOUNDS_CHECKS};
use crate::int::CheckInt;
use crate::violation::enforce;

/// `Ok` iff `0 <= index < length`.
///
/// INVARIANT: the index is compared unsigned, so a negative index takes the same
/// single comparison as an index past the end. A negative length admits nothing.
#[inline]
pub fn try_index_in_bounds<I: CheckInt>(index: I, length: I) -> Result<(), CheckError> {
    if length.is_negative() || index.as_unsigned() >= length.as_unsigned() {
        return Err(CheckError::out_of_range(format!(
            "{} out of range (length {} - 1)",
            index, length
        )));
    }
    Ok(())
}

/// Check that `index` addresses an element of a sequence of `length` elements.
///
/// # Panics (when `bounds-checks` is active)
/// Panics if `index < 0` or `index >= length`.
#[inline(always)]
#[track_caller]
pub fn expect_index_in_bounds<I: CheckInt>(index: I, length: I) {
    if BOUNDS_CHECKS {
        enforce(CheckFamily::Bounds, try_index_in_bounds(index, length));
    }
}

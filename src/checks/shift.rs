// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit-shift amount check.

use std::any::type_name;
use std::mem::size_of;

use crate::error::CheckError;
use crate::flags::{CheckFamily, BIT_SHIFT_CHECKS};
use crate::int::CheckInt;
use crate::violation::enforce;

/// Bit width of `T`.
#[inline(always)]
pub const fn bit_width<T>() -> usize {
    size_of::<T>() * 8
}

/// `Ok` iff `0 <= amount < bit_width::<T>()`.
///
/// INVARIANT: compared unsigned, so negative amounts are rejected by the same
/// comparison as amounts that are too large.
#[inline]
pub fn try_defined_shift<T, A: CheckInt>(amount: A) -> Result<(), CheckError> {
    if amount.as_unsigned() >= bit_width::<T>() as u128 {
        return Err(CheckError::out_of_range(format!(
            "Shifting a {} by {} results in undefined behavior",
            type_name::<T>(),
            amount
        )));
    }
    Ok(())
}

/// Check that shifting a `T` by `amount` bits is defined.
///
/// # Panics (when `bit-shift-checks` is active)
/// Panics if `amount` is negative or not smaller than the bit width of `T`.
#[inline(always)]
#[track_caller]
pub fn expect_defined_shift<T, A: CheckInt>(amount: A) {
    if BIT_SHIFT_CHECKS {
        enforce(CheckFamily::BitShift, try_defined_shift::<T, A>(amount));
    }
}

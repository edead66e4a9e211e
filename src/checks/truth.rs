// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Truthiness checks.

use crate::error::CheckError;
use crate::flags::{CheckFamily, BOOL_CHECKS};
use crate::violation::enforce;

#[inline]
pub fn try_true(condition: bool) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::ExpectationFailed { expected: true })
    }
}

#[inline]
pub fn try_false(condition: bool) -> Result<(), CheckError> {
    if condition {
        Err(CheckError::ExpectationFailed { expected: false })
    } else {
        Ok(())
    }
}

/// Check that `condition` holds.
///
/// # Panics (when `bool-checks` is active)
/// Panics if `condition` is false.
#[inline(always)]
#[track_caller]
pub fn expect_true(condition: bool) {
    if BOOL_CHECKS {
        enforce(CheckFamily::Bool, try_true(condition));
    }
}

/// Check that `condition` does not hold.
///
/// # Panics (when `bool-checks` is active)
/// Panics if `condition` is true.
#[inline(always)]
#[track_caller]
pub fn expect_false(condition: bool) {
    if BOOL_CHECKS {
        enforce(CheckFamily::Bool, try_false(condition));
    }
}

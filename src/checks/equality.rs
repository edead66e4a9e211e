// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality checks.

use std::fmt::Debug;

use crate::error::CheckError;
use crate::flags::{CheckFamily, EQUALITY_CHECKS};
use crate::violation::enforce;

#[inline]
pub fn try_equal<T: PartialEq + Debug>(a: T, b: T) -> Result<(), CheckError> {
    if a == b {
        Ok(())
    } else {
        Err(CheckError::out_of_range(format!(
            "{:?} was expected to be equal to {:?}",
            a, b
        )))
    }
}

#[inline]
pub fn try_not_equal<T: PartialEq + Debug>(a: T, b: T) -> Result<(), CheckError> {
    if a == b {
        Err(CheckError::out_of_range(format!(
            "{:?} was expected not to be equal to {:?}",
            a, b
        )))
    } else {
        Ok(())
    }
}

/// Check that `a == b`.
#[inline(always)]
#[track_caller]
pub fn expect_equal<T: PartialEq + Debug>(a: T, b: T) {
    if EQUALITY_CHECKS {
        enforce(CheckFamily::Equality, try_equal(a, b));
    }
}

/// Check that `a != b`.
#[inline(always)]
#[track_caller]
pub fn expect_not_equal<T: PartialEq + Debug>(a: T, b: T) {
    if EQUALITY_CHECKS {
        enforce(CheckFamily::Equality, try_not_equal(a, b));
    }
}

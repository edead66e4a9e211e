// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering checks.
//!
//! Every check is the complement of one three-way comparison: it computes
//! `value.cmp(limit)` once and fails on the `Ordering`s it does not allow.
//!
//! | Check                 | Fails on            |
//! |-----------------------|---------------------|
//! | `less_or_equal`       | `Greater`           |
//! | `less_than`           | `Equal`, `Greater`  |
//! | `not_less_than`       | `Less`              |
//! | `greater_or_equal`    | `Less`              |
//! | `greater_than`        | `Less`, `Equal`     |
//! | `not_greater_than`    | `Greater`           |

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::CheckError;
use crate::flags::{CheckFamily, COMPARE_CHECKS};
use crate::violation::enforce;

#[inline(always)]
fn require<T: Ord + Debug>(
    value: &T,
    limit: &T,
    allowed: fn(Ordering) -> bool,
    relation: &str,
) -> Result<(), CheckError> {
    if allowed(value.cmp(limit)) {
        Ok(())
    } else {
        Err(CheckError::out_of_range(format!(
            "{:?} was expected {} {:?}",
            value, relation, limit
        )))
    }
}

/// `Ok` iff `min <= value <= max`.
#[inline]
pub fn try_in_range<T: Ord + Debug>(value: T, min: T, max: T) -> Result<(), CheckError> {
    if value.cmp(&min) == Ordering::Less || value.cmp(&max) == Ordering::Greater {
        return Err(CheckError::out_of_range(format!(
            "Min: {:?}, Max: {:?}, Value: {:?}",
            min, max, value
        )));
    }
    Ok(())
}

#[inline]
pub fn try_less_or_equal<T: Ord + Debug>(value: T, limit: T) -> Result<(), CheckError> {
    require(
        &value,
        &limit,
        Ordering::is_le,
        "to be smaller than or equal to",
    )
}

#[inline]
pub fn try_less_than<T: Ord + Debug>(value: T, limit: T) -> Result<(), CheckError> {
    require(&value, &limit, Ordering::is_lt, "to be smaller than")
}

#[inline]
pub fn try_not_less_than<T: Ord + Debug>(value: T, limit: T) -> Result<(), CheckError> {
    require(&value, &limit, Ordering::is_ge, "not to be smaller than")
}

#[inline]
pub fn try_greater_or_equal<T: Ord + Debug>(value: T, limit: T) -> Result<(), CheckError> {
    require(
        &value,
        &limit,
        Ordering::is_ge,
        "to be greater than or equal to",
    )
}

#[inline]
pub fn try_greater_than<T: Ord + Debug>(value: T, limit: T) -> Result<(), CheckError> {
    require(&value, &limit, Ordering::is_gt, "to be greater than")
}

#[inline]
pub fn try_not_greater_than<T: Ord + Debug>(value: T, limit: T) -> Result<(), CheckError> {
    require(&value, &limit, Ordering::is_le, "not to be greater than")
}

/// Check that `min <= value <= max`.
///
/// # Panics (when `compare-checks` is active)
/// Panics if `value` lies outside the inclusive range.
#[inline(always)]
#[track_caller]
pub fn expect_in_range<T: Ord + Debug>(value: T, min: T, max: T) {
    if COMPARE_CHECKS {
        enforce(CheckFamily::Compare, try_in_range(value, min, max));
    }
}

#[inline(always)]
#[track_caller]
pub fn expect_less_or_equal<T: Ord + Debug>(value: T, limit: T) {
    if COMPARE_CHECKS {
        enforce(CheckFamily::Compare, try_less_or_equal(value, limit));
    }
}

#[inline(always)]
#[track_caller]
pub fn expect_less_than<T: Ord + Debug>(value: T, limit: T) {
    if COMPARE_CHECKS {
        enforce(CheckFamily::Compare, try_less_than(value, limit));
    }
}

#[inline(always)]
#[track_caller]
pub fn expect_not_less_than<T: Ord + Debug>(value: T, limit: T) {
    if COMPARE_CHECKS {
        enforce(CheckFamily::Compare, try_not_less_than(value, limit));
    }
}

#[inline(always)]
#[track_caller]
pub fn expect_greater_or_equal<T: Ord + Debug>(value: T, limit: T) {
    if COMPARE_CHECKS {
        enforce(CheckFamily::Compare, try_greater_or_equal(value, limit));
    }
}

#[inline(always)]
#[track_caller]
pub fn expect_greater_than<T: Ord + Debug>(value: T, limit: T) {
    if COMPARE_CHECKS {
        enforce(CheckFamily::Compare, try_greater_than(value, limit));
    }
}

#[inline(always)]
#[track_caller]
pub fn expect_not_greater_than<T: Ord + Debug>(value: T, limit: T) {
    if COMPARE_CHECKS {
        enforce(CheckFamily::Compare, try_not_greater_than(value, limit));
    }
}

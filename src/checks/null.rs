// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Nullness checks over optional values and raw pointers.

use crate::error::CheckError;
use crate::flags::{CheckFamily, NULL_CHECKS};
use crate::violation::enforce;

/// Anything that can be "null": an empty `Option` or a null raw pointer.
pub trait Nullable {
    fn is_absent(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline(always)]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline(always)]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline(always)]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    #[inline(always)]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

#[inline]
pub fn try_null<N: Nullable>(value: N) -> Result<(), CheckError> {
    if value.is_absent() {
        Ok(())
    } else {
        Err(CheckError::NullExpectationFailed {
            expected_null: true,
        })
    }
}

#[inline]
pub fn try_not_null<N: Nullable>(value: N) -> Result<(), CheckError> {
    if value.is_absent() {
        Err(CheckError::NullExpectationFailed {
            expected_null: false,
        })
    } else {
        Ok(())
    }
}

/// Check that `value` is null (`None` or a null pointer).
#[inline(always)]
#[track_caller]
pub fn expect_null<N: Nullable>(value: N) {
    if NULL_CHECKS {
        enforce(CheckFamily::Null, try_null(value));
    }
}

/// Check that `value` is present (`Some` or a non-null pointer).
#[inline(always)]
#[track_caller]
pub fn expect_not_null<N: Nullable>(value: N) {
    if NULL_CHECKS {
        enforce(CheckFamily::Null, try_not_null(value));
    }
}

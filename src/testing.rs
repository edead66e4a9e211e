// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! The `expect_*` functions panic, so these helpers catch the unwind and hand
//! back what happened.

#![doc(hidden)]

use std::panic::{self, AssertUnwindSafe};

use crate::flags::CheckFamily;

/// Run `f` and report whether it panicked.
pub fn panics<F: FnOnce()>(f: F) -> bool {
    panic::catch_unwind(AssertUnwindSafe(f)).is_err()
}

/// Run `f` and return its panic message, if it panicked.
pub fn panic_message<F: FnOnce()>(f: F) -> Option<String> {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).err()?;
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_default();
    Some(message)
}

/// Assert that `f` panics exactly when `violates` is true and `family` is active.
///
/// Written this way, one test covers both the checked and the elided build.
#[track_caller]
pub fn assert_enforced<F: FnOnce()>(family: CheckFamily, violates: bool, f: F) {
    let expected = violates && family.is_enabled();
    assert_eq!(
        panics(f),
        expected,
        "{} (enabled: {}) violation expected: {}",
        family,
        family.is_enabled(),
        violates
    );
}

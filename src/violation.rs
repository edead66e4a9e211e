// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The single place where a failed check turns into a panic.
//!
//! Kept out of line and marked cold so the hot path of every `expect_*` is one
//! predicate and one never-taken branch.

use crate::error::CheckError;
use crate::flags::CheckFamily;

/// Abort the current operation with a descriptive message.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violation(family: CheckFamily, error: CheckError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        family = family.name(),
        kind = %error.kind(),
        detail = %error,
        "check violation"
    );

    panic!("Check violation [{}]: {}", family, error)
}

/// Panic on `Err`, do nothing on `Ok`.
#[inline(always)]
#[track_caller]
pub(crate) fn enforce(family: CheckFamily, verdict: Result<(), CheckError>) {
    if let Err(error) = verdict {
        violation(family, error);
    }
}

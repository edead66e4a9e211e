// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

/// Run a check only while its family is active.
///
/// Unlike calling an `expect_*` function directly, the call's arguments are not
/// evaluated either, so expensive operands cost nothing in release builds.
///
/// ```
/// use devcheck::{check, expect_valid_subrange};
///
/// let buf = [0u8; 16];
/// check!(Subarray => expect_valid_subrange(4, 8, buf.len()));
/// ```
#[macro_export]
macro_rules! check {
    ($family:ident => $call:expr $(,)?) => {
        if $crate::CheckFamily::$family.is_enabled() {
            $call;
        }
    };
}

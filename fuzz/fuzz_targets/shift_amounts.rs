// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the shift check.
//!
//! Whenever the check accepts an amount, the shift it guards must be defined:
//! `checked_shl` returns `Some` for exactly the amounts below the bit width.

#![no_main]

use devcheck::try_defined_shift;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|amount: i64| {
    let accepted = try_defined_shift::<u32, _>(amount).is_ok();
    let defined = u32::try_from(amount)
        .ok()
        .and_then(|a| 1u32.checked_shl(a))
        .is_some();
    assert_eq!(accepted, defined);

    let accepted = try_defined_shift::<u8, _>(amount).is_ok();
    let defined = u32::try_from(amount)
        .ok()
        .and_then(|a| 1u8.checked_shl(a))
        .is_some();
    assert_eq!(accepted, defined);
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounds and subrange checks.
//!
//! Both must never panic on any input, and must agree with exact arithmetic.

#![no_main]

use arbitrary::Arbitrary;
use devcheck::{try_index_in_bounds, try_valid_subrange, CheckErrorKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input {
    Signed { index: i64, count: i64, length: i64 },
    Unsigned { index: u64, count: u64, length: u64 },
}

fn expected(index: i128, count: i128, length: i128) -> (bool, bool) {
    let in_bounds = 0 <= index && index < length;
    (in_bounds, in_bounds && count >= 0 && index + count <= length)
}

fuzz_target!(|input: Input| {
    let (bounds, subrange, exact) = match input {
        Input::Signed {
            index,
            count,
            length,
        } => (
            try_index_in_bounds(index, length),
            try_valid_subrange(index, count, length),
            expected(index.into(), count.into(), length.into()),
        ),
        Input::Unsigned {
            index,
            count,
            length,
        } => (
            try_index_in_bounds(index, length),
            try_valid_subrange(index, count, length),
            expected(index.into(), count.into(), length.into()),
        ),
    };

    assert_eq!(bounds.is_ok(), exact.0);
    assert_eq!(subrange.is_ok(), exact.1);

    // A subrange can only fail on bounds, a bad count, or its end.
    if let Err(err) = subrange {
        assert!(matches!(
            err.kind(),
            CheckErrorKind::OutOfRange | CheckErrorKind::InvalidArgument
        ));
    }
});

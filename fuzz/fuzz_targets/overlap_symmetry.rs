// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the overlap check.
//!
//! The check only tests the end of whichever interval starts first. Swapping
//! the arguments must never change the verdict, and the verdict must agree
//! with a direct intersection test.

#![no_main]

use arbitrary::Arbitrary;
use devcheck::try_no_overlap;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Intervals {
    index_a: i64,
    index_b: i64,
    count_a: i64,
    count_b: i64,
}

fuzz_target!(|input: Intervals| {
    let Intervals {
        index_a,
        index_b,
        count_a,
        count_b,
    } = input;

    let forward = try_no_overlap(index_a, index_b, count_a, count_b).is_err();
    let backward = try_no_overlap(index_b, index_a, count_b, count_a).is_err();
    assert_eq!(forward, backward, "overlap verdict depends on argument order");

    // i64 operands cannot overflow in i128.
    let (a, b) = (i128::from(index_a), i128::from(index_b));
    let (ca, cb) = (i128::from(count_a), i128::from(count_b));
    let intersect = ca > 0 && cb > 0 && a.max(b) < (a + ca).min(b + cb);
    assert_eq!(forward, intersect, "overlap verdict disagrees with intersection");
});

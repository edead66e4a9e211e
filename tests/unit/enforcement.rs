//! Every `expect_*` panics on a violation exactly when its family is active.
//!
//! Each case is written against `assert_enforced`, so the same test proves the
//! check in a debug build and proves the no-op in a release build or a build
//! with the family's feature switched off.

use super::common::assert_enforced;
use devcheck::*;
use std::ptr;

#[test]
fn bool_family() {
    assert_enforced(CheckFamily::Bool, false, || expect_true(true));
    assert_enforced(CheckFamily::Bool, true, || expect_true(false));
    assert_enforced(CheckFamily::Bool, false, || expect_false(false));
    assert_enforced(CheckFamily::Bool, true, || expect_false(true));
}

#[test]
fn null_family() {
    let value = 1u64;
    let present: *const u64 = &value;

    assert_enforced(CheckFamily::Null, false, || expect_null(None::<u8>));
    assert_enforced(CheckFamily::Null, true, || expect_null(Some(1)));
    assert_enforced(CheckFamily::Null, false, || expect_not_null(present));
    assert_enforced(CheckFamily::Null, true, || {
        expect_not_null(ptr::null::<u64>())
    });
}

#[test]
fn file_path_family() {
    assert_enforced(CheckFamily::FilePath, true, || expect_file_exists(""));
    assert_enforced(CheckFamily::FilePath, true, || {
        expect_file_exists("/definitely/not/here.devcheck")
    });
}

#[test]
fn bounds_family() {
    assert_enforced(CheckFamily::Bounds, false, || expect_index_in_bounds(4, 5));
    assert_enforced(CheckFamily::Bounds, true, || expect_index_in_bounds(5, 5));
    // Pathological input: still a no-op when bounds checks are off.
    assert_enforced(CheckFamily::Bounds, true, || expect_index_in_bounds(-1, 0));
}

#[test]
fn subarray_family() {
    assert_enforced(CheckFamily::Subarray, false, || {
        expect_valid_subrange(2, 3, 5)
    });
    assert_enforced(CheckFamily::Subarray, true, || {
        expect_valid_subrange(2, 4, 5)
    });
    assert_enforced(CheckFamily::Subarray, true, || {
        expect_valid_subrange(1, -1, 5)
    });
    assert_enforced(CheckFamily::Subarray, false, || {
        expect_no_overlap(0, 3, 3, 3)
    });
    assert_enforced(CheckFamily::Subarray, true, || {
        expect_no_overlap(0, 3, 4, 3)
    });
}

#[test]
fn subrange_does_not_depend_on_bounds_family() {
    // The start-index test is part of the subrange check itself.
    assert_enforced(CheckFamily::Subarray, true, || {
        expect_valid_subrange(-1, 0, 5)
    });
}

#[test]
fn equality_family() {
    assert_enforced(CheckFamily::Equality, false, || expect_equal("a", "a"));
    assert_enforced(CheckFamily::Equality, true, || expect_equal(1, 2));
    assert_enforced(CheckFamily::Equality, false, || expect_not_equal(1, 2));
    assert_enforced(CheckFamily::Equality, true, || {
        expect_not_equal(vec![1], vec![1])
    });
}

#[test]
fn compare_family() {
    let c = CheckFamily::Compare;
    assert_enforced(c, false, || expect_in_range(5, 1, 10));
    assert_enforced(c, true, || expect_in_range(11, 1, 10));
    assert_enforced(c, false, || expect_less_or_equal(3, 3));
    assert_enforced(c, true, || expect_less_or_equal(4, 3));
    assert_enforced(c, false, || expect_less_than(2, 3));
    assert_enforced(c, true, || expect_less_than(3, 3));
    assert_enforced(c, false, || expect_not_less_than(3, 3));
    assert_enforced(c, true, || expect_not_less_than(2, 3));
    assert_enforced(c, false, || expect_greater_or_equal(3, 3));
    assert_enforced(c, true, || expect_greater_or_equal(2, 3));
    assert_enforced(c, false, || expect_greater_than(4, 3));
    assert_enforced(c, true, || expect_greater_than(3, 3));
    assert_enforced(c, false, || expect_not_greater_than(3, 3));
    assert_enforced(c, true, || expect_not_greater_than(4, 3));
}

#[test]
fn bit_shift_family() {
    assert_enforced(CheckFamily::BitShift, false, || {
        expect_defined_shift::<u32, _>(31)
    });
    assert_enforced(CheckFamily::BitShift, true, || {
        expect_defined_shift::<u32, _>(32)
    });
    assert_enforced(CheckFamily::BitShift, true, || {
        expect_defined_shift::<u32, _>(-1)
    });
}

#[test]
fn check_macro_skips_arguments_when_disabled() {
    let mut calls = 0;
    let mut expensive = || {
        calls += 1;
        0usize
    };
    check!(Bounds => expect_index_in_bounds(expensive(), 1));
    let expected = usize::from(CheckFamily::Bounds.is_enabled());
    assert_eq!(calls, expected);
}

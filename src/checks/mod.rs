// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The check catalogue, one module per family.
//!
//! Every check comes in two forms:
//!
//! - `try_*` returns the verdict as a `Result` and is always compiled.
//! - `expect_*` panics on a failed verdict while its family is active, and is
//!   an empty inline function otherwise.

mod bounds;
mod compare;
mod equality;
mod file;
mod null;
mod shift;
mod subarray;
mod truth;

pub use bounds::{expect_index_in_bounds, try_index_in_bounds};
pub use compare::{
    expect_greater_or_equal, expect_greater_than, expect_in_range, expect_less_or_equal,
    expect_less_than, expect_not_greater_than, expect_not_less_than, try_greater_or_equal,
    try_greater_than, try_in_range, try_less_or_equal, try_less_than, try_not_greater_than,
    try_not_less_than,
};
pub use equality::{expect_equal, expect_not_equal, try_equal, try_not_equal};
pub use file::{expect_file_exists, try_file_exists};
pub use null::{expect_not_null, expect_null, try_not_null, try_null, Nullable};
pub use shift::{bit_width, expect_defined_shift, try_defined_shift};
pub use subarray::{expect_no_overlap, expect_valid_subrange, try_no_overlap, try_valid_subrange};
pub use truth::{expect_false, expect_true, try_false, try_true};

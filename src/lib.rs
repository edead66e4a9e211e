// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Development-time assertion checks that compile to nothing in release builds.
//!
//! Checks are grouped into families. Each family has a cargo feature and is
//! active only while that feature is on and `debug_assertions` are enabled (or
//! `force-checks` is set). An inactive family's `expect_*` functions are empty
//! `#[inline(always)]` bodies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  flags.rs   │────▶│  checks/*.rs │────▶│ violation.rs │
//! │ (CheckFamily│     │ (try_*,      │     │ (cold panic, │
//! │  consts)    │     │  expect_*)   │     │  tracing)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │   error.rs   │
//!                     │ (CheckError) │
//!                     └──────────────┘
//! ```
//!
//! # Families
//!
//! | Family     | Checks                                                   |
//! |------------|----------------------------------------------------------|
//! | `Bool`     | `expect_true`, `expect_false`                            |
//! | `Null`     | `expect_null`, `expect_not_null`                         |
//! | `FilePath` | `expect_file_exists`                                     |
//! | `Bounds`   | `expect_index_in_bounds`                                 |
//! | `Subarray` | `expect_valid_subrange`, `expect_no_overlap`             |
//! | `Equality` | `expect_equal`, `expect_not_equal`                       |
//! | `Compare`  | `expect_in_range`, `expect_less_than`, ... (7 in total)  |
//! | `BitShift` | `expect_defined_shift`                                   |
//!
//! # Usage
//!
//! ```
//! use devcheck::{expect_index_in_bounds, expect_defined_shift, try_no_overlap};
//!
//! let data = [1u32, 2, 3];
//! let i = 2usize;
//! expect_index_in_bounds(i, data.len());
//!
//! let shift = 5u32;
//! expect_defined_shift::<u32, _>(shift);
//! let _ = data[i] << shift;
//!
//! // The verdict is also available as a value, in every build.
//! assert!(try_no_overlap(0, 4, 3, 3).is_ok());
//! ```

mod checks;
pub mod error;
pub mod flags;
mod int;
mod macros;
pub mod testing;
mod violation;

pub use checks::*;
pub use error::{CheckError, CheckErrorKind};
pub use flags::{enabled_families, CheckFamily};
pub use int::CheckInt;

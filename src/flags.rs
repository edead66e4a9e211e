// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time switches for the check families.
//!
//! Each family is controlled by one cargo feature. A family is *active* when its
//! feature is enabled and the build has `debug_assertions` (or `force-checks` is
//! on). The flags are `const`, so a disabled family folds to `if false {}` and
//! leaves nothing behind in the binary.
//!
//! | Family     | Feature            | Const              |
//! |------------|--------------------|--------------------|
//! | `Bool`     | `bool-checks`      | `BOOL_CHECKS`      |
//! | `Null`     | `null-checks`      | `NULL_CHECKS`      |
//! | `FilePath` | `file-path-checks` | `FILE_PATH_CHECKS` |
//! | `Bounds`   | `bounds-checks`    | `BOUNDS_CHECKS`    |
//! | `Subarray` | `subarray-checks`  | `SUBARRAY_CHECKS`  |
//! | `Equality` | `equality-checks`  | `EQUALITY_CHECKS`  |
//! | `Compare`  | `compare-checks`   | `COMPARE_CHECKS`   |
//! | `BitShift` | `bit-shift-checks` | `BIT_SHIFT_CHECKS` |

use std::fmt;

/// True when checks may run at all in this build profile.
const PROFILE_ALLOWS_CHECKS: bool = cfg!(debug_assertions) || cfg!(feature = "force-checks");

const fn active(feature_enabled: bool) -> bool {
    feature_enabled && PROFILE_ALLOWS_CHECKS
}

pub const BOOL_CHECKS: bool = active(cfg!(feature = "bool-checks"));
pub const NULL_CHECKS: bool = active(cfg!(feature = "null-checks"));
pub const FILE_PATH_CHECKS: bool = active(cfg!(feature = "file-path-checks"));
pub const BOUNDS_CHECKS: bool = active(cfg!(feature = "bounds-checks"));
pub const SUBARRAY_CHECKS: bool = active(cfg!(feature = "subarray-checks"));
pub const EQUALITY_CHECKS: bool = active(cfg!(feature = "equality-checks"));
pub const COMPARE_CHECKS: bool = active(cfg!(feature = "compare-checks"));
pub const BIT_SHIFT_CHECKS: bool = active(cfg!(feature = "bit-shift-checks"));

/// A group of checks sharing one enable switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CheckFamily {
    Bool,
    Null,
    FilePath,
    Bounds,
    Subarray,
    Equality,
    Compare,
    BitShift,
}

impl CheckFamily {
    /// Every family, in declaration order.
    pub const ALL: [CheckFamily; 8] = [
        CheckFamily::Bool,
        CheckFamily::Null,
        CheckFamily::FilePath,
        CheckFamily::Bounds,
        CheckFamily::Subarray,
        CheckFamily::Equality,
        CheckFamily::Compare,
        CheckFamily::BitShift,
    ];

    /// Whether this family's checks run in the current build.
    #[inline(always)]
    pub const fn is_enabled(self) -> bool {
        match self {
            CheckFamily::Bool => BOOL_CHECKS,
            CheckFamily::Null => NULL_CHECKS,
            CheckFamily::FilePath => FILE_PATH_CHECKS,
            CheckFamily::Bounds => BOUNDS_CHECKS,
            CheckFamily::Subarray => SUBARRAY_CHECKS,
            CheckFamily::Equality => EQUALITY_CHECKS,
            CheckFamily::Compare => COMPARE_CHECKS,
            CheckFamily::BitShift => BIT_SHIFT_CHECKS,
        }
    }

    /// Option name, e.g. `bounds_checks`.
    pub const fn name(self) -> &'static str {
        match self {
            CheckFamily::Bool => "bool_checks",
            CheckFamily::Null => "null_checks",
            CheckFamily::FilePath => "file_path_checks",
            CheckFamily::Bounds => "bounds_checks",
            CheckFamily::Subarray => "subarray_checks",
            CheckFamily::Equality => "equality_checks",
            CheckFamily::Compare => "compare_checks",
            CheckFamily::BitShift => "bit_shift_checks",
        }
    }

    /// Cargo feature that switches this family on.
    pub const fn feature(self) -> &'static str {
        match self {
            CheckFamily::Bool => "bool-checks",
            CheckFamily::Null => "null-checks",
            CheckFamily::FilePath => "file-path-checks",
            CheckFamily::Bounds => "bounds-checks",
            CheckFamily::Subarray => "subarray-checks",
            CheckFamily::Equality => "equality-checks",
            CheckFamily::Compare => "compare-checks",
            CheckFamily::BitShift => "bit-shift-checks",
        }
    }
}

impl fmt::Display for CheckFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Families active in this build.
pub fn enabled_families() -> impl Iterator<Item = CheckFamily> {
    CheckFamily::ALL.into_iter().filter(|family| family.is_enabled())
}

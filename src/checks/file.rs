// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File existence check.
//!
//! The only check that leaves the process: one `metadata` query, following
//! symlinks. An empty path is reported as a bad argument rather than a missing
//! file so the two mistakes stay distinguishable.

use std::fs;
use std::path::Path;

use crate::error::CheckError;
use crate::flags::{CheckFamily, FILE_PATH_CHECKS};
use crate::violation::enforce;

pub fn try_file_exists<P: AsRef<Path>>(path: P) -> Result<(), CheckError> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(CheckError::invalid_argument("path is empty"));
    }

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        _ => Err(CheckError::FileNotFound {
            path: path.to_path_buf(),
        }),
    }
}

/// Check that a regular file exists at `path`.
///
/// # Panics (when `file-path-checks` is active)
/// Panics if `path` is empty, or if nothing, a directory, or something
/// unreadable sits at `path`.
#[inline(always)]
#[track_caller]
pub fn expect_file_exists<P: AsRef<Path>>(path: P) {
    if FILE_PATH_CHECKS {
        enforce(CheckFamily::FilePath, try_file_exists(path));
    }
}

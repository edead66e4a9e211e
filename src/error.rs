// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure values produced by the checks.
//!
//! One variant per kind of violation. `OutOfRange` is deliberately broad: bounds,
//! subranges, overlaps, equality and ordering all report through it, each with a
//! message that embeds the offending operands.

use std::fmt;
use std::path::PathBuf;

/// Error type for check violations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CheckError {
    /// A boolean did not have the expected polarity.
    ExpectationFailed { expected: bool },
    /// A nullable value was present when it should be absent, or vice versa.
    NullExpectationFailed { expected_null: bool },
    /// An argument was unusable before the check could even run.
    InvalidArgument { message: String },
    /// No regular file exists at a non-empty path.
    FileNotFound { path: PathBuf },
    /// A value fell outside the range the check allows.
    OutOfRange { message: String },
}

/// Fieldless mirror of [`CheckError`], handy for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CheckErrorKind {
    ExpectationFailed,
    NullExpectationFailed,
    InvalidArgument,
    FileNotFound,
    OutOfRange,
}

impl CheckError {
    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        CheckError::OutOfRange {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        CheckError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> CheckErrorKind {
        match self {
            CheckError::ExpectationFailed { .. } => CheckErrorKind::ExpectationFailed,
            CheckError::NullExpectationFailed { .. } => CheckErrorKind::NullExpectationFailed,
            CheckError::InvalidArgument { .. } => CheckErrorKind::InvalidArgument,
            CheckError::FileNotFound { .. } => CheckErrorKind::FileNotFound,
            CheckError::OutOfRange { .. } => CheckErrorKind::OutOfRange,
        }
    }
}

impl fmt::Display for CheckErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckErrorKind::ExpectationFailed => "ExpectationFailed",
            CheckErrorKind::NullExpectationFailed => "NullExpectationFailed",
            CheckErrorKind::InvalidArgument => "InvalidArgument",
            CheckErrorKind::FileNotFound => "FileNotFound",
            CheckErrorKind::OutOfRange => "OutOfRange",
        };
        f.write_str(name)
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::ExpectationFailed { expected } => {
                write!(f, "Expected '{}'", expected)
            }
            CheckError::NullExpectationFailed { expected_null: true } => {
                write!(f, "Expected null")
            }
            CheckError::NullExpectationFailed {
                expected_null: false,
            } => {
                write!(f, "Expected not-null")
            }
            CheckError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
            CheckError::FileNotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            CheckError::OutOfRange { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for CheckError {}

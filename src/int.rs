// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer plumbing shared by the bounds, subarray and shift checks.
//!
//! Indices arrive as any primitive integer. Widening to 128 bits lets one code
//! path serve `i32` call sites and `usize` call sites alike, and keeps the
//! unsigned-comparison trick: a negative value sign-extends to something at
//! least `2^127`, which is never below a valid length. Nothing is clamped: every
//! value of every primitive type keeps its exact magnitude.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer usable as an index, count, length or shift amount.
pub trait CheckInt: Copy + fmt::Display + sealed::Sealed {
    /// Two's-complement reinterpretation as `u128`.
    fn as_unsigned(self) -> u128;

    fn is_negative(self) -> bool;

    /// Key whose natural order is the numeric order, for any primitive type.
    ///
    /// Negatives sort first; among values of one sign the two's-complement
    /// `u128` view is monotonic.
    #[inline(always)]
    fn order_key(self) -> (bool, u128) {
        (!self.is_negative(), self.as_unsigned())
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl CheckInt for $t {
            #[inline(always)]
            fn as_unsigned(self) -> u128 {
                self as i128 as u128
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl CheckInt for $t {
            #[inline(always)]
            fn as_unsigned(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                false
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Calculator Operand Trait
//!
//! `Operand` collects what the calculator needs from an integer type:
//! the intrinsic `PrimInt` operations, by-value checked, saturating and
//! wrapping arithmetic from `primer_core`, the `Zero` constant for the
//! divisor check, and a lossy conversion to `f64` for division.
//!
//! ## Highlights
//!
//! - All primitive integer types qualify, signed and unsigned.
//! - `AsPrimitive<f64>` mirrors an `as f64` cast, so `i64`/`u64` operands
//!   beyond 2^53 are rounded to the nearest representable `f64`.

use num_traits::{AsPrimitive, PrimInt};
use primer_core::num::{
    constants::Zero,
    ops::{checked_arithmetic, saturating_arithmetic, wrapping_arithmetic},
};

/// A trait alias for the integer types the calculator operates on.
pub trait Operand:
    PrimInt
    + AsPrimitive<f64>
    + Zero
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + checked_arithmetic::CheckedMulVal
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + saturating_arithmetic::SaturatingMulVal
    + wrapping_arithmetic::WrappingAddVal
    + wrapping_arithmetic::WrappingSubVal
    + wrapping_arithmetic::WrappingMulVal
    + std::fmt::Debug
    + std::fmt::Display
{
}

impl<T> Operand for T where
    T: PrimInt
        + AsPrimitive<f64>
        + Zero
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + checked_arithmetic::CheckedMulVal
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + saturating_arithmetic::SaturatingMulVal
        + wrapping_arithmetic::WrappingAddVal
        + wrapping_arithmetic::WrappingSubVal
        + wrapping_arithmetic::WrappingMulVal
        + std::fmt::Debug
        + std::fmt::Display
{
}

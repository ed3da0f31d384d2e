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

//! # Algorithm Integer Trait
//!
//! `AlgorithmInteger` collects the integer capabilities the algorithms rely
//! on into a single alias: the intrinsic `PrimInt` operations, the
//! associated constants from `primer_core`, by-value checked addition for
//! overflow detection, and `Display` for structured log fields.
//!
//! Every primitive integer type (`i8` through `i128`, `u8` through `u128`,
//! `isize`, `usize`) satisfies it.

use num_traits::PrimInt;
use primer_core::num::{
    constants::{PlusOne, Zero},
    ops::checked_arithmetic::CheckedAddVal,
};

/// A trait alias for the integer types accepted by the primer algorithms.
pub trait AlgorithmInteger:
    PrimInt + Zero + PlusOne + CheckedAddVal + std::fmt::Debug + std::fmt::Display
{
}

impl<T> AlgorithmInteger for T where
    T: PrimInt + Zero + PlusOne + CheckedAddVal + std::fmt::Debug + std::fmt::Display
{
}

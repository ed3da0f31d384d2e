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

use core::ops::{Add, Mul, Sub};

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),* $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// Wrapping (modular) addition by value (no references).
///
/// Wraps around at the boundary of the type, which is the fixed-width two's
/// complement behavior most other languages use for their default `int`.
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// assert_eq!(i32::MAX.wrapping_add_val(1), i32::MIN);
/// assert_eq!(255u8.wrapping_add_val(2), 1);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, wrapping_add;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

/// Wrapping (modular) subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::wrapping_arithmetic::WrappingSubVal;
/// assert_eq!(i32::MIN.wrapping_sub_val(1), i32::MAX);
/// assert_eq!(0u8.wrapping_sub_val(1), 255);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, wrapping_sub;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

/// Wrapping (modular) multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::wrapping_arithmetic::WrappingMulVal;
/// assert_eq!(16u8.wrapping_mul_val(16), 0);
/// assert_eq!(i8::MIN.wrapping_mul_val(-1), i8::MIN);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, wrapping_mul;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

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

macro_rules! saturating_impl_binary_val {
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

/// Saturating addition by value (no references).
///
/// Clamps the result to the numeric bounds of the type instead of
/// overflowing, mirroring the inherent `saturating_add` on primitive integers.
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// assert_eq!(250u8.saturating_add_val(10), 255); // Clamps at u8::MAX
/// assert_eq!((-120i8).saturating_add_val(-20), -128); // Clamps at i8::MIN
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, saturating_add;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

/// Saturating subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::saturating_arithmetic::SaturatingSubVal;
/// assert_eq!(5u8.saturating_sub_val(10), 0); // Clamps at u8::MIN
/// assert_eq!(127i8.saturating_sub_val(-1), 127); // Clamps at i8::MAX
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, saturating_sub;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

/// Saturating multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::saturating_arithmetic::SaturatingMulVal;
/// assert_eq!(100u8.saturating_mul_val(3), 255);
/// assert_eq!((-100i8).saturating_mul_val(2), -128);
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, saturating_mul;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn saturating_add_val<T: SaturatingAddVal>(a: T, b: T) -> T {
        a.saturating_add_val(b)
    }
    fn saturating_sub_val<T: SaturatingSubVal>(a: T, b: T) -> T {
        a.saturating_sub_val(b)
    }
    fn saturating_mul_val<T: SaturatingMulVal>(a: T, b: T) -> T {
        a.saturating_mul_val(b)
    }

    #[test]
    fn test_saturating_add_val() {
        assert_eq!(saturating_add_val(i32::MAX, 1), i32::MAX);
        assert_eq!(saturating_add_val(-2i32, -3i32), -5);
    }

    #[test]
    fn test_saturating_sub_val() {
        assert_eq!(saturating_sub_val(i32::MIN, 1), i32::MIN);
        assert_eq!(saturating_sub_val(3i32, 8i32), -5);
    }

    #[test]
    fn test_saturating_mul_val() {
        assert_eq!(saturating_mul_val(i32::MAX, 2), i32::MAX);
        assert_eq!(saturating_mul_val(i32::MIN, 2), i32::MIN);
        assert_eq!(saturating_mul_val(2i32, -3i32), -6);
    }
}

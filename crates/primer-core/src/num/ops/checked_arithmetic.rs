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

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),* $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// A trait for types that support checked addition by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_add`, but provides
/// a trait-based API that does not take references (unlike the `num_traits`
/// `CheckedAdd`).
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: i32 = 1_836_311_903; // F(46)
/// let b: i32 = 1_134_903_170; // F(45)
/// assert_eq!(a.checked_add_val(b), None); // F(47) does not fit an i32
/// assert_eq!(b.checked_add_val(701_408_733), Some(a));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedAddVal, checked_add_val, checked_add;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::checked_arithmetic::CheckedSubVal;
/// assert_eq!(3i32.checked_sub_val(8), Some(-5));
/// assert_eq!(i32::MIN.checked_sub_val(1), None);
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedSubVal, checked_sub_val, checked_sub;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

/// A trait for types that support checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use primer_core::num::ops::checked_arithmetic::CheckedMulVal;
/// assert_eq!(1000i32.checked_mul_val(1_000_000), Some(1_000_000_000));
/// assert_eq!(1_000_000i32.checked_mul_val(1_000_000), None);
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul;
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_add_val<T: CheckedAddVal>(a: T, b: T) -> Option<T> {
        a.checked_add_val(b)
    }

    fn checked_sub_val<T: CheckedSubVal>(a: T, b: T) -> Option<T> {
        a.checked_sub_val(b)
    }

    fn checked_mul_val<T: CheckedMulVal>(a: T, b: T) -> Option<T> {
        a.checked_mul_val(b)
    }

    #[test]
    fn test_checked_add_val() {
        assert_eq!(checked_add_val(-2i32, -3i32), Some(-5));
        assert_eq!(checked_add_val(255u8, 1u8), None);
        assert_eq!(checked_add_val(i64::MAX, 0), Some(i64::MAX));
    }

    #[test]
    fn test_checked_sub_val() {
        assert_eq!(checked_sub_val(10i32, 0i32), Some(10));
        assert_eq!(checked_sub_val(0u16, 1u16), None);
    }

    #[test]
    fn test_checked_mul_val() {
        assert_eq!(checked_mul_val(-2i32, -3i32), Some(6));
        assert_eq!(checked_mul_val(i8::MIN, -1i8), None);
    }
}

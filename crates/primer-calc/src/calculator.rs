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

//! # Calculator
//!
//! A stateless four-function calculator over primitive integers.
//!
//! ## Overflow semantics
//!
//! The [`OverflowMode`] decides what `add`, `subtract` and `multiply` do at
//! the type boundary:
//!
//! - `Native` (default): the plain `+`, `-` and `*` operators, so overflow
//!   panics in debug builds and wraps in release builds.
//! - `Wrapping`: two's complement wrap-around regardless of build profile.
//! - `Saturating`: results clamp to `T::MIN` / `T::MAX`.
//!
//! Only `Wrapping` and `Saturating` are total over every pair of operands.
//!
//! When overflow must be reported instead, use `checked_add`,
//! `checked_subtract` and `checked_multiply`, which ignore the mode and
//! return [`CalculatorError::Overflow`].
//!
//! ## Division
//!
//! `divide` converts both operands to `f64` before dividing, so `10 / 3` is
//! `3.333…` rather than `3`. A zero divisor is rejected before any
//! conversion takes place.

use crate::{
    error::{CalculatorError, Operation},
    num::Operand,
};

/// Selects how `add`, `subtract` and `multiply` behave on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowMode {
    /// The ordinary arithmetic operators.
    #[default]
    Native,
    /// Modular arithmetic at the type boundary.
    Wrapping,
    /// Clamp to the numeric bounds of the type.
    Saturating,
}

impl OverflowMode {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "Native",
            Self::Wrapping => "Wrapping",
            Self::Saturating => "Saturating",
        }
    }
}

impl std::fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured calculator. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Calculator {
    overflow_mode: OverflowMode,
}

impl Calculator {
    /// Creates a calculator using [`OverflowMode::Native`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for a configured calculator.
    #[inline]
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    #[inline]
    pub fn overflow_mode(&self) -> OverflowMode {
        self.overflow_mode
    }

    /// Returns `a + b` under the configured overflow mode.
    ///
    /// # Panics
    ///
    /// Under [`OverflowMode::Native`] this panics on overflow in debug builds,
    /// like the `+` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use primer_calc::Calculator;
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.add(1_000_000, 1_000_000), 2_000_000);
    /// ```
    #[inline]
    pub fn add<T>(&self, a: T, b: T) -> T
    where
        T: Operand,
    {
        match self.overflow_mode {
            OverflowMode::Native => a + b,
            OverflowMode::Wrapping => a.wrapping_add_val(b),
            OverflowMode::Saturating => a.saturating_add_val(b),
        }
    }

    /// Returns `a - b` under the configured overflow mode.
    #[inline]
    pub fn subtract<T>(&self, a: T, b: T) -> T
    where
        T: Operand,
    {
        match self.overflow_mode {
            OverflowMode::Native => a - b,
            OverflowMode::Wrapping => a.wrapping_sub_val(b),
            OverflowMode::Saturating => a.saturating_sub_val(b),
        }
    }

    /// Returns `a * b` under the configured overflow mode.
    #[inline]
    pub fn multiply<T>(&self, a: T, b: T) -> T
    where
        T: Operand,
    {
        match self.overflow_mode {
            OverflowMode::Native => a * b,
            OverflowMode::Wrapping => a.wrapping_mul_val(b),
            OverflowMode::Saturating => a.saturating_mul_val(b),
        }
    }

    /// Returns `a + b`, or an error if the sum does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use primer_calc::{Calculator, Operation};
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.checked_add(2, 3), Ok(5));
    /// let err = calculator.checked_add(i32::MAX, 1).unwrap_err();
    /// assert_eq!(err.operation(), Operation::Add);
    /// ```
    pub fn checked_add<T>(&self, a: T, b: T) -> Result<T, CalculatorError>
    where
        T: Operand,
    {
        a.checked_add_val(b).ok_or_else(|| overflow(Operation::Add, a, b))
    }

    /// Returns `a - b`, or an error if the difference does not fit in `T`.
    pub fn checked_subtract<T>(&self, a: T, b: T) -> Result<T, CalculatorError>
    where
        T: Operand,
    {
        a.checked_sub_val(b).ok_or_else(|| overflow(Operation::Subtract, a, b))
    }

    /// Returns `a * b`, or an error if the product does not fit in `T`.
    pub fn checked_multiply<T>(&self, a: T, b: T) -> Result<T, CalculatorError>
    where
        T: Operand,
    {
        a.checked_mul_val(b).ok_or_else(|| overflow(Operation::Multiply, a, b))
    }

    /// Returns the floating-point quotient `a / b`.
    ///
    /// # Errors
    ///
    /// [`CalculatorError::DivisionByZero`] if `b == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use primer_calc::Calculator;
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.divide(-6, 3), Ok(-2.0));
    /// assert!(calculator.divide(10, 0).unwrap_err().to_string().contains("zero"));
    /// ```
    pub fn divide<T>(&self, a: T, b: T) -> Result<f64, CalculatorError>
    where
        T: Operand,
    {
        if b == T::ZERO {
            tracing::debug!(dividend = %a, "rejecting division by zero");
            return Err(CalculatorError::DivisionByZero);
        }

        let dividend: f64 = a.as_();
        let divisor: f64 = b.as_();
        Ok(dividend / divisor)
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Calculator(overflow_mode: {})", self.overflow_mode)
    }
}

#[cold]
fn overflow<T>(op: Operation, lhs: T, rhs: T) -> CalculatorError
where
    T: Operand,
{
    tracing::debug!(%op, %lhs, %rhs, "checked arithmetic overflowed");
    CalculatorError::Overflow {
        op,
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
    }
}

/// Builder for [`Calculator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorBuilder {
    overflow_mode: OverflowMode,
}

impl CalculatorBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_overflow_mode(mut self, mode: OverflowMode) -> Self {
        self.overflow_mode = mode;
        self
    }

    #[inline]
    pub fn build(self) -> Calculator {
        tracing::trace!(overflow_mode = %self.overflow_mode, "building calculator");
        Calculator {
            overflow_mode: self.overflow_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::error::ErrorKind;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 0.001;

    fn calculator() -> Calculator {
        Calculator::new()
    }

    fn with_mode(mode: OverflowMode) -> Calculator {
        Calculator::builder().with_overflow_mode(mode).build()
    }

    #[test]
    fn test_add_negative_numbers() {
        assert_eq!(calculator().add(-2, -3), -5);
    }

    #[test]
    fn test_add_zero() {
        assert_eq!(calculator().add(5, 0), 5);
        assert_eq!(calculator().add(0, 0), 0);
    }

    #[test]
    fn test_subtract_negative_result() {
        assert_eq!(calculator().subtract(3, 8), -5);
    }

    #[test]
    fn test_subtract_zero() {
        assert_eq!(calculator().subtract(10, 0), 10);
    }

    #[test]
    fn test_multiply_by_zero() {
        assert_eq!(calculator().multiply(100, 0), 0);
        assert_eq!(calculator().multiply(0, 50), 0);
    }

    #[test]
    fn test_multiply_negative_numbers() {
        assert_eq!(calculator().multiply(-2, -3), 6);
        assert_eq!(calculator().multiply(2, -3), -6);
    }

    #[test]
    fn test_divide_negative_numbers() {
        assert!((calculator().divide(-6, 3).unwrap() - -2.0).abs() < TOLERANCE);
        assert!((calculator().divide(-6, -3).unwrap() - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_divide_with_remainder() {
        assert!((calculator().divide(10, 3).unwrap() - 3.333333).abs() < TOLERANCE);
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let err = calculator().divide(10, 0).unwrap_err();
        assert_eq!(err, CalculatorError::DivisionByZero);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let msg = err.to_string();
        assert!(msg.contains("zero") || msg.contains('0'));
    }

    #[test]
    fn test_divide_zero_dividend() {
        assert_eq!(calculator().divide(0, 7), Ok(0.0));
    }

    #[test]
    fn test_large_numbers() {
        assert_eq!(calculator().add(1_000_000, 1_000_000), 2_000_000);
        assert_eq!(calculator().multiply(1000, 1_000_000), 1_000_000_000);
    }

    #[test]
    fn test_default_mode_is_native() {
        assert_eq!(Calculator::default().overflow_mode(), OverflowMode::Native);
        assert_eq!(CalculatorBuilder::new().build(), Calculator::new());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_native_mode_panics_on_overflow_in_debug() {
        Calculator::new().add(i32::MAX, 1);
    }

    #[test]
    fn test_wrapping_mode() {
        let calc = with_mode(OverflowMode::Wrapping);
        assert_eq!(calc.add(i32::MAX, 1), i32::MIN);
        assert_eq!(calc.subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(calc.multiply(65_536i32, 65_536i32), 0);
        assert_eq!(calc.add(-2, -3), -5);
    }

    #[test]
    fn test_saturating_mode() {
        let calc = with_mode(OverflowMode::Saturating);
        assert_eq!(calc.add(i32::MAX, 1), i32::MAX);
        assert_eq!(calc.subtract(i32::MIN, 1), i32::MIN);
        assert_eq!(calc.multiply(i64::MIN, 2), i64::MIN);
        assert_eq!(calc.subtract(0u32, 1u32), 0);
        assert_eq!(calc.multiply(-2, -3), 6);
    }

    #[test]
    fn test_checked_operations() {
        let calc = calculator();
        assert_eq!(calc.checked_add(-2, -3), Ok(-5));
        assert_eq!(calc.checked_subtract(3, 8), Ok(-5));
        assert_eq!(calc.checked_multiply(2, -3), Ok(-6));

        let err = calc.checked_multiply(65_536i32, 65_536i32).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::Overflow {
                op: Operation::Multiply,
                lhs: "65536".to_string(),
                rhs: "65536".to_string(),
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(calc.checked_subtract(0u8, 1u8).is_err());
    }

    #[test]
    fn test_checked_operations_ignore_mode() {
        let calc = with_mode(OverflowMode::Saturating);
        assert!(calc.checked_add(i32::MAX, 1).is_err());
    }

    #[test]
    fn test_unsigned_operands() {
        let calc = calculator();
        assert_eq!(calc.add(40u64, 2u64), 42);
        assert!((calc.divide(1u8, 4u8).unwrap() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            with_mode(OverflowMode::Wrapping).to_string(),
            "Calculator(overflow_mode: Wrapping)"
        );
    }

    proptest! {
        #[test]
        fn prop_native_matches_widened_arithmetic(a in -46_340i32..=46_340, b in -46_340i32..=46_340) {
            let calc = calculator();
            prop_assert_eq!(calc.add(a, b) as i64, a as i64 + b as i64);
            prop_assert_eq!(calc.subtract(a, b) as i64, a as i64 - b as i64);
            prop_assert_eq!(calc.multiply(a, b) as i64, a as i64 * b as i64);
        }

        #[test]
        fn prop_saturating_clamps_widened_result(a in any::<i32>(), b in any::<i32>()) {
            let calc = with_mode(OverflowMode::Saturating);
            let clamp = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
            prop_assert_eq!(calc.add(a, b), clamp(a as i64 + b as i64));
            prop_assert_eq!(calc.subtract(a, b), clamp(a as i64 - b as i64));
            prop_assert_eq!(calc.multiply(a, b), clamp(a as i64 * b as i64));
        }

        #[test]
        fn prop_checked_fails_exactly_when_out_of_range(a in any::<i32>(), b in any::<i32>()) {
            let calc = calculator();
            let wide = a as i64 + b as i64;
            let fits = (i32::MIN as i64..=i32::MAX as i64).contains(&wide);
            prop_assert_eq!(calc.checked_add(a, b).is_ok(), fits);
        }

        #[test]
        fn prop_divide_is_float_division(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
            let q = calculator().divide(a, b).unwrap();
            prop_assert_eq!(q, a as f64 / b as f64);
        }
    }
}

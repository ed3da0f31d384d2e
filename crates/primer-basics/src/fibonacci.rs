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

//! # Fibonacci Numbers
//!
//! Iterative computation of `F(n)` under the convention `F(0) = 0`,
//! `F(1) = 1`. Only the previous two values are kept, so the computation is
//! O(n) time and O(1) space with no recursion.
//!
//! The running sum uses checked addition: once `F(n)` no longer fits the
//! integer type the call fails with [`AlgorithmError::FibonacciOverflow`]
//! instead of wrapping. The largest accepted index is 46 for `i32`, 92 for
//! `i64` and 93 for `u64`.

use crate::{error::AlgorithmError, num::AlgorithmInteger};
use num_traits::ToPrimitive;

/// Computes the `n`th Fibonacci number.
///
/// # Errors
///
/// - [`AlgorithmError::NegativeIndex`] if `n < 0`.
/// - [`AlgorithmError::FibonacciOverflow`] if `F(n)` does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use primer_basics::fibonacci;
/// assert_eq!(fibonacci(0).unwrap(), 0);
/// assert_eq!(fibonacci(20).unwrap(), 6765);
/// assert!(fibonacci(-1).is_err());
/// assert!(fibonacci(47i32).is_err()); // F(47) exceeds i32::MAX
/// ```
pub fn fibonacci<T>(n: T) -> Result<T, AlgorithmError>
where
    T: AlgorithmInteger,
{
    if n < T::ZERO {
        tracing::debug!(index = %n, "rejecting negative fibonacci index");
        return Err(AlgorithmError::NegativeIndex {
            index: n.to_i128().unwrap_or(i128::MIN),
        });
    }

    if n == T::ZERO {
        return Ok(T::ZERO);
    }

    let mut prev = T::ZERO;
    let mut curr = T::PLUS_ONE;
    let mut i = T::PLUS_ONE;

    while i < n {
        let Some(next) = prev.checked_add_val(curr) else {
            tracing::debug!(index = %n, reached = %i, "fibonacci result overflows");
            return Err(AlgorithmError::FibonacciOverflow {
                index: n.to_u128().unwrap_or(u128::MAX),
            });
        };
        prev = curr;
        curr = next;
        i = i + T::PLUS_ONE;
    }

    Ok(curr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_fibonacci_basic() {
        assert_eq!(fibonacci(0), Ok(0));
        assert_eq!(fibonacci(1), Ok(1));
        assert_eq!(fibonacci(2), Ok(1));
        assert_eq!(fibonacci(3), Ok(2));
        assert_eq!(fibonacci(4), Ok(3));
        assert_eq!(fibonacci(5), Ok(5));
    }

    #[test]
    fn test_fibonacci_large() {
        assert_eq!(fibonacci(10), Ok(55));
        assert_eq!(fibonacci(20), Ok(6765));
    }

    #[test]
    fn test_fibonacci_negative() {
        let err = fibonacci(-1).unwrap_err();
        assert_eq!(err, AlgorithmError::NegativeIndex { index: -1 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(fibonacci(i64::MIN).is_err());
    }

    #[test]
    fn test_fibonacci_type_limits() {
        assert_eq!(fibonacci(46i32), Ok(1_836_311_903));
        assert_eq!(
            fibonacci(47i32),
            Err(AlgorithmError::FibonacciOverflow { index: 47 })
        );

        assert_eq!(fibonacci(92i64), Ok(7_540_113_804_746_346_429));
        assert!(fibonacci(93i64).is_err());

        assert_eq!(fibonacci(93u64), Ok(12_200_160_415_121_876_738));
        assert!(fibonacci(94u64).is_err());
    }

    #[test]
    fn test_fibonacci_small_types() {
        assert_eq!(fibonacci(11i8), Ok(89));
        assert!(fibonacci(12i8).is_err()); // 144 > i8::MAX
        assert_eq!(fibonacci(13u8), Ok(233));
        assert!(fibonacci(14u8).is_err());
    }

    proptest! {
        #[test]
        fn prop_fibonacci_recurrence(n in 2i64..=92) {
            let f = fibonacci(n).unwrap();
            let f1 = fibonacci(n - 1).unwrap();
            let f2 = fibonacci(n - 2).unwrap();
            prop_assert_eq!(f, f1 + f2);
        }

        #[test]
        fn prop_fibonacci_rejects_every_negative_index(n in i32::MIN..0) {
            let err = fibonacci(n).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}

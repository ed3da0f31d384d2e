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

//! # Primality
//!
//! Trial division over odd divisors up to the integer square root.

use crate::num::AlgorithmInteger;

/// Returns `true` if `n` is a prime number.
///
/// Total over every integer: values `<= 1` are not prime, `2` is prime and
/// every other even value is composite. Odd candidates are divided by the odd
/// numbers `3, 5, 7, ...` up to and including `⌊√n⌋`.
///
/// The loop bound is evaluated as `d <= n / d`, which never overflows even
/// for inputs close to `T::MAX`.
///
/// # Examples
///
/// ```rust
/// # use primer_basics::is_prime;
/// assert!(is_prime(7));
/// assert!(!is_prime(6));
/// assert!(!is_prime(-7));
/// assert!(is_prime(2_147_483_647i64)); // 2^31 - 1
/// ```
pub fn is_prime<T>(n: T) -> bool
where
    T: AlgorithmInteger,
{
    let two = T::PLUS_ONE + T::PLUS_ONE;

    if n <= T::PLUS_ONE {
        return false;
    }
    if n == two {
        return true;
    }
    if n % two == T::ZERO {
        return false;
    }

    let mut d = two + T::PLUS_ONE;
    while d <= n / d {
        if n % d == T::ZERO {
            return false;
        }
        d = d + two;
    }

    true
}

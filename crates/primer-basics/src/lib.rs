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

//! # Primer Basics
//!
//! Textbook numeric and array algorithms for the introductory course,
//! implemented once and generic over the primitive integer types.
//!
//! ## Modules
//!
//! - `fibonacci`: Iterative `F(n)` with `F(0) = 0`, `F(1) = 1`, rejecting
//!   negative indices and results that do not fit the integer type.
//! - `primality`: Trial-division primality test up to `⌊√n⌋`.
//! - `array`: Reversal into a fresh `Vec` and linear maximum search over
//!   optional slices (an absent slice is an error, not an empty one).
//! - `error`: `AlgorithmError`, classified as `ErrorKind::InvalidArgument`.
//! - `num`: The `AlgorithmInteger` bound collecting what the algorithms need.
//!
//! ## Usage
//!
//! ```rust
//! use primer_basics::{fibonacci, find_max, is_prime, reverse_array};
//!
//! assert_eq!(fibonacci(10).unwrap(), 55);
//! assert!(is_prime(97));
//! assert_eq!(reverse_array(Some(&[1, 2, 3][..])).unwrap(), vec![3, 2, 1]);
//! assert_eq!(find_max(Some(&[-5, 0, 5, -10][..])).unwrap(), 5);
//! ```

pub mod array;
pub mod error;
pub mod fibonacci;
pub mod num;
pub mod primality;

pub use array::{find_max, reverse_array};
pub use error::AlgorithmError;
pub use fibonacci::fibonacci;
pub use primality::is_prime;

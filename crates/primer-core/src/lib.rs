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

//! # Primer Core
//!
//! Foundational numerics and error classification for the primer crates.
//! Both the algorithm utilities and the calculator build on the traits
//! collected here so that their generic code stays free of per-type calls.
//!
//! ## Modules
//!
//! - `num`: Associated constant traits (`Zero`, `PlusOne`) and by-value
//!   arithmetic traits for checked (`Option<T>`), saturating and wrapping
//!   addition, subtraction and multiplication.
//! - `error`: The `ErrorKind` classification every primer error reports.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod num;

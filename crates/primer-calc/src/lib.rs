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

//! # Primer Calculator
//!
//! Four-function integer calculator. Addition, subtraction and
//! multiplication are total; division returns an `f64` quotient and rejects a
//! zero divisor with `CalculatorError::DivisionByZero`.
//!
//! ## Modules
//!
//! - `calculator`: The `Calculator` type, its `OverflowMode` and the
//!   `CalculatorBuilder` used to configure it.
//! - `error`: `CalculatorError` and the `Operation` it refers to.
//! - `num`: The `Operand` bound accepted by every calculator method.
//!
//! ## Usage
//!
//! ```rust
//! use primer_calc::{Calculator, CalculatorBuilder, OverflowMode};
//!
//! let calculator = Calculator::new();
//! assert_eq!(calculator.add(-2, -3), -5);
//! assert!((calculator.divide(10, 3).unwrap() - 3.333333).abs() < 0.001);
//! assert!(calculator.divide(10, 0).is_err());
//!
//! let clamping = CalculatorBuilder::new()
//!     .with_overflow_mode(OverflowMode::Saturating)
//!     .build();
//! assert_eq!(clamping.add(i32::MAX, 1), i32::MAX);
//! ```

pub mod calculator;
pub mod error;
pub mod num;

pub use calculator::{Calculator, CalculatorBuilder, OverflowMode};
pub use error::{CalculatorError, Operation};
pub use num::Operand;

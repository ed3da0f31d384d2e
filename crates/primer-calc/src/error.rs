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

//! # Calculator Errors
//!
//! Division by zero and reported overflow, tagged with the failing operation.

use primer_core::error::ErrorKind;

/// The arithmetic operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the calculator.
///
/// Both variants are classified as [`ErrorKind::InvalidArgument`]: the
/// operands handed in are outside the domain of the requested operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{op} of {lhs} and {rhs} overflows the operand type")]
    Overflow {
        op: Operation,
        lhs: String,
        rhs: String,
    },
}

impl CalculatorError {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    /// Returns the operation that failed.
    #[inline]
    pub fn operation(&self) -> Operation {
        match self {
            Self::DivisionByZero => Operation::Divide,
            Self::Overflow { op, .. } => *op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message_mentions_zero() {
        let msg = CalculatorError::DivisionByZero.to_string();
        assert!(msg.contains("zero") || msg.contains('0'));
    }

    #[test]
    fn test_overflow_message_names_operation_and_operands() {
        let err = CalculatorError::Overflow {
            op: Operation::Multiply,
            lhs: "65536".to_string(),
            rhs: "65536".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "multiplication of 65536 and 65536 overflows the operand type"
        );
        assert_eq!(err.operation(), Operation::Multiply);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

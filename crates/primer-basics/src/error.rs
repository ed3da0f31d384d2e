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

//! # Algorithm Errors
//!
//! Precondition failures of the basic algorithms.

use primer_core::error::ErrorKind;

/// Errors raised when an algorithm's precondition is violated.
///
/// All variants share the [`ErrorKind::InvalidArgument`] kind; they differ
/// only in the message they carry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("n must be non-negative, got {index}")]
    NegativeIndex { index: i128 },
    #[error("fibonacci number at index {index} does not fit the result type")]
    FibonacciOverflow { index: u128 },
    #[error("array cannot be absent")]
    AbsentArray,
    #[error("array cannot be empty")]
    EmptyArray,
}

impl AlgorithmError {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_invalid_argument() {
        let errors = [
            AlgorithmError::NegativeIndex { index: -1 },
            AlgorithmError::FibonacciOverflow { index: 47 },
            AlgorithmError::AbsentArray,
            AlgorithmError::EmptyArray,
        ];
        for e in errors {
            assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_messages_distinguish_absent_and_empty() {
        assert_eq!(AlgorithmError::AbsentArray.to_string(), "array cannot be absent");
        assert_eq!(AlgorithmError::EmptyArray.to_string(), "array cannot be empty");
    }

    #[test]
    fn test_negative_index_message_names_requirement() {
        let msg = AlgorithmError::NegativeIndex { index: -3 }.to_string();
        assert!(msg.contains("non-negative"));
        assert!(msg.contains("-3"));
    }
}

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

//! # Error Kinds
//!
//! Every failure reported by the primer crates is a violated precondition on
//! an argument. The concrete error enums (`AlgorithmError`, `CalculatorError`)
//! carry a precise message, and all of them classify into the single
//! [`ErrorKind::InvalidArgument`] kind exposed here.
//!
//! Callers that only need to branch on the category should match on
//! `error.kind()` instead of the individual variants.

/// The category of a primer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A precondition on an argument's shape or value was violated.
    InvalidArgument,
}

impl ErrorKind {
    /// Returns a static, human-readable name for the kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use primer_core::error::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidArgument.as_str(), "InvalidArgument");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgument",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        let kind = ErrorKind::InvalidArgument;
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

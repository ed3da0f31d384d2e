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

use libc::c_char;
use primer_basics::AlgorithmError;
use primer_calc::CalculatorError;

/// FFI-compatible status returned by fallible operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimerFfiStatus {
    Ok = 0,
    InvalidArgument = 1,
}

impl PrimerFfiStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::InvalidArgument => "InvalidArgument",
        }
    }

    /// Same text as `as_str`, NUL-terminated for C callers.
    #[inline]
    fn as_c_str(&self) -> &'static [u8] {
        match self {
            Self::Ok => b"Ok\0",
            Self::InvalidArgument => b"InvalidArgument\0",
        }
    }
}

impl std::fmt::Display for PrimerFfiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&AlgorithmError> for PrimerFfiStatus {
    #[inline]
    fn from(_: &AlgorithmError) -> Self {
        PrimerFfiStatus::InvalidArgument
    }
}

impl From<&CalculatorError> for PrimerFfiStatus {
    #[inline]
    fn from(_: &CalculatorError) -> Self {
        PrimerFfiStatus::InvalidArgument
    }
}

/// Returns the name of a status as a static, NUL-terminated C string.
/// The pointer is valid for the lifetime of the process and must not be freed.
#[no_mangle]
pub extern "C" fn primer_status_str(status: PrimerFfiStatus) -> *const c_char {
    status.as_c_str().as_ptr().cast::<c_char>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_status_str_matches_display() {
        for status in [PrimerFfiStatus::Ok, PrimerFfiStatus::InvalidArgument] {
            let c = unsafe { CStr::from_ptr(primer_status_str(status)) };
            assert_eq!(c.to_str().unwrap(), status.to_string());
        }
    }

    #[test]
    fn test_errors_map_to_invalid_argument() {
        assert_eq!(
            PrimerFfiStatus::from(&AlgorithmError::EmptyArray),
            PrimerFfiStatus::InvalidArgument
        );
        assert_eq!(
            PrimerFfiStatus::from(&CalculatorError::DivisionByZero),
            PrimerFfiStatus::InvalidArgument
        );
    }
}

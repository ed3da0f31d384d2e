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

use crate::status::PrimerFfiStatus;
use primer_basics::{fibonacci, find_max, is_prime, reverse_array};

/// Builds the optional slice view of a C array. `NULL` means "absent".
///
/// # Safety
///
/// If `ptr` is non-null it must point to `len` readable, initialized values.
#[inline]
unsafe fn optional_slice<'a>(ptr: *const i64, len: usize) -> Option<&'a [i64]> {
    if ptr.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts(ptr, len))
    }
}

/// Computes the `n`th Fibonacci number and writes it to `out`.
///
/// Returns `InvalidArgument` if `n` is negative or `F(n)` does not fit in
/// an `i64` (`n > 92`); `out` is left untouched in that case.
///
/// # Panics
///
/// This function will panic if `out` is a null pointer.
///
/// # Safety
///
/// `out` must be valid for a write of one `i64`.
#[no_mangle]
pub unsafe extern "C" fn primer_fibonacci(n: i64, out: *mut i64) -> PrimerFfiStatus {
    assert!(!out.is_null(), "called `primer_fibonacci` with null out pointer");

    match fibonacci(n) {
        Ok(value) => {
            *out = value;
            PrimerFfiStatus::Ok
        }
        Err(e) => PrimerFfiStatus::from(&e),
    }
}

/// Returns `true` if `n` is prime.
#[no_mangle]
pub extern "C" fn primer_is_prime(n: i64) -> bool {
    is_prime(n)
}

/// Writes the `len` elements of `arr` in reverse order into `out`.
///
/// Returns `InvalidArgument` if `arr` is null. `out` may be null only
/// when `len` is zero.
///
/// # Panics
///
/// This function will panic if `out` is null while `len > 0`.
///
/// # Safety
///
/// `arr` must be null or point to `len` readable values; `out` must be valid
/// for `len` writes. The two buffers may not overlap.
#[no_mangle]
pub unsafe extern "C" fn primer_reverse_array(
    arr: *const i64,
    len: usize,
    out: *mut i64,
) -> PrimerFfiStatus {
    let reversed = match reverse_array(optional_slice(arr, len)) {
        Ok(reversed) => reversed,
        Err(e) => return PrimerFfiStatus::from(&e),
    };

    if len > 0 {
        assert!(
            !out.is_null(),
            "called `primer_reverse_array` with null out pointer and len {}",
            len
        );
        std::ptr::copy_nonoverlapping(reversed.as_ptr(), out, len);
    }
    PrimerFfiStatus::Ok
}

/// Writes the largest of the `len` elements of `arr` to `out`.
///
/// Returns `InvalidArgument` if `arr` is null or `len` is zero.
///
/// # Panics
///
/// This function will panic if `out` is a null pointer.
///
/// # Safety
///
/// `arr` must be null or point to `len` readable values; `out` must be valid
/// for a write of one `i64`.
#[no_mangle]
pub unsafe extern "C" fn primer_find_max(
    arr: *const i64,
    len: usize,
    out: *mut i64,
) -> PrimerFfiStatus {
    assert!(!out.is_null(), "called `primer_find_max` with null out pointer");

    match find_max(optional_slice(arr, len)) {
        Ok(max) => {
            *out = max;
            PrimerFfiStatus::Ok
        }
        Err(e) => PrimerFfiStatus::from(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_fibonacci_writes_result() {
        let mut out = -1;
        unsafe {
            assert_eq!(primer_fibonacci(20, &mut out), PrimerFfiStatus::Ok);
        }
        assert_eq!(out, 6765);
    }

    #[test]
    fn test_fibonacci_rejects_negative_and_overflow() {
        let mut out = -1;
        unsafe {
            assert_eq!(
                primer_fibonacci(-1, &mut out),
                PrimerFfiStatus::InvalidArgument
            );
            assert_eq!(
                primer_fibonacci(93, &mut out),
                PrimerFfiStatus::InvalidArgument
            );
        }
        assert_eq!(out, -1);
    }

    #[test]
    fn test_is_prime() {
        assert!(primer_is_prime(101));
        assert!(!primer_is_prime(99));
    }

    #[test]
    fn test_reverse_array() {
        let input = [1i64, 2, 3, 4, 5];
        let mut out = [0i64; 5];
        unsafe {
            assert_eq!(
                primer_reverse_array(input.as_ptr(), input.len(), out.as_mut_ptr()),
                PrimerFfiStatus::Ok
            );
        }
        assert_eq!(out, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_array_null_input() {
        let mut out = [0i64; 1];
        unsafe {
            assert_eq!(
                primer_reverse_array(ptr::null(), 1, out.as_mut_ptr()),
                PrimerFfiStatus::InvalidArgument
            );
        }
    }

    #[test]
    fn test_reverse_array_empty_allows_null_out() {
        let input: [i64; 0] = [];
        unsafe {
            assert_eq!(
                primer_reverse_array(input.as_ptr(), 0, ptr::null_mut()),
                PrimerFfiStatus::Ok
            );
        }
    }

    #[test]
    fn test_find_max() {
        let input = [-5i64, 0, 5, -10];
        let mut out = 0;
        unsafe {
            assert_eq!(
                primer_find_max(input.as_ptr(), input.len(), &mut out),
                PrimerFfiStatus::Ok
            );
        }
        assert_eq!(out, 5);
    }

    #[test]
    fn test_find_max_null_and_empty() {
        let input: [i64; 0] = [];
        let mut out = 0;
        unsafe {
            assert_eq!(
                primer_find_max(ptr::null(), 0, &mut out),
                PrimerFfiStatus::InvalidArgument
            );
            assert_eq!(
                primer_find_max(input.as_ptr(), 0, &mut out),
                PrimerFfiStatus::InvalidArgument
            );
        }
    }
}

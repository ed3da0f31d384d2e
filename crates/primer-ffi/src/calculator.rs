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
use primer_calc::{Calculator, CalculatorBuilder, OverflowMode};

/// FFI-compatible mirror of [`OverflowMode`].
///
/// A panic cannot unwind out of an `extern "C"` function, so `Native` is
/// served with wrapping arithmetic at this boundary. Overflow never aborts
/// the host, whatever the build profile.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimerFfiOverflowMode {
    /// Two's complement wrap-around, the behaviour of a C or Java `int64`.
    Native = 0,
    Wrapping = 1,
    Saturating = 2,
}

impl From<PrimerFfiOverflowMode> for OverflowMode {
    #[inline]
    fn from(mode: PrimerFfiOverflowMode) -> Self {
        match mode {
            PrimerFfiOverflowMode::Native | PrimerFfiOverflowMode::Wrapping => {
                OverflowMode::Wrapping
            }
            PrimerFfiOverflowMode::Saturating => OverflowMode::Saturating,
        }
    }
}

/// Creates a new calculator with the given overflow mode.
/// The returned pointer must be released with `primer_calculator_free`.
#[no_mangle]
pub extern "C" fn primer_calculator_new(mode: PrimerFfiOverflowMode) -> *mut Calculator {
    let calculator = CalculatorBuilder::new()
        .with_overflow_mode(mode.into())
        .build();
    Box::into_raw(Box::new(calculator))
}

/// Frees a calculator created by `primer_calculator_new`.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by `primer_calculator_new`
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn primer_calculator_free(ptr: *mut Calculator) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns `a + b` under the calculator's overflow mode.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// `ptr` must be a live pointer returned by `primer_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn primer_calculator_add(ptr: *const Calculator, a: i64, b: i64) -> i64 {
    assert!(
        !ptr.is_null(),
        "called `primer_calculator_add` with null pointer"
    );
    (*ptr).add(a, b)
}

/// Returns `a - b` under the calculator's overflow mode.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// `ptr` must be a live pointer returned by `primer_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn primer_calculator_subtract(
    ptr: *const Calculator,
    a: i64,
    b: i64,
) -> i64 {
    assert!(
        !ptr.is_null(),
        "called `primer_calculator_subtract` with null pointer"
    );
    (*ptr).subtract(a, b)
}

/// Returns `a * b` under the calculator's overflow mode.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// `ptr` must be a live pointer returned by `primer_calculator_new`.
#[no_mangle]
pub unsafe extern "C" fn primer_calculator_multiply(
    ptr: *const Calculator,
    a: i64,
    b: i64,
) -> i64 {
    assert!(
        !ptr.is_null(),
        "called `primer_calculator_multiply` with null pointer"
    );
    (*ptr).multiply(a, b)
}

/// Divides `a` by `b` as floating point and writes the quotient to `out`.
///
/// Returns `InvalidArgument` if `b` is zero; `out` is left untouched.
///
/// # Panics
///
/// This function will panic if `ptr` or `out` is a null pointer.
///
/// # Safety
///
/// `ptr` must be a live pointer returned by `primer_calculator_new` and
/// `out` must be valid for a write of one `f64`.
#[no_mangle]
pub unsafe extern "C" fn primer_calculator_divide(
    ptr: *const Calculator,
    a: i64,
    b: i64,
    out: *mut f64,
) -> PrimerFfiStatus {
    assert!(
        !ptr.is_null(),
        "called `primer_calculator_divide` with null pointer"
    );
    assert!(
        !out.is_null(),
        "called `primer_calculator_divide` with null out pointer"
    );

    match (*ptr).divide(a, b) {
        Ok(quotient) => {
            *out = quotient;
            PrimerFfiStatus::Ok
        }
        Err(e) => PrimerFfiStatus::from(&e),
    }
}

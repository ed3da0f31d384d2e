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

//! # Primer FFI
//!
//! **C-compatible bindings for the primer algorithms and calculator.**
//!
//! This crate exposes the Rust implementations to foreign test harnesses
//! (C, C++, Python via `ctypes`, Java via JNA/Panama) through a small,
//! ABI-stable surface.
//!
//! ## Core Design Principles
//!
//! 1.  **Status Codes**: Every operation with a precondition returns a
//!     `PrimerFfiStatus` and writes its result through an out-pointer.
//!     `primer_status_str` turns a status into a static C string.
//! 2.  **Absent Arrays Are Errors**: A `NULL` input array is the C spelling of
//!     an absent array and is reported as `InvalidArgument`, never as a crash.
//! 3.  **Opaque Handles**: `Calculator` values live behind a raw pointer
//!     created by `primer_calculator_new` and released by
//!     `primer_calculator_free`.
//! 4.  **No Arithmetic Panics**: Calculator handles never use the panicking
//!     operators. `PrimerFfiOverflowMode::Native` wraps like a C `int64_t`.
//! 5.  **Fail-Fast Safety**: `NULL` handles and `NULL` out-pointers are
//!     programming errors of the host and abort the process with a message
//!     naming the offending function.

pub mod basics;
pub mod calculator;
pub mod status;

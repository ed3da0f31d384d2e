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

//! # Array Utilities
//!
//! Reversal and maximum search over optional slices. `None` models an
//! absent array and is always rejected with [`AlgorithmError::AbsentArray`];
//! an empty slice is a valid (if uninteresting) input for reversal but has no
//! maximum.

use crate::error::AlgorithmError;

/// Returns a new vector holding the elements of `arr` in reverse order.
///
/// The input slice is left untouched. An empty slice yields an empty vector.
///
/// # Errors
///
/// [`AlgorithmError::AbsentArray`] if `arr` is `None`.
///
/// # Examples
///
/// ```rust
/// # use primer_basics::reverse_array;
/// let input = [1, 2, 3, 4, 5];
/// assert_eq!(reverse_array(Some(&input[..])).unwrap(), vec![5, 4, 3, 2, 1]);
/// assert_eq!(input, [1, 2, 3, 4, 5]);
/// assert!(reverse_array::<i32>(None).is_err());
/// ```
pub fn reverse_array<T>(arr: Option<&[T]>) -> Result<Vec<T>, AlgorithmError>
where
    T: Clone,
{
    let Some(arr) = arr else {
        tracing::debug!("rejecting absent array for reversal");
        return Err(AlgorithmError::AbsentArray);
    };

    Ok(arr.iter().rev().cloned().collect())
}

/// Returns the largest element of `arr`.
///
/// A single linear scan keeps the running maximum, starting from the first
/// element. Ties resolve to the first occurrence.
///
/// # Errors
///
/// - [`AlgorithmError::AbsentArray`] if `arr` is `None`.
/// - [`AlgorithmError::EmptyArray`] if `arr` has no elements.
///
/// # Examples
///
/// ```rust
/// # use primer_basics::{find_max, AlgorithmError};
/// assert_eq!(find_max(Some(&[-5, -3, -1, -10][..])), Ok(-1));
/// assert_eq!(find_max::<i32>(Some(&[])), Err(AlgorithmError::EmptyArray));
/// ```
pub fn find_max<T>(arr: Option<&[T]>) -> Result<T, AlgorithmError>
where
    T: Ord + Copy,
{
    let Some(arr) = arr else {
        tracing::debug!("rejecting absent array for maximum search");
        return Err(AlgorithmError::AbsentArray);
    };

    let Some((&first, rest)) = arr.split_first() else {
        tracing::debug!(len = 0usize, "rejecting empty array for maximum search");
        return Err(AlgorithmError::EmptyArray);
    };

    Ok(rest
        .iter()
        .fold(first, |max, &x| if x > max { x } else { max }))
}

//! The result algebra.
//!
//! A validation outcome is a plain [`Result`] over [`StructError`]; these
//! helpers name the operations callers reach for when treating it as data.

use crate::foundation::StructError;

/// The outcome of applying a struct to an input.
pub type StructResult<T> = Result<T, StructError>;

/// Wraps `data` as a successful result, exactly as given.
#[inline]
pub fn ok<T>(data: T) -> StructResult<T> {
    Ok(data)
}

/// Wraps `error` as a failed result.
#[inline]
pub fn err<T>(error: StructError) -> StructResult<T> {
    Err(error)
}

/// Returns true if `result` holds validated data.
#[inline]
#[must_use]
pub fn is_ok<T>(result: &StructResult<T>) -> bool {
    result.is_ok()
}

/// Returns true if `result` holds an error.
#[inline]
#[must_use]
pub fn is_err<T>(result: &StructResult<T>) -> bool {
    result.is_err()
}

/// Returns the validated data, panicking with the error's message otherwise.
///
/// Use this where a validation failure is a bug rather than bad input.
///
/// # Panics
///
/// Panics if `result` is an error.
#[track_caller]
pub fn unwrap<T>(result: StructResult<T>) -> T {
    match result {
        Ok(data) => data,
        Err(error) => {
            tracing::error!(code = %error.code, path = %error.path_string(), "unwrapped a failed validation");
            panic!("validation failed: {error}")
        }
    }
}

/// Returns the validated data or `fallback`. Never panics.
#[inline]
pub fn unwrap_or<T>(result: StructResult<T>, fallback: T) -> T {
    result.unwrap_or(fallback)
}

/// Returns the validated data or computes a fallback from the error.
#[inline]
pub fn unwrap_or_else<T, F>(result: StructResult<T>, fallback: F) -> T
where
    F: FnOnce(StructError) -> T,
{
    result.unwrap_or_else(fallback)
}

//! MAP combinators - transform validated output
//!
//! [`Map`] applies an infallible transform, [`TryMap`] one that may reject
//! the value. Both forward failures of the inner struct untouched, without
//! calling the transform.
//!
//! # Examples
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let length = map(string(), |s| s.len());
//! assert_eq!(length.validate(&json!("hello")).unwrap(), 5);
//! assert!(length.validate(&json!(42)).is_err());
//!
//! let port = try_map(integer(), |n| {
//!     u16::try_from(n).map_err(|_| StructError::custom("port out of range"))
//! });
//! assert_eq!(port.validate(&json!(443)).unwrap(), 443);
//! assert_eq!(port.validate(&json!(-1)).unwrap_err().code, "custom");
//! ```

use serde_json::Value;

use crate::foundation::{Struct, StructResult};

// ============================================================================
// MAP
// ============================================================================

/// Transforms the output of a struct with an infallible function.
#[derive(Clone, Copy)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    /// Creates a new `Map` combinator.
    pub fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns a reference to the inner struct.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, U> Struct for Map<S, F>
where
    S: Struct,
    F: Fn(S::Output) -> U,
{
    type Output = U;

    fn check(&self, input: Option<&Value>) -> StructResult<U> {
        self.inner.check(input).map(&self.f)
    }
}

/// Creates a [`Map`] combinator.
pub fn map<S, F, U>(inner: S, f: F) -> Map<S, F>
where
    S: Struct,
    F: Fn(S::Output) -> U,
{
    Map::new(inner, f)
}

// ============================================================================
// TRY MAP
// ============================================================================

/// Transforms the output of a struct with a function that may fail.
///
/// Errors of the transform are returned as they are; build them with
/// [`StructError::custom`](crate::foundation::StructError::custom).
#[derive(Clone, Copy)]
pub struct TryMap<S, F> {
    inner: S,
    f: F,
}

impl<S, F> TryMap<S, F> {
    /// Creates a new `TryMap` combinator.
    pub fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns a reference to the inner struct.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for TryMap<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMap")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, U> Struct for TryMap<S, F>
where
    S: Struct,
    F: Fn(S::Output) -> StructResult<U>,
{
    type Output = U;

    fn check(&self, input: Option<&Value>) -> StructResult<U> {
        self.inner.check(input).and_then(&self.f)
    }
}

/// Creates a [`TryMap`] combinator.
pub fn try_map<S, F, U>(inner: S, f: F) -> TryMap<S, F>
where
    S: Struct,
    F: Fn(S::Output) -> StructResult<U>,
{
    TryMap::new(inner, f)
}

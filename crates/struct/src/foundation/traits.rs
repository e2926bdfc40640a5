//! Core traits for the struct system
//!
//! [`Struct`] is the one trait every validator implements; [`StructExt`]
//! adds the fluent combinator methods to every implementor.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::combinators::chain::Chain;
use crate::combinators::default::Defaulted;
use crate::combinators::map::{Map, TryMap};
use crate::combinators::message::WithMessage;
use crate::combinators::nullable::Nullable;
use crate::combinators::optional::Optional;
use crate::combinators::union::Or;
use crate::foundation::StructResult;
use crate::foundation::boxed::{BoxedStruct, Erased};

// ============================================================================
// CORE STRUCT TRAIT
// ============================================================================

/// A pure function from dynamic input to a validated, owned output.
///
/// Implementors only ever borrow their input, so whatever they return shares
/// no storage with it. They hold no mutable state and may be shared freely
/// across threads when their parts are `Send + Sync`.
///
/// # Examples
///
/// ```
/// use ferrule_struct::foundation::{Struct, StructError, StructResult};
/// use serde_json::{Value, json};
///
/// struct Even;
///
/// impl Struct for Even {
///     type Output = i64;
///
///     fn check(&self, input: Option<&Value>) -> StructResult<i64> {
///         match input.and_then(Value::as_i64) {
///             Some(n) if n % 2 == 0 => Ok(n),
///             _ => Err(StructError::new("even", "expected an even integer").with_input(input)),
///         }
///     }
/// }
///
/// assert_eq!(Even.validate(&json!(4)).unwrap(), 4);
/// assert!(Even.validate(&json!(3)).is_err());
/// ```
pub trait Struct {
    /// The validated output type.
    type Output;

    /// Validates `input`, where `None` is the absent value (a missing key).
    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output>;

    /// Validates a present value.
    fn validate(&self, input: &Value) -> StructResult<Self::Output> {
        self.check(Some(input))
    }
}

impl<S: Struct + ?Sized> Struct for &S {
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        (**self).check(input)
    }
}

impl<S: Struct + ?Sized> Struct for Box<S> {
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        (**self).check(input)
    }
}

impl<S: Struct + ?Sized> Struct for Arc<S> {
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        (**self).check(input)
    }
}

// ============================================================================
// FUNCTION STRUCTS
// ============================================================================

/// A struct backed by a plain function.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    check: F,
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("check", &"<function>").finish()
    }
}

impl<F, T> Struct for FromFn<F>
where
    F: Fn(Option<&Value>) -> StructResult<T>,
{
    type Output = T;

    fn check(&self, input: Option<&Value>) -> StructResult<T> {
        (self.check)(input)
    }
}

/// Builds a struct from a function of the (possibly absent) input.
///
/// # Examples
///
/// ```
/// use ferrule_struct::foundation::{Struct, StructError, from_fn};
/// use serde_json::{Value, json};
///
/// let port = from_fn(|input: Option<&Value>| {
///     input
///         .and_then(Value::as_u64)
///         .and_then(|n| u16::try_from(n).ok())
///         .ok_or_else(|| StructError::type_mismatch("port", input))
/// });
///
/// assert_eq!(port.validate(&json!(8080)).unwrap(), 8080);
/// assert!(port.validate(&json!(70000)).is_err());
/// ```
pub fn from_fn<F, T>(check: F) -> FromFn<F>
where
    F: Fn(Option<&Value>) -> StructResult<T>,
{
    FromFn { check }
}

// ============================================================================
// STRUCT EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Struct`].
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let slug = string().chain(|s| s.trim().to_lowercase());
/// assert_eq!(slug.validate(&json!("  Hello ")).unwrap(), "hello");
///
/// let length = string().map(|s| s.len());
/// assert_eq!(length.validate(&json!("hello")).unwrap(), 5);
/// ```
pub trait StructExt: Struct + Sized {
    /// Transforms the validated output into another type.
    ///
    /// Failures of `self` are forwarded and `f` is not called.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Transforms the validated output with a function that may itself fail.
    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> StructResult<U>,
    {
        TryMap::new(self, f)
    }

    /// Appends a same-type transform (trimming, normalizing, ...).
    fn chain<F>(self, f: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> Self::Output,
    {
        Chain::new(self, vec![f])
    }

    /// Accepts the input if either `self` or `other` does, trying `self` first.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Struct<Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Accepts absent input as `None`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Accepts `null` input as `None`.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Uses `fallback` when the input is absent.
    fn default_to(self, fallback: Self::Output) -> Defaulted<Self>
    where
        Self::Output: Clone,
    {
        Defaulted::new(self, fallback)
    }

    /// Replaces the message of any error this struct returns.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Serializes the validated output into a fresh [`Value`].
    fn erase(self) -> Erased<Self>
    where
        Self::Output: Serialize,
    {
        Erased::new(self)
    }

    /// Boxes the struct behind a trait object.
    fn boxed(self) -> BoxedStruct<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<S: Struct> StructExt for S {}

// ============================================================================
// TESTS
// ============================================================================

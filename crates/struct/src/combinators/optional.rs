//! OPTIONAL combinator - accepts an absent value

use serde_json::Value;

use crate::foundation::{Struct, StructResult};

/// Accepts absent input as `None` and validates anything else with the
/// inner struct.
///
/// Only absence is special: a present `null` still goes to the inner struct.
/// Combine with [`nullable`](crate::combinators::nullable) to accept both.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let nickname = optional(string());
/// assert_eq!(nickname.check(None).unwrap(), None);
/// assert_eq!(nickname.validate(&json!("x")).unwrap(), Some("x".to_string()));
/// assert!(nickname.validate(&json!(null)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<S> {
    inner: S,
}

impl<S> Optional<S> {
    /// Creates a new optional struct.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner struct.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Extracts the inner struct.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Struct> Struct for Optional<S> {
    type Output = Option<S::Output>;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        match input {
            None => Ok(None),
            Some(_) => self.inner.check(input).map(Some),
        }
    }
}

/// Creates an [`Optional`] struct.
pub fn optional<S: Struct>(inner: S) -> Optional<S> {
    Optional::new(inner)
}

//! NULLABLE combinator - accepts JSON `null`

use serde_json::Value;

use crate::foundation::{Struct, StructResult};

/// Accepts `null` input as `None` and validates anything else, absence
/// included, with the inner struct.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let parent = nullable(integer());
/// assert_eq!(parent.validate(&json!(null)).unwrap(), None);
/// assert_eq!(parent.validate(&json!(7)).unwrap(), Some(7));
/// assert!(parent.check(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<S> {
    inner: S,
}

impl<S> Nullable<S> {
    /// Creates a new nullable struct.
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

impl<S: Struct> Struct for Nullable<S> {
    type Output = Option<S::Output>;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        match input {
            Some(Value::Null) => Ok(None),
            _ => self.inner.check(input).map(Some),
        }
    }
}

/// Creates a [`Nullable`] struct.
pub fn nullable<S: Struct>(inner: S) -> Nullable<S> {
    Nullable::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::optional;
    use crate::primitives::{null, string};
    use serde_json::json;

    #[test]
    fn test_null_short_circuits() {
        // `null()` would accept it too; `nullable` must not even ask.
        assert_eq!(nullable(null()).validate(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_present_values_are_wrapped() {
        assert_eq!(
            nullable(string()).validate(&json!("x")).unwrap(),
            Some("x".to_string())
        );
        assert_eq!(
            nullable(string()).validate(&json!(1)).unwrap_err().message,
            "expected string, found number"
        );
    }

    #[test]
    fn test_absent_is_not_null() {
        let error = nullable(string()).check(None).unwrap_err();
        assert_eq!(error.message, "expected string, found absent");
    }

    #[test]
    fn test_optional_nullable_accepts_both() {
        let either = optional(nullable(string()));
        assert_eq!(either.check(None).unwrap(), None);
        assert_eq!(either.validate(&Value::Null).unwrap(), Some(None));
    }
}

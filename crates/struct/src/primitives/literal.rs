//! Exact-value structs

use serde_json::Value;

use crate::foundation::{Struct, StructError, StructResult};

crate::primitive! {
    /// Accepts JSON `null` only.
    pub Null -> (), "null";
    accept(value) { value.is_null().then_some(()) }
    fn null();
}

/// Accepts a value deep-equal to a fixed JSON value.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let version = literal(json!(2));
/// assert!(version.validate(&json!(2)).is_ok());
/// assert_eq!(version.validate(&json!(3)).unwrap_err().code, "literal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    expected: Value,
}

impl Literal {
    /// Creates the struct from the accepted value.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Returns the accepted value.
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Struct for Literal {
    type Output = Value;

    fn check(&self, input: Option<&Value>) -> StructResult<Value> {
        match input {
            Some(value) if *value == self.expected => Ok(value.clone()),
            _ => Err(
                StructError::new("literal", format!("expected literal {}", self.expected))
                    .with_input(input),
            ),
        }
    }
}

/// Creates a [`Literal`] struct.
pub fn literal(expected: impl Into<Value>) -> Literal {
    Literal::new(expected)
}

//! Coercing structs
//!
//! These accept values of adjacent kinds and convert them before checking,
//! e.g. the numeric string `"42"` for a number. They are never applied
//! implicitly: a schema opts in by using `as_number()` instead of `number()`.
//! A failed conversion is an ordinary `type_mismatch`.

use serde_json::Value;

use crate::foundation::{Struct, StructError, StructResult};

fn parse_finite(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn integral(n: f64) -> Option<i64> {
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive.
    (n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64).then_some(n as i64)
}

crate::primitive! {
    /// Accepts numbers and numeric strings (surrounding whitespace allowed).
    ///
    /// ```
    /// use ferrule_struct::prelude::*;
    /// use serde_json::json;
    ///
    /// assert_eq!(as_number().validate(&json!(" 4.5 ")).unwrap(), 4.5);
    /// assert!(as_number().validate(&json!("4.5kg")).is_err());
    /// ```
    pub AsNumber -> f64, "number";
    accept(value) {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_finite(s),
            _ => None,
        }
    }
    fn as_number();
}

crate::primitive! {
    /// Accepts integers, integral floats and integer strings.
    pub AsInteger -> i64, "integer";
    accept(value) {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
    fn as_integer();
}

crate::primitive! {
    /// Accepts booleans, the strings `"true"`/`"false"` and the numbers `0`/`1`.
    pub AsBoolean -> bool, "boolean";
    accept(value) {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Value::Number(n) => match n.as_f64() {
                Some(n) if n == 0.0 => Some(false),
                Some(n) if n == 1.0 => Some(true),
                _ => None,
            },
            _ => None,
        }
    }
    fn as_boolean();
}

crate::primitive! {
    /// Accepts strings, and renders numbers and booleans as strings.
    pub AsString -> String, "string";
    accept(value) {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
    fn as_string();
}

// ============================================================================
// JSON STRING
// ============================================================================

/// Parses a string as JSON and validates the parsed document with `inner`.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let embedded = json_string(array(integer()));
/// assert_eq!(embedded.validate(&json!("[1, 2]")).unwrap(), vec![1, 2]);
/// assert_eq!(embedded.validate(&json!("[1,")).unwrap_err().code, "json");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonString<S> {
    inner: S,
}

impl<S> JsonString<S> {
    /// Wraps `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner struct.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Struct> Struct for JsonString<S> {
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<S::Output> {
        let Some(text) = input.and_then(Value::as_str) else {
            return Err(StructError::type_mismatch("JSON string", input));
        };
        let parsed: Value = serde_json::from_str(text).map_err(|error| {
            StructError::new("json", format!("invalid JSON: {error}")).with_input(input)
        })?;
        self.inner.validate(&parsed)
    }
}

/// Creates a [`JsonString`] struct.
pub fn json_string<S: Struct>(inner: S) -> JsonString<S> {
    JsonString::new(inner)
}

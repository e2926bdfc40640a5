//! OBJECT combinator - validates keyed shapes
//!
//! An [`Object`] checks each declared key of a JSON object with its own
//! struct and builds a fresh map holding only the declared keys. Undeclared
//! input keys are dropped, or rejected with
//! [`deny_unknown_keys`](Object::deny_unknown_keys).
//!
//! # Examples
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let point = object(shape! { "x" => number(), "y" => number() });
//!
//! let output = point.validate(&json!({"x": 1, "y": 2, "z": 3})).unwrap();
//! assert_eq!(serde_json::Value::Object(output), json!({"x": 1.0, "y": 2.0}));
//!
//! let error = point.validate(&json!({"x": 1, "y": "2"})).unwrap_err();
//! assert_eq!(error.path_string(), "$.y");
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::foundation::{Erased, Struct, StructError, StructResult};

type FieldStruct = Box<dyn Struct<Output = Value> + Send + Sync>;

// ============================================================================
// SHAPE
// ============================================================================

/// An ordered mapping from field name to field struct.
///
/// Field outputs are serialized into [`Value`]s, so any struct whose output
/// implements `Serialize` can be a field.
#[derive(Default)]
pub struct Shape {
    fields: Vec<(String, FieldStruct)>,
}

impl Shape {
    /// Creates an empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Redeclaring a key replaces its struct but keeps
    /// its original position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<S>(mut self, key: impl Into<String>, field: S) -> Self
    where
        S: Struct + Send + Sync + 'static,
        S::Output: Serialize,
    {
        let key = key.into();
        let field: FieldStruct = Box::new(Erased::new(field));
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = field,
            None => self.fields.push((key, field)),
        }
        self
    }

    /// Returns the declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Returns true if `key` is declared.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(existing, _)| existing == key)
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// OBJECT COMBINATOR
// ============================================================================

/// Validates a JSON object against a [`Shape`].
#[derive(Debug)]
pub struct Object {
    shape: Shape,
    deny_unknown_keys: bool,
}

impl Object {
    /// Creates an object struct that drops undeclared keys.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            deny_unknown_keys: false,
        }
    }

    /// Rejects inputs carrying keys the shape does not declare.
    #[must_use = "builder methods must be chained or built"]
    pub fn deny_unknown_keys(mut self) -> Self {
        self.deny_unknown_keys = true;
        self
    }

    /// Returns the shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Struct for Object {
    type Output = Map<String, Value>;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        let object = expect_object(input)?;

        let mut output = Map::new();
        for (key, field) in &self.shape.fields {
            let value = check_field(field, object, key)?;
            // An absent key that the field accepted as `null` stays absent.
            if value.is_null() && !object.contains_key(key) {
                continue;
            }
            output.insert(key.clone(), value);
        }

        if self.deny_unknown_keys {
            if let Some((key, value)) = object
                .iter()
                .find(|(key, _)| !self.shape.contains_key(key))
            {
                tracing::trace!(key = %key, "object rejected undeclared key");
                return Err(
                    StructError::new("unknown_key", format!("unexpected key `{key}`"))
                        .with_input(Some(value))
                        .at_key(key.clone()),
                );
            }
        }

        Ok(output)
    }
}

/// Creates an [`Object`] struct.
pub fn object(shape: Shape) -> Object {
    Object::new(shape)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Narrows `input` to a JSON object or fails with `type_mismatch`.
pub fn expect_object(input: Option<&Value>) -> StructResult<&Map<String, Value>> {
    match input {
        Some(Value::Object(object)) => Ok(object),
        _ => Err(StructError::type_mismatch("object", input)),
    }
}

/// Validates `object[key]` (absent when missing) and prefixes any error
/// with `key`.
pub fn check_field<S: Struct>(
    field: &S,
    object: &Map<String, Value>,
    key: &str,
) -> StructResult<S::Output> {
    field.check(object.get(key)).map_err(|error| {
        tracing::trace!(key, code = %error.code, "object field rejected");
        error.at_key(key)
    })
}

//! RECORD combinator - validates string-keyed maps
//!
//! Unlike [`object`](crate::combinators::object), a record has no declared
//! keys: every entry of the input object is validated by the same struct.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::combinators::object::{check_field, expect_object};
use crate::foundation::{Struct, StructResult};

/// Validates every value of a JSON object with the same struct.
///
/// Entries are checked in key order and the first failure is returned with
/// its key in the path.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let scores = record(integer());
/// let output = scores.validate(&json!({"bob": 3, "alice": 5})).unwrap();
/// assert_eq!(output.keys().collect::<Vec<_>>(), ["alice", "bob"]);
///
/// let error = scores.validate(&json!({"bob": "x"})).unwrap_err();
/// assert_eq!(error.path_string(), "$.bob");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Record<S> {
    value: S,
}

impl<S> Record<S> {
    /// Creates a new record struct.
    pub fn new(value: S) -> Self {
        Self { value }
    }

    /// Returns a reference to the value struct.
    pub fn value(&self) -> &S {
        &self.value
    }
}

impl<S: Struct> Struct for Record<S> {
    type Output = BTreeMap<String, S::Output>;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        let object = expect_object(input)?;
        let mut keys: Vec<&String> = object.keys().collect();
        keys.sort_unstable();

        let mut output = BTreeMap::new();
        for key in keys {
            let value = check_field(&self.value, object, key)?;
            output.insert(key.clone(), value);
        }
        Ok(output)
    }
}

/// Creates a [`Record`] struct.
pub fn record<S: Struct>(value: S) -> Record<S> {
    Record::new(value)
}

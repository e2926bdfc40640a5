//! ARRAY combinator - validates homogeneous sequences

use serde_json::Value;

use crate::foundation::{Struct, StructError, StructResult};

/// Validates every element of a JSON array with the same struct.
///
/// Elements are checked in index order; the first failure is returned with
/// its index in the path. On success the output is a fresh `Vec`.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let tags = array(string());
/// assert_eq!(tags.validate(&json!(["a", "b"])).unwrap(), ["a", "b"]);
///
/// let error = tags.validate(&json!(["a", 2, 3])).unwrap_err();
/// assert_eq!(error.path_string(), "$[1]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Array<S> {
    item: S,
}

impl<S> Array<S> {
    /// Creates a new array struct.
    pub fn new(item: S) -> Self {
        Self { item }
    }

    /// Returns a reference to the element struct.
    pub fn item(&self) -> &S {
        &self.item
    }

    /// Extracts the element struct.
    pub fn into_inner(self) -> S {
        self.item
    }
}

impl<S: Struct> Struct for Array<S> {
    type Output = Vec<S::Output>;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        let items = expect_array(input)?;
        items
            .iter()
            .enumerate()
            .map(|(index, element)| {
                self.item
                    .validate(element)
                    .map_err(|error| reject_element(index, error))
            })
            .collect()
    }
}

/// Creates an [`Array`] struct.
pub fn array<S: Struct>(item: S) -> Array<S> {
    Array::new(item)
}

pub(crate) fn expect_array(input: Option<&Value>) -> StructResult<&Vec<Value>> {
    match input {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(StructError::type_mismatch("array", input)),
    }
}

pub(crate) fn reject_element(index: usize, error: StructError) -> StructError {
    tracing::trace!(index, code = %error.code, "element rejected");
    error.at_index(index)
}

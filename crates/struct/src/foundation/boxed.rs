//! Type erasure for structs.
//!
//! Heterogeneous collections of structs (object shapes, unions over
//! differently-typed alternatives) need a common type. [`BoxedStruct`] erases
//! the struct type; [`Erased`] additionally erases the output type by
//! serializing it into a [`Value`].

use serde::Serialize;
use serde_json::Value;

use crate::foundation::{Struct, StructError, StructResult};

/// A struct behind a trait object.
pub type BoxedStruct<T> = Box<dyn Struct<Output = T> + Send + Sync>;

/// Runs the inner struct and serializes its output into a fresh [`Value`].
#[derive(Debug, Clone, Copy)]
pub struct Erased<S> {
    inner: S,
}

impl<S> Erased<S> {
    /// Wraps `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner struct.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S> Struct for Erased<S>
where
    S: Struct,
    S::Output: Serialize,
{
    type Output = Value;

    fn check(&self, input: Option<&Value>) -> StructResult<Value> {
        let output = self.inner.check(input)?;
        serde_json::to_value(output).map_err(|error| {
            StructError::new("output", format!("validated value is not representable: {error}"))
                .with_input(input)
        })
    }
}

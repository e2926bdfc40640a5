//! UNION combinator - first matching alternative wins
//!
//! Alternatives are tried in declaration order and the first success is
//! returned. When every alternative fails, the single `union` error carries
//! the raw input and each alternative's error in its causes.
//!
//! # Examples
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let id = union(vec![string().boxed(), as_string().boxed()]);
//! assert_eq!(id.validate(&json!(42)).unwrap(), "42");
//!
//! let error = id.validate(&json!(null)).unwrap_err();
//! assert_eq!(error.code, "union");
//! assert_eq!(error.causes.len(), 2);
//! ```

use serde_json::Value;

use crate::foundation::{Struct, StructError, StructResult};

fn no_match(input: Option<&Value>, causes: Vec<StructError>) -> StructError {
    tracing::trace!(alternatives = causes.len(), "no union alternative matched");
    StructError::new("union", "no alternative matched")
        .with_input(input)
        .with_causes(causes)
}

// ============================================================================
// OR
// ============================================================================

/// Two-way union of structs with the same output type.
///
/// The right struct is only tried when the left one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left struct.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right struct.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right structs.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Struct for Or<L, R>
where
    L: Struct,
    R: Struct<Output = L::Output>,
{
    type Output = L::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        match self.left.check(input) {
            Ok(output) => Ok(output),
            Err(left_error) => match self.right.check(input) {
                Ok(output) => Ok(output),
                Err(right_error) => Err(no_match(input, vec![left_error, right_error])),
            },
        }
    }
}

// ============================================================================
// UNION
// ============================================================================

/// Union over any number of structs sharing one type.
///
/// Mixed struct types go through [`boxed`](crate::foundation::StructExt::boxed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union<S> {
    alternatives: Vec<S>,
}

impl<S> Union<S> {
    /// Creates a union from its alternatives, tried in order.
    pub fn new(alternatives: Vec<S>) -> Self {
        Self { alternatives }
    }

    /// Returns the alternatives.
    pub fn alternatives(&self) -> &[S] {
        &self.alternatives
    }
}

impl<S: Struct> Struct for Union<S> {
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        let mut causes = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.check(input) {
                Ok(output) => return Ok(output),
                Err(error) => causes.push(error),
            }
        }
        Err(no_match(input, causes))
    }
}

/// Creates a [`Union`] struct. A union with no alternatives rejects every
/// input.
pub fn union<S: Struct>(alternatives: Vec<S>) -> Union<S> {
    Union::new(alternatives)
}

//! CHAIN combinator - same-type post-processing
//!
//! A [`Chain`] runs its base struct and then threads the value through each
//! step in order. Steps cannot fail; use
//! [`try_map`](crate::combinators::try_map) for a transform that rejects.

use serde_json::Value;

use crate::foundation::{Struct, StructResult};

/// A boxed step for chains mixing closures of different types.
pub type Step<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Runs a base struct followed by same-type transforms.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// fn trim(s: String) -> String {
///     s.trim().to_string()
/// }
///
/// fn lower(s: String) -> String {
///     s.to_lowercase()
/// }
///
/// let normalized = chain(string(), [trim as fn(String) -> String, lower]);
/// assert_eq!(normalized.validate(&json!("  Hello  ")).unwrap(), "hello");
/// ```
#[derive(Clone)]
pub struct Chain<S, F> {
    base: S,
    steps: Vec<F>,
}

impl<S, F> Chain<S, F> {
    /// Creates a new chain from a base struct and its steps.
    pub fn new(base: S, steps: Vec<F>) -> Self {
        Self { base, steps }
    }

    /// Appends a step of the same type.
    #[must_use = "builder methods must be chained or built"]
    pub fn then(mut self, step: F) -> Self {
        self.steps.push(step);
        self
    }

    /// Returns a reference to the base struct.
    pub fn base(&self) -> &S {
        &self.base
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the chain has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for Chain<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("base", &self.base)
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<S, F> Struct for Chain<S, F>
where
    S: Struct,
    F: Fn(S::Output) -> S::Output,
{
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        let value = self.base.check(input)?;
        Ok(self.steps.iter().fold(value, |value, step| step(value)))
    }
}

/// Creates a [`Chain`] from a base struct and its steps, applied in order.
pub fn chain<S, F>(base: S, steps: impl IntoIterator<Item = F>) -> Chain<S, F>
where
    S: Struct,
    F: Fn(S::Output) -> S::Output,
{
    Chain::new(base, steps.into_iter().collect())
}

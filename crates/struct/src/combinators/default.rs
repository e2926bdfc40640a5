//! DEFAULT combinator - fallback for absent values

use serde_json::Value;

use crate::foundation::{Struct, StructResult};

/// Yields a clone of `fallback` for absent input; present input, `null`
/// included, goes to the inner struct.
///
/// As an [`object`](crate::combinators::object()) field the fallback fills
/// the missing key, except a fallback that serializes to `null`: the key
/// then stays absent like any other absent `null` output.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let config = object(shape! {
///     "host" => string(),
///     "port" => integer().default_to(8080),
/// });
///
/// let output = config.validate(&json!({"host": "localhost"})).unwrap();
/// assert_eq!(output["port"], json!(8080));
/// ```
#[derive(Debug, Clone)]
pub struct Defaulted<S: Struct> {
    inner: S,
    fallback: S::Output,
}

impl<S: Struct> Defaulted<S> {
    /// Creates a new defaulted struct.
    pub fn new(inner: S, fallback: S::Output) -> Self {
        Self { inner, fallback }
    }

    /// Returns the fallback value.
    pub fn fallback(&self) -> &S::Output {
        &self.fallback
    }

    /// Returns a reference to the inner struct.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S> Struct for Defaulted<S>
where
    S: Struct,
    S::Output: Clone,
{
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        match input {
            None => Ok(self.fallback.clone()),
            Some(_) => self.inner.check(input),
        }
    }
}

/// Creates a [`Defaulted`] struct.
pub fn defaulted<S>(inner: S, fallback: S::Output) -> Defaulted<S>
where
    S: Struct,
    S::Output: Clone,
{
    Defaulted::new(inner, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::StructExt;
    use crate::primitives::{boolean, string};
    use serde_json::json;

    #[test]
    fn test_absent_uses_fallback() {
        assert!(!defaulted(boolean(), false).check(None).unwrap());
    }

    #[test]
    fn test_present_is_validated() {
        let mode = string().default_to("auto".to_string());
        assert_eq!(mode.validate(&json!("manual")).unwrap(), "manual");
        assert!(mode.validate(&json!(null)).is_err());
    }

    #[test]
    fn test_fallback_is_cloned_each_time() {
        let tags = crate::combinators::array(string()).default_to(vec!["x".to_string()]);
        let mut first = tags.check(None).unwrap();
        first.push("y".to_string());
        assert_eq!(tags.check(None).unwrap(), ["x"]);
    }
}

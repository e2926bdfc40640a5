//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Struct, StructError, StructResult};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the message of the error a struct returns.
///
/// Code, path and input of the error are kept; the original error becomes
/// its only cause.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let age = integer().with_message("age must be a whole number");
///
/// let error = age.validate(&json!("ten")).unwrap_err();
/// assert_eq!(error.code, "type_mismatch");
/// assert_eq!(error.message, "age must be a whole number");
/// assert_eq!(error.causes[0].message, "expected integer, found string");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<S> {
    inner: S,
    message: String,
    code: Option<String>,
}

impl<S> WithMessage<S> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: S, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner struct.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the custom code, if set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Extracts the inner struct.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Struct> Struct for WithMessage<S> {
    type Output = S::Output;

    fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
        self.inner.check(input).map_err(|original| {
            let code = self
                .code
                .clone()
                .map_or_else(|| original.code.clone(), Cow::Owned);

            StructError {
                code,
                message: Cow::Owned(self.message.clone()),
                input: original.input.clone(),
                path: original.path.clone(),
                causes: Vec::new(),
            }
            .with_causes(vec![original])
        })
    }
}

/// Creates a [`WithMessage`] combinator.
pub fn with_message<S: Struct>(inner: S, message: impl Into<String>) -> WithMessage<S> {
    WithMessage::new(inner, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{Shape, object};
    use crate::foundation::StructExt;
    use crate::primitives::{number, string};
    use serde_json::json;

    #[test]
    fn test_success_passes_through() {
        let name = with_message(string(), "bad name");
        assert_eq!(name.validate(&json!("Ada")).unwrap(), "Ada");
    }

    #[test]
    fn test_message_replaced_context_kept() {
        let error = number()
            .with_message("price must be numeric")
            .validate(&json!("9.99"))
            .unwrap_err();
        assert_eq!(error.message, "price must be numeric");
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.input, Some(json!("9.99")));
        assert_eq!(error.causes.len(), 1);
    }

    #[test]
    fn test_inner_path_is_kept() {
        let shape = Shape::new().field("price", number());
        let error = object(shape)
            .with_message("invalid product")
            .validate(&json!({"price": "free"}))
            .unwrap_err();
        assert_eq!(error.path_string(), "$.price");
        assert_eq!(error.to_string(), "$.price: invalid product");
    }

    #[test]
    fn test_with_code() {
        let error = with_message(string(), "title required")
            .with_code("required")
            .check(None)
            .unwrap_err();
        assert_eq!(error.code, "required");
        assert_eq!(error.causes[0].code, "type_mismatch");
    }
}

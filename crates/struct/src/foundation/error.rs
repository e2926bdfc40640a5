//! The single error type produced by every struct.
//!
//! There is no error hierarchy: callers tell failures apart by
//! [`StructError::code`], the human-readable [`StructError::message`] and
//! the structured context attached by composite structs (the offending raw
//! input, the key/index path to it, and nested causes for unions).
//!
//! Codes and messages use `Cow<'static, str>` so static text costs nothing.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Value, json};
use smallvec::SmallVec;

use crate::foundation::Kind;

// ============================================================================
// PATH
// ============================================================================

/// One step from an outer container to the value that failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// An array or tuple index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, ".{key}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Outermost-first path of a failure. Most schemas nest only a few levels.
pub type ErrorPath = SmallVec<[PathSegment; 4]>;

fn location(path: &[PathSegment]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{}: ", render_path(path))
    }
}

fn render_path(path: &[PathSegment]) -> String {
    let mut rendered = String::from("$");
    for segment in path {
        rendered.push_str(&segment.to_string());
    }
    rendered
}

// ============================================================================
// STRUCT ERROR
// ============================================================================

/// A validation failure.
///
/// # Examples
///
/// ```
/// use ferrule_struct::foundation::StructError;
/// use serde_json::json;
///
/// let error = StructError::type_mismatch("string", Some(&json!(42)))
///     .at_index(2)
///     .at_key("tags");
///
/// assert_eq!(error.code, "type_mismatch");
/// assert_eq!(error.path_string(), "$.tags[2]");
/// assert_eq!(error.to_string(), "$.tags[2]: expected string, found number");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}{message}", location(.path))]
pub struct StructError {
    /// Stable identifier for programmatic handling, e.g. `"type_mismatch"`.
    pub code: Cow<'static, str>,

    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,

    /// Deep copy of the raw input that was rejected; `None` when it was absent.
    pub input: Option<Value>,

    /// Keys and indices leading from the validated root to the failure.
    pub path: ErrorPath,

    /// Errors of the alternatives tried by a union, or the error a custom
    /// message replaced.
    pub causes: Vec<StructError>,
}

impl StructError {
    /// Creates an error with a code and message and no context.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            input: None,
            path: ErrorPath::new(),
            causes: Vec::new(),
        }
    }

    /// Creates a `"type_mismatch"` error naming the expected kind and the
    /// kind actually found.
    pub fn type_mismatch(expected: impl fmt::Display, input: Option<&Value>) -> Self {
        Self::new(
            "type_mismatch",
            format!("expected {expected}, found {}", Kind::of(input)),
        )
        .with_input(input)
    }

    /// Creates a `"custom"` error, for transforms that reject a value.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Records a copy of the rejected input.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, input: Option<&Value>) -> Self {
        self.input = input.cloned();
        self
    }

    /// Replaces the message, keeping code and context.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches nested causes.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_causes(mut self, causes: Vec<StructError>) -> Self {
        self.causes = causes;
        self
    }

    /// Prepends an object key to the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.insert(0, PathSegment::Key(key.into()));
        self
    }

    /// Prepends an array index to the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    /// Returns the path from the root to the failure.
    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Renders the path as `$.key[0].other`; the root alone is `$`.
    #[must_use]
    pub fn path_string(&self) -> String {
        render_path(&self.path)
    }

    /// Returns true if this error carries nested causes.
    #[must_use]
    pub fn has_causes(&self) -> bool {
        !self.causes.is_empty()
    }

    /// Flattens this error and its causes into a list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&StructError> {
        let mut result = vec![self];
        for cause in &self.causes {
            result.extend(cause.flatten());
        }
        result
    }

    /// Converts the error to a JSON document for reporting.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "code": self.code,
            "message": self.message,
            "path": self.path_string(),
            "input": self.input,
            "causes": self.causes.iter().map(StructError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_error() {
        let error = StructError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.path().is_empty());
        assert_eq!(error.to_string(), "Test error");
    }

    #[test]
    fn test_type_mismatch_names_both_kinds() {
        let error = StructError::type_mismatch("number", Some(&json!("abc")));
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.message, "expected number, found string");
        assert_eq!(error.input, Some(json!("abc")));
    }

    #[test]
    fn test_type_mismatch_on_absent_input() {
        let error = StructError::type_mismatch("string", None);
        assert_eq!(error.message, "expected string, found absent");
        assert_eq!(error.input, None);
    }

    #[test]
    fn test_path_is_built_outermost_first() {
        let error = StructError::custom("bad")
            .at_key("name")
            .at_index(3)
            .at_key("users");

        assert_eq!(
            error.path(),
            &[
                PathSegment::Key("users".into()),
                PathSegment::Index(3),
                PathSegment::Key("name".into()),
            ]
        );
        assert_snapshot!(error.to_string(), @"$.users[3].name: bad");
    }

    #[test]
    fn test_root_path_string() {
        assert_eq!(StructError::custom("x").path_string(), "$");
    }

    #[test]
    fn test_flatten() {
        let error = StructError::new("union", "no alternative matched").with_causes(vec![
            StructError::new("a", "first").with_causes(vec![StructError::new("aa", "deep")]),
            StructError::new("b", "second"),
        ]);

        assert!(error.has_causes());
        let codes: Vec<_> = error.flatten().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["union", "a", "aa", "b"]);
    }

    #[test]
    fn test_to_json_value() {
        let error = StructError::type_mismatch("boolean", Some(&json!(1))).at_key("flag");
        assert_eq!(
            error.to_json_value(),
            json!({
                "code": "type_mismatch",
                "message": "expected boolean, found number",
                "path": "$.flag",
                "input": 1,
                "causes": [],
            })
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = StructError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}

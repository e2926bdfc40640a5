//! String structs

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Struct, StructError, StructResult};

crate::primitive! {
    /// Accepts JSON strings.
    pub Str -> String, "string";
    accept(value) { value.as_str().map(str::to_owned) }
    fn string();
}

// ============================================================================
// ENUMS
// ============================================================================

/// Accepts one of a fixed set of strings.
///
/// # Examples
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// let level = enums(["debug", "info", "warn"]);
/// assert_eq!(level.validate(&json!("info")).unwrap(), "info");
/// assert_eq!(level.validate(&json!("trace")).unwrap_err().code, "enum");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enums {
    variants: Vec<String>,
}

impl Enums {
    /// Creates the struct from its accepted variants.
    pub fn new<I, V>(variants: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the accepted variants in declaration order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

impl Struct for Enums {
    type Output = String;

    fn check(&self, input: Option<&Value>) -> StructResult<String> {
        let Some(text) = input.and_then(Value::as_str) else {
            return Err(StructError::type_mismatch("string", input));
        };
        if self.variants.iter().any(|variant| variant == text) {
            Ok(text.to_owned())
        } else {
            Err(StructError::new(
                "enum",
                format!("expected one of: {}", self.variants.join(", ")),
            )
            .with_input(input))
        }
    }
}

/// Creates an [`Enums`] struct.
pub fn enums<I, V>(variants: I) -> Enums
where
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    Enums::new(variants)
}

// ============================================================================
// PATTERN
// ============================================================================

/// Accepts strings matching a regular expression.
///
/// The expression is not anchored implicitly; use `^...$` to match the
/// whole string.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Creates the struct from a compiled expression.
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Returns the expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Struct for Pattern {
    type Output = String;

    fn check(&self, input: Option<&Value>) -> StructResult<String> {
        let Some(text) = input.and_then(Value::as_str) else {
            return Err(StructError::type_mismatch("string", input));
        };
        if self.regex.is_match(text) {
            Ok(text.to_owned())
        } else {
            Err(StructError::new(
                "pattern",
                format!("expected a string matching `{}`", self.regex.as_str()),
            )
            .with_input(input))
        }
    }
}

/// Creates a [`Pattern`] struct.
pub fn pattern(regex: Regex) -> Pattern {
    Pattern::new(regex)
}

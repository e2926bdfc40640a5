//! Runtime kind tags for dynamic input.
//!
//! Every struct checks the [`Kind`] of its input before narrowing it. The
//! absent value (a missing object key) is a kind of its own, distinct from
//! JSON `null`.

use std::fmt;

use serde_json::Value;

/// The runtime kind of a dynamic input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No value at all, e.g. a missing object key.
    Absent,
    /// JSON `null`.
    Null,
    /// JSON `true` / `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl Kind {
    /// Returns the kind of `input`, treating `None` as [`Kind::Absent`].
    #[must_use]
    pub fn of(input: Option<&Value>) -> Self {
        match input {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

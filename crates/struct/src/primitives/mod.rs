//! Primitive structs
//!
//! Leaf structs that check the runtime kind of a scalar value and return it
//! by value. Their default messages name the expected and actual kinds; use
//! [`StructExt::with_message`](crate::foundation::StructExt::with_message)
//! to override them.
//!
//! # Categories
//!
//! - **Strict**: [`string`], [`number`], [`integer`], [`boolean`], [`null`]
//! - **Exact values**: [`literal`], [`enums`], [`pattern`]
//! - **Pass-through**: [`any`]
//! - **Coercing**: [`as_number`], [`as_integer`], [`as_boolean`],
//!   [`as_string`], [`json_string`]
//!
//! # Examples
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! assert!(string().validate(&json!("abc")).is_ok());
//! assert!(number().validate(&json!("12")).is_err());
//! assert_eq!(as_number().validate(&json!("12")).unwrap(), 12.0);
//! ```

pub mod any;
pub mod boolean;
pub mod coerce;
pub mod literal;
pub mod number;
pub mod string;

pub use any::{AnyValue, any};
pub use boolean::{Boolean, boolean};
pub use coerce::{
    AsBoolean, AsInteger, AsNumber, AsString, JsonString, as_boolean, as_integer, as_number,
    as_string, json_string,
};
pub use literal::{Literal, Null, literal, null};
pub use number::{Integer, Number, integer, number};
pub use string::{Enums, Pattern, Str, enums, pattern, string};

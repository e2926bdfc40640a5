//! # ferrule-struct
//!
//! Composable runtime validation for dynamic JSON data.
//!
//! A *struct* is a value implementing [`Struct`](foundation::Struct): a pure
//! function from untrusted input to a [`StructResult`](foundation::StructResult)
//! holding either a freshly built, typed output or a [`StructError`](foundation::StructError)
//! that says what was wrong and where.
//!
//! ## Quick Start
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let user = object(shape! {
//!     "name" => string(),
//!     "tags" => array(string()),
//!     "age" => optional(integer()),
//! });
//!
//! let output = user.validate(&json!({"name": "Ada", "tags": ["x"]})).unwrap();
//! assert_eq!(output["name"], "Ada");
//!
//! let error = user.validate(&json!({"name": "Ada", "tags": ["x", 1]})).unwrap_err();
//! assert_eq!(error.to_string(), "$.tags[1]: expected string, found number");
//! ```
//!
//! ## Building Blocks
//!
//! - **Primitives**: [`string`](primitives::string), [`number`](primitives::number),
//!   [`boolean`](primitives::boolean), the coercing [`as_number`](primitives::as_number)
//!   and friends
//! - **Composites**: [`object`](combinators::object()), [`array`](combinators::array()),
//!   [`tuple`](combinators::tuple()), [`record`](combinators::record()),
//!   [`union`](combinators::union())
//! - **Presence**: [`optional`](combinators::optional()), [`nullable`](combinators::nullable())
//! - **Transforms**: [`map`](combinators::map()), [`try_map`](combinators::try_map()),
//!   [`chain`](combinators::chain())
//!
//! Typed records are declared with [`record_struct!`]; new leaf structs
//! with [`primitive!`].
//!
//! ## Features
//!
//! - `preserve_order`: object outputs keep the key order of their shape
//!   instead of sorting keys.

// StructError carries its path and the rejected input; boxing it would add an
// allocation to every failure.
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod primitives;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

//! Core struct types and traits
//!
//! This module contains the fundamental building blocks of the system:
//!
//! - **Traits**: [`Struct`], [`StructExt`]
//! - **Results**: [`StructResult`] and the helpers [`ok`], [`err`], [`is_ok`],
//!   [`is_err`], [`unwrap`], [`unwrap_or`]
//! - **Errors**: [`StructError`], [`PathSegment`]
//! - **Kinds**: [`Kind`], the runtime tag checked before any narrowing
//!
//! # Architecture
//!
//! ## 1. Structs are functions
//!
//! A struct maps an optional dynamic input (`Option<&Value>`, where `None`
//! is a missing key) to a typed output:
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! assert_eq!(number().validate(&json!(1.5)).unwrap(), 1.5);
//! assert!(number().validate(&json!("1.5")).is_err());
//! ```
//!
//! ## 2. Composition
//!
//! Composite structs are built from other structs and own fresh copies of
//! everything they return:
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let point = tuple((number(), number()));
//! assert_eq!(point.validate(&json!([1, 2])).unwrap(), (1.0, 2.0));
//! ```
//!
//! ## 3. Single error type
//!
//! Every failure is a [`StructError`]; composites only add path context:
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let error = array(string()).validate(&json!(["a", 2])).unwrap_err();
//! assert_eq!(error.path_string(), "$[1]");
//! ```

pub mod boxed;
pub mod error;
pub mod kind;
pub mod result;
pub mod traits;

pub use boxed::{BoxedStruct, Erased};
pub use error::{ErrorPath, PathSegment, StructError};
pub use kind::Kind;
pub use result::{StructResult, err, is_err, is_ok, ok, unwrap, unwrap_or, unwrap_or_else};
pub use traits::{FromFn, Struct, StructExt, from_fn};

//! Prelude module for convenient imports.
//!
//! Provides a single `use ferrule_struct::prelude::*;` import that brings in
//! the core traits, the error type, every primitive and every combinator.
//!
//! # Examples
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let point = tuple((number(), number()));
//! assert_eq!(unwrap(point.validate(&json!([1, 2]))), (1.0, 2.0));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, result helpers
// ============================================================================

pub use crate::foundation::{
    BoxedStruct, Erased, ErrorPath, FromFn, Kind, PathSegment, Struct, StructError, StructExt,
    StructResult, err, from_fn, is_err, is_ok, ok, unwrap, unwrap_or, unwrap_or_else,
};

// ============================================================================
// PRIMITIVES: All built-in leaf structs
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::primitives::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Array, Chain, Defaulted, Map, Nullable, Object, Optional, Or, Record, Shape, Step, TryMap,
    Tuple, Union, WithMessage, array, chain, defaulted, map, nullable, object, optional, record,
    try_map, tuple, union, with_message,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{primitive, record_struct, shape};

//! Combinators for composing structs
//!
//! # Categories
//!
//! - **Composite**: [`object`], [`array`], [`tuple`], [`record`], [`union`]
//! - **Presence**: [`optional`], [`nullable`], [`defaulted`]
//! - **Functional**: [`map`], [`try_map`], [`chain`]
//! - **Errors**: [`with_message`]
//!
//! Composites validate their parts in order and stop at the first failure,
//! prefixing its path with the key or index where it happened. Their outputs
//! are freshly built containers that share nothing with the input.
//!
//! Most combinators are also available as [`StructExt`](crate::foundation::StructExt)
//! methods.

pub mod array;
pub mod chain;
pub mod default;
pub mod map;
pub mod message;
pub mod nullable;
pub mod object;
pub mod optional;
pub mod record;
pub mod tuple;
pub mod union;

pub use array::{Array, array};
pub use chain::{Chain, Step, chain};
pub use default::{Defaulted, defaulted};
pub use map::{Map, TryMap, map, try_map};
pub use message::{WithMessage, with_message};
pub use nullable::{Nullable, nullable};
pub use object::{Object, Shape, object};
pub use optional::{Optional, optional};
pub use record::{Record, record};
pub use tuple::{Tuple, tuple};
pub use union::{Or, Union, union};

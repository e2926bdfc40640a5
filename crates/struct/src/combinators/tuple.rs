//! TUPLE combinator - validates fixed-length heterogeneous sequences
//!
//! A [`Tuple`] wraps a Rust tuple of structs, one per position. The input
//! must be a JSON array of exactly that length; positions are checked in
//! order and the output is a Rust tuple of the validated values.
//!
//! # Examples
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let entry = tuple((string(), number()));
//! assert_eq!(entry.validate(&json!(["x", 1])).unwrap(), ("x".to_string(), 1.0));
//!
//! let error = entry.validate(&json!(["x", "not-a-number"])).unwrap_err();
//! assert_eq!(error.path_string(), "$[1]");
//! ```

use serde_json::Value;

use crate::combinators::array::{expect_array, reject_element};
use crate::foundation::{Struct, StructError, StructResult};

/// Validates a fixed-length JSON array position by position.
#[derive(Debug, Clone, Copy)]
pub struct Tuple<T> {
    items: T,
}

impl<T> Tuple<T> {
    /// Creates a new tuple struct from a Rust tuple of structs.
    pub fn new(items: T) -> Self {
        Self { items }
    }

    /// Returns the position structs.
    pub fn items(&self) -> &T {
        &self.items
    }
}

/// Creates a [`Tuple`] struct. Arities 1 through 8 are supported.
pub fn tuple<T>(items: T) -> Tuple<T> {
    Tuple::new(items)
}

fn expect_len(input: Option<&Value>, len: usize) -> StructResult<&[Value]> {
    let items = expect_array(input)?;
    if items.len() == len {
        Ok(items.as_slice())
    } else {
        Err(StructError::new(
            "tuple_length",
            format!("expected {len} elements, found {}", items.len()),
        )
        .with_input(input))
    }
}

macro_rules! impl_tuple {
    ($len:literal => $($idx:tt $s:ident),+) => {
        impl<$($s: Struct),+> Struct for Tuple<($($s,)+)> {
            type Output = ($($s::Output,)+);

            fn check(&self, input: Option<&Value>) -> StructResult<Self::Output> {
                let items = expect_len(input, $len)?;
                Ok(($(
                    self.items
                        .$idx
                        .validate(&items[$idx])
                        .map_err(|error| reject_element($idx, error))?,
                )+))
            }
        }
    };
}

impl_tuple!(1 => 0 S0);
impl_tuple!(2 => 0 S0, 1 S1);
impl_tuple!(3 => 0 S0, 1 S1, 2 S2);
impl_tuple!(4 => 0 S0, 1 S1, 2 S2, 3 S3);
impl_tuple!(5 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4);
impl_tuple!(6 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5);
impl_tuple!(7 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6);
impl_tuple!(8 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6, 7 S7);

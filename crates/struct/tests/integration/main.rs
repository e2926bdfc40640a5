//! Integration tests for ferrule-struct
//!
//! These tests compose structs the way callers do and check the behavior
//! observable from outside the crate.

mod composition;
mod isolation;
mod records;
mod results;

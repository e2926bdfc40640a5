//! The result helpers as used by callers.

use ferrule_struct::prelude::*;
use serde_json::json;

#[test]
fn test_unwrap_or_falls_back_on_error() {
    let port = integer();
    assert_eq!(unwrap_or(port.validate(&json!("x")), 80), 80);
    assert_eq!(unwrap_or(port.validate(&json!(8080)), 80), 8080);
}

#[test]
fn test_helpers_on_constructed_results() {
    let good: StructResult<i32> = ok(1);
    let bad: StructResult<i32> = err(StructError::custom("nope"));

    assert!(is_ok(&good) && !is_err(&good));
    assert!(is_err(&bad) && !is_ok(&bad));
    assert_eq!(unwrap(good), 1);
    assert_eq!(unwrap_or_else(bad, |error| error.message.len() as i32), 4);
}

#[test]
#[should_panic(expected = "validation failed: $[0]: expected boolean, found null")]
fn test_unwrap_panics_with_error() {
    let _ = unwrap(array(boolean()).validate(&json!([null])));
}

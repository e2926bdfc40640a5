//! Integration tests for the prelude module.
//!
//! Verifies that `use ferrule_struct::prelude::*` brings in everything a
//! consumer needs for common validation scenarios.

use ferrule_struct::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_struct_traits() {
    let name = string().map(|s| s.to_uppercase());
    assert_eq!(name.validate(&json!("ada")).unwrap(), "ADA");
    assert!(name.check(None).is_err());
}

#[test]
fn prelude_provides_result_helpers() {
    let result = number().validate(&json!(1.5));
    assert!(is_ok(&result));
    assert_eq!(unwrap_or(result, 0.0), 1.5);
}

// ============================================================================
// PRIMITIVES VIA PRELUDE
// ============================================================================

#[test]
fn primitives_via_prelude() {
    assert!(integer().validate(&json!(1)).is_ok());
    assert!(null().validate(&Value::Null).is_ok());
    assert!(enums(["red", "green"]).validate(&json!("red")).is_ok());
    assert_eq!(as_string().validate(&json!(true)).unwrap(), "true");
}

// ============================================================================
// MACROS VIA PRELUDE
// ============================================================================

primitive! {
    /// Accepts strings that look like hex colors.
    pub HexColor -> String, "hex color";
    accept(value) {
        value
            .as_str()
            .filter(|s| s.len() == 7 && s.starts_with('#'))
            .map(str::to_owned)
    }
    fn hex_color();
}

#[test]
fn custom_primitive_via_prelude() {
    assert_eq!(hex_color().validate(&json!("#ff0000")).unwrap(), "#ff0000");
    assert_eq!(
        hex_color().validate(&json!("red")).unwrap_err().message,
        "expected hex color, found string"
    );
}

#[test]
fn shape_macro_via_prelude() {
    let empty = object(shape! {});
    assert!(empty.validate(&json!({"any": 1})).unwrap().is_empty());
}

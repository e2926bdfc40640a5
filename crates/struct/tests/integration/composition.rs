//! Nested structs: paths, short-circuiting and transforms working together.

use ferrule_struct::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn trim(s: String) -> String {
    s.trim().to_string()
}

fn lower(s: String) -> String {
    s.to_lowercase()
}

fn order() -> Object {
    object(shape! {
        "id" => integer(),
        "customer" => object(shape! {
            "email" => chain(string(), [trim as fn(String) -> String, lower]),
            "phone" => optional(string()),
        }),
        "lines" => array(tuple((string(), integer(), number()))),
        "note" => nullable(string()),
    })
}

#[test]
fn test_order_normalizes_and_drops_extras() {
    let input = json!({
        "id": 17,
        "customer": {"email": "  Ada@Example.COM ", "vip": true},
        "lines": [["sku-1", 2, 9.5]],
        "note": null,
        "internal": "x",
    });

    let output = order().validate(&input).unwrap();
    assert_eq!(
        Value::Object(output),
        json!({
            "id": 17,
            "customer": {"email": "ada@example.com"},
            "lines": [["sku-1", 2, 9.5]],
            "note": null,
        })
    );
}

#[test]
fn test_deep_failure_path() {
    let input = json!({
        "id": 17,
        "customer": {"email": "a@b.c"},
        "lines": [["sku-1", 2, 9.5], ["sku-2", "two", 1.0]],
        "note": null,
    });

    let error = order().validate(&input).unwrap_err();
    assert_eq!(error.path_string(), "$.lines[1][1]");
    assert_eq!(error.input, Some(json!("two")));
    assert_eq!(
        error.to_string(),
        "$.lines[1][1]: expected integer, found string"
    );
}

#[test]
fn test_first_declared_failure_wins() {
    let error = order()
        .validate(&json!({"id": "x", "customer": 1, "lines": 2}))
        .unwrap_err();
    assert_eq!(error.path_string(), "$.id");
}

#[test]
fn test_tuple_failure_index() {
    let pair = tuple((string(), number()));
    let error = pair.validate(&json!(["x", "not-a-number"])).unwrap_err();
    assert_eq!(error.path_string(), "$[1]");
}

#[test]
fn test_optional_number() {
    let maybe = optional(number());
    assert_eq!(maybe.check(None).unwrap(), None);
    assert_eq!(maybe.validate(&json!(2)).unwrap(), Some(2.0));
    assert!(maybe.validate(&json!("abc")).is_err());
}

#[test]
fn test_map_on_string() {
    let length = map(string(), |s| s.len());
    assert_eq!(length.validate(&json!("hello")).unwrap(), 5);

    let error = length.validate(&json!(42)).unwrap_err();
    assert_eq!(error.message, "expected string, found number");
}

#[test]
fn test_union_of_shapes() {
    let circle = object(shape! { "kind" => literal("circle"), "r" => number() });
    let square = object(shape! { "kind" => literal("square"), "side" => number() });
    let figure = circle.or(square);

    assert!(figure.validate(&json!({"kind": "square", "side": 2})).is_ok());

    let error = figure
        .validate(&json!({"kind": "triangle"}))
        .unwrap_err();
    assert_eq!(error.code, "union");
    let paths: Vec<_> = error.causes.iter().map(|e| e.path_string()).collect();
    assert_eq!(paths, ["$.kind", "$.kind"]);
}

#[test]
fn test_coercing_form_input() {
    let form = object(shape! {
        "quantity" => as_integer(),
        "price" => as_number(),
        "gift" => as_boolean().default_to(false),
        "meta" => json_string(record(string())),
    });

    let output = form
        .validate(&json!({
            "quantity": "3",
            "price": " 4.25 ",
            "meta": "{\"ref\": \"mail\"}",
        }))
        .unwrap();
    assert_eq!(
        Value::Object(output),
        json!({"quantity": 3, "price": 4.25, "gift": false, "meta": {"ref": "mail"}})
    );
}

#[test]
fn test_custom_messages_at_the_edge() {
    let signup = object(shape! {
        "password" => string()
            .try_map(|s| {
                if s.len() >= 8 {
                    Ok(s)
                } else {
                    Err(StructError::custom("too short"))
                }
            })
            .with_message("password must have at least 8 characters"),
    })
    .deny_unknown_keys();

    let error = signup.validate(&json!({"password": "abc"})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "$.password: password must have at least 8 characters"
    );
    assert_eq!(error.causes[0].message, "too short");

    let error = signup
        .validate(&json!({"password": "long-enough", "role": "admin"}))
        .unwrap_err();
    assert_eq!(error.code, "unknown_key");
}

#[test]
fn test_error_report_snapshot() {
    let error = order()
        .validate(&json!({"id": 1, "customer": {"email": 5}, "lines": []}))
        .unwrap_err();
    insta::assert_json_snapshot!(error.to_json_value(), @r#"
    {
      "causes": [],
      "code": "type_mismatch",
      "input": 5,
      "message": "expected string, found number",
      "path": "$.customer.email"
    }
    "#);
}

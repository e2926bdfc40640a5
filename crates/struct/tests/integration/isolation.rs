//! Outputs are owned copies: mutating either side never affects the other.

use ferrule_struct::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_object_output_is_independent() {
    let shape = object(shape! {
        "tags" => array(string()),
        "meta" => any(),
    });
    let mut input = json!({"tags": ["a"], "meta": {"deep": [1, 2]}});

    let mut output = shape.validate(&input).unwrap();
    input["meta"]["deep"][0] = json!(100);
    output["tags"] = json!([]);

    assert_eq!(output["meta"], json!({"deep": [1, 2]}));
    assert_eq!(input["tags"], json!(["a"]));
}

#[test]
fn test_literal_output_is_independent() {
    let mut input = json!({"mode": ["x"]});
    let output = literal(json!({"mode": ["x"]})).validate(&input).unwrap();
    input["mode"][0] = json!("y");
    assert_eq!(output, json!({"mode": ["x"]}));
}

#[test]
fn test_repeated_validation_is_stable() {
    let user = object(shape! {
        "name" => string(),
        "age" => optional(integer()),
    });
    let input = json!({"name": "Ada", "age": 36, "x": 0});

    let first = user.validate(&input);
    let second = user.validate(&input);
    assert_eq!(first, second);
    assert_eq!(input, json!({"name": "Ada", "age": 36, "x": 0}));
}

#[test]
fn test_structs_are_shareable() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let user = object(shape! { "name" => string() });
    assert_send_sync(&user);

    let user = std::sync::Arc::new(user);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let user = std::sync::Arc::clone(&user);
            std::thread::spawn(move || user.validate(&json!({"name": format!("u{i}")})))
        })
        .collect();
    for handle in handles {
        let output = handle.join().unwrap().unwrap();
        assert!(matches!(output.get("name"), Some(Value::String(_))));
    }
}

//! Typed records declared with `record_struct!`.

use ferrule_struct::prelude::*;
use serde_json::json;

record_struct! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Endpoint {
        url: String = string(),
        retries: i64 = integer().default_to(3),
        timeout: Option<f64> = optional(as_number()),
        headers: std::collections::BTreeMap<String, String> = record(string()),
    }
}

record_struct! {
    #[derive(Debug)]
    struct Service {
        name: String = string(),
        endpoints: Vec<Endpoint> = array(Endpoint::schema()),
    }
}

#[test]
fn test_record_struct_output() {
    let endpoint = Endpoint::schema()
        .validate(&json!({
            "url": "https://example.com",
            "timeout": "1.5",
            "headers": {"accept": "json"},
        }))
        .unwrap();

    assert_eq!(endpoint.url, "https://example.com");
    assert_eq!(endpoint.retries, 3);
    assert_eq!(endpoint.timeout, Some(1.5));
    assert_eq!(endpoint.headers["accept"], "json");
}

#[test]
fn test_nested_record_struct_paths() {
    let error = Service::schema()
        .validate(&json!({
            "name": "api",
            "endpoints": [{"url": "a", "headers": {}}, {"url": "b", "headers": {"x": 1}}],
        }))
        .unwrap_err();
    assert_eq!(error.path_string(), "$.endpoints[1].headers.x");
}

#[test]
fn test_nested_record_struct_valid() {
    let service = Service::schema()
        .validate(&json!({"name": "api", "endpoints": []}))
        .unwrap();
    assert_eq!(service.name, "api");
    assert!(service.endpoints.is_empty());
}

#[test]
fn test_record_struct_rejects_non_objects() {
    let error = Endpoint::schema().validate(&json!("https://x")).unwrap_err();
    assert_eq!(error.message, "expected object, found string");
}

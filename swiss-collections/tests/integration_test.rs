//! Integration tests for swiss-collections

use serde::Deserialize;
use serde_json::{Value, json};
use swiss_collections::*;

#[derive(Debug, Deserialize, PartialEq)]
struct Address {
    city: String,
    zip: Option<String>,
}

fn payload() -> Value {
    json!({
        "order": {
            "id": 42,
            "items": [
                {"sku": "A-1", "qty": 2},
                {"sku": "B-7", "qty": 1}
            ],
            "shipping": {"city": "Porto", "zip": "4000-001"}
        }
    })
}

#[test]
fn test_walks_objects_and_arrays() {
    let data = payload();
    assert_eq!(get(&data, Some("order.items.1.sku"), Value::Null), json!("B-7"));
    assert_eq!(get(&data, Some("order.items.9.sku"), json!("none")), json!("none"));
    assert!(has(&data, "order.items.0.qty"));
    assert!(!has(&data, "order.items.0.price"));
}

#[test]
fn test_typed_access() {
    let data = payload();
    let address: Address = get_as(&data, "order.shipping").unwrap();
    assert_eq!(
        address,
        Address {
            city: "Porto".into(),
            zip: Some("4000-001".into())
        }
    );
    assert_eq!(get_as::<i64>(&data, "order.id"), Some(42));
}

#[test]
fn test_top_level_scalar_input() {
    let scalar = json!("just text");
    assert_eq!(get(&scalar, None, Value::Null), scalar);
    assert_eq!(get(&scalar, Some("a"), json!(1)), json!(1));
}

#[test]
fn test_projection_on_request_input() {
    let input = json!({"name": "Ana", "password": "secret", "_token": "t"});
    let map = input.as_object().unwrap();

    assert_eq!(Value::Object(only(map, &["name"])), json!({"name": "Ana"}));
    assert_eq!(
        Value::Object(except(map, &["password", "_token"])),
        json!({"name": "Ana"})
    );
}

//! Value integration tests
//!
//! Tests for the `Value` payload: conversions, comparisons and serialization.

use ctxmap::{Value, value::ValueError};

#[test]
fn test_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(3), Value::Int(3));
    assert_eq!(Value::from(3u32), Value::Int(3));
    assert_eq!(Value::from(2.5), Value::Float(2.5));
    assert_eq!(Value::from("x"), Value::Text("x".to_string()));
    assert_eq!(
        Value::from(vec!["a", "b"]),
        Value::List(vec![Value::from("a"), Value::from("b")])
    );
}

#[test]
fn test_comparisons_with_primitives() {
    assert!(Value::from("hello") == "hello");
    assert!(Value::from(42) == 42);
    assert!(Value::from(false) == false);
    assert!(Value::from(0.5) == 0.5);
    assert!(!(Value::from(42) == "42"));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::from(1.0).type_name(), "float");
    assert_eq!(Value::from(vec![1]).type_name(), "list");
}

#[test]
fn test_try_from_mismatch() {
    let err = bool::try_from(&Value::from("yes")).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "Type mismatch: expected bool, found text");
    assert!(matches!(err, ValueError::TypeMismatch { .. }));
}

#[test]
fn test_list_extraction() {
    let list = Vec::<Value>::try_from(&Value::from(vec![1, 2, 3])).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[2], Value::Int(3));
}

#[test]
fn test_serde_roundtrip_keeps_variant() {
    let value = Value::from(vec![Value::Null, Value::from(1.5), Value::from("s")]);
    let json = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

use json_logic::{Map, Value};
use serde_json::json;

#[test]
fn test_from_json_keeps_key_order() {
    let v = Value::from(json!({"z": 1, "a": 2, "m": 3}));
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_numbers_are_canonical() {
    assert_eq!(Value::from(json!(1)), Value::from(json!(1.0)));
    assert_eq!(Value::from(json!(1)), Value::Number(1.0));
    assert_eq!(Value::from(7i64), Value::Number(7.0));
}

#[test]
fn test_to_json() {
    let v = Value::Array(vec![
        Value::Number(3.0),
        Value::Number(0.5),
        Value::Number(f64::NAN),
        Value::from("x"),
    ]);
    assert_eq!(serde_json::Value::from(v), json!([3, 0.5, null, "x"]));
}

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Number(42.0).to_string(), "42");
    assert_eq!(Value::Number(0.1).to_string(), "0.1");
    assert_eq!(Value::from("plain").to_string(), "plain");
    let mut map = Map::new();
    map.insert("k".to_string(), Value::Array(vec![Value::Bool(true)]));
    assert_eq!(Value::Object(map).to_string(), r#"{"k":[true]}"#);
}

#[test]
fn test_serde_round_trip() {
    let text = r#"{"if":[{"var":"a"},"yes",null]}"#;
    let v: Value = serde_json::from_str(text).unwrap();
    assert_eq!(v.as_object().unwrap().len(), 1);
    let back = serde_json::to_value(&v).unwrap();
    assert_eq!(back, json!({"if": [{"var": "a"}, "yes", null]}));
}

#[test]
fn test_serialize_numbers_match_json_conversion() {
    let v = Value::from(json!({"a": 1, "b": -3, "c": 0.5, "d": 1e300}));
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"a":1,"b":-3,"c":0.5,"d":1e300}"#);
    assert_eq!(serde_json::to_string(&v).unwrap(), v.to_string());
    assert_eq!(serde_json::to_value(&v).unwrap(), serde_json::Value::from(v.clone()));
    assert_eq!(serde_json::to_value(Value::Number(1.0)).unwrap(), json!(1));

    let odd = Value::Array(vec![
        Value::Number(f64::NAN),
        Value::Number(f64::INFINITY),
        Value::Number(-0.0),
    ]);
    assert_eq!(serde_json::to_value(&odd).unwrap(), json!([null, null, 0]));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::from(json!([])).type_name(), "array");
    assert_eq!(Value::from(json!({})).type_name(), "object");
    assert!(Value::Null.is_null());
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::Number(2.0).as_f64(), Some(2.0));
}

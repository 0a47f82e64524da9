//! Serialization of both types through the `serde` feature.
//!
//! Externally tagged, like any other serde enum.

use compositional_adt::{err, none, ok, some, Option, Result};

#[test]
fn test_option_json_shape() {
    assert_eq!(serde_json::to_string(&some(5)).unwrap(), r#"{"Some":5}"#);
    assert_eq!(serde_json::to_string(&none::<i32>()).unwrap(), r#""None""#);
}

#[test]
fn test_result_json_shape() {
    let good: Result<u8, String> = ok(1);
    let bad: Result<u8, String> = err("nope".into());
    assert_eq!(serde_json::to_string(&good).unwrap(), r#"{"Ok":1}"#);
    assert_eq!(serde_json::to_string(&bad).unwrap(), r#"{"Err":"nope"}"#);
}

#[test]
fn test_deserialize_back() {
    let opt: Option<Vec<u8>> = serde_json::from_str(r#"{"Some":[1,2]}"#).unwrap();
    assert_eq!(opt, some(vec![1, 2]));

    let res: Result<u8, String> = serde_json::from_str(r#"{"Err":"disk"}"#).unwrap();
    assert_eq!(res, err("disk".to_string()));
}

#[test]
fn test_deserialize_rejects_unknown_variant() {
    let parsed: serde_json::Result<Option<u8>> = serde_json::from_str(r#"{"Maybe":1}"#);
    assert!(parsed.is_err());
}

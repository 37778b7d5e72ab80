//! The wire form carried over JSON.

use fem_testhelpers::{IPanic, test};
use fem_value::wire::MAX_DEPTH;
use fem_value::{Native, VDatetime, VDuration, Value};

use crate::scenario::scenario;

#[test]
fn scenario_wire_json() -> Result<(), IPanic> {
    let value = Value::from_native(scenario())?;
    let json = serde_json::to_string(&value)?;
    assert_eq!(
        json,
        r#"[["Sn","Sf","Sok","Snil","Slist"],["I42","D3.14","T","V",[["I1","I2","I3"]]]]"#
    );
    let back: Value = serde_json::from_str(&json)?;
    assert_eq!(back, value);
    assert_eq!(back.as_native(), scenario());
    Ok(())
}

#[test]
fn scalar_wire_json() -> Result<(), IPanic> {
    let values = [
        Value::void(),
        Value::from_boolean(false),
        Value::from_binary(vec![0xff]),
        Value::from_string("with \"quotes\""),
        Value::from_integer(-1),
        Value::from_decimal(0.1)?,
        Value::from_datetime(VDatetime::new(100, 3_600_000)?),
        Value::from_duration(VDuration::new(12, 0)?),
    ];
    for value in values {
        let json = serde_json::to_string(&value)?;
        let back: Value = serde_json::from_str(&json)?;
        assert_eq!(back, value, "{json}");
    }
    Ok(())
}

#[test]
fn decoded_singletons_are_interned() -> Result<(), IPanic> {
    let back: Value = serde_json::from_str(r#"[["V","T","F"]]"#)?;
    let array = back.as_varray().expect("array");
    assert!(Value::ptr_eq(&array.get(0).expect("void"), &Value::void()));
    assert!(Value::ptr_eq(&array.get(1).expect("true"), &Value::from_boolean(true)));
    assert!(Value::ptr_eq(&array.get(2).expect("false"), &Value::from_boolean(false)));
    Ok(())
}

#[test]
fn empty_containers() -> Result<(), IPanic> {
    let array: Value = serde_json::from_str("[[]]")?;
    assert_eq!(array.as_array(), Some(vec![]));
    let object: Value = serde_json::from_str("[[],[]]")?;
    assert!(object.as_object().is_some_and(|m| m.is_empty()));
    assert_eq!(serde_json::to_string(&object)?, "[[],[]]");
    Ok(())
}

#[test]
fn malformed_wire_is_rejected() {
    let bad = [
        r#""Q1""#,
        r#""Ixyz""#,
        "[]",
        r#"[[],[],[]]"#,
        r#"[["Sa"],[]]"#,
        r#"[["I1"],["V"]]"#,
        r#"[["Sa","Sa"],["V","V"]]"#,
        "42",
        "{}",
    ];
    for json in bad {
        assert!(serde_json::from_str::<Value>(json).is_err(), "{json} should be rejected");
    }
}

fn nested_lists(depth: usize) -> Native {
    (0..depth).fold(Native::Null, |inner, _| Native::List(vec![inner]))
}

#[test]
fn deepest_allowed_nesting_round_trips() -> Result<(), IPanic> {
    let native = nested_lists(MAX_DEPTH);
    let json = serde_json::to_string(&Value::from_native(native.clone())?)?;
    let back: Value = serde_json::from_str(&json)?;
    assert_eq!(back.as_native(), native);
    Ok(())
}

#[test]
fn nesting_past_the_limit_is_refused_both_ways() -> Result<(), IPanic> {
    let too_deep = format!("containers nested deeper than {MAX_DEPTH}");

    let value = Value::from_native(nested_lists(MAX_DEPTH + 1))?;
    let err = serde_json::to_string(&value).unwrap_err();
    assert!(err.to_string().contains(&too_deep), "{err}");

    // hand-built, since the encoder refuses to produce it
    let json = format!(
        "{}\"V\"{}",
        "[[".repeat(MAX_DEPTH + 1),
        "]]".repeat(MAX_DEPTH + 1)
    );
    let err = serde_json::from_str::<Value>(&json).unwrap_err();
    assert!(err.to_string().contains(&too_deep), "{err}");
    Ok(())
}

#[test]
fn native_wire_round_trip() -> Result<(), IPanic> {
    let native = Native::from(vec![Native::from("a"), Native::from(vec![Native::Null])]);
    let json = serde_json::to_string(&Value::from_native(native.clone())?)?;
    assert_eq!(json, r#"[["Sa",[["V"]]]]"#);
    let back: Value = serde_json::from_str(&json)?;
    assert_eq!(back.as_native(), native);
    Ok(())
}

//! The mixed object scenario used by the renderer.

use fem_testhelpers::{IPanic, test};
use fem_value::{Native, Value, ValueType};
use indexmap::IndexMap;

pub(crate) fn scenario() -> Native {
    let mut map = IndexMap::new();
    map.insert("n".to_string(), Native::from(42i64));
    map.insert("f".to_string(), Native::from(3.14f64));
    map.insert("ok".to_string(), Native::Bool(true));
    map.insert("nil".to_string(), Native::Null);
    map.insert("list".to_string(), Native::from(vec![1i64, 2, 3]));
    Native::Map(map)
}

#[test]
fn mixed_object_round_trips() -> Result<(), IPanic> {
    let value = Value::from_native(scenario())?;
    assert_eq!(value.as_native(), scenario());
    Ok(())
}

#[test]
fn mixed_object_has_expected_tags() -> Result<(), IPanic> {
    let value = Value::from_native(scenario())?;
    let object = value.as_vobject().expect("object");
    let tag = |key: &str| object.get(key).map(|v| v.value_type());
    assert_eq!(tag("n"), Some(ValueType::Integer));
    assert_eq!(tag("f"), Some(ValueType::Decimal));
    assert_eq!(tag("ok"), Some(ValueType::True));
    assert_eq!(tag("nil"), Some(ValueType::Void));
    assert_eq!(tag("list"), Some(ValueType::Array));

    let list = object.get("list").expect("list");
    let list = list.as_varray().expect("array");
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|v| v.is_integer()));
    Ok(())
}

#[test]
fn mixed_object_dump() -> Result<(), IPanic> {
    let value = Value::from_native(scenario())?;
    insta::assert_snapshot!(value.to_string(), @"[[Sn, Sf, Sok, Snil, Slist], [I42, D3.14, T, V, [[I1, I2, I3]]]]");
    Ok(())
}

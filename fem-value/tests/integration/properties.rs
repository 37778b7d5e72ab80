//! Round-trip and classification properties of the codec.

use fem_testhelpers::{IPanic, test};
use fem_value::{Native, Number, Value, ValueType};
use indexmap::IndexMap;

fn round_trip(native: Native) -> Result<Native, IPanic> {
    Ok(Value::from_native(native)?.as_native())
}

#[test]
fn scalars_round_trip() -> Result<(), IPanic> {
    let scalars = [
        Native::Null,
        Native::Bool(true),
        Native::Bool(false),
        Native::from(0i64),
        Native::from(-12_345i64),
        Native::from(i64::MAX),
        Native::from(2.5f64),
        Native::from(-0.001f64),
        Native::from(""),
        Native::from("text with , and [brackets]"),
        Native::Binary(vec![0, 1, 254, 255]),
    ];
    for native in scalars {
        assert_eq!(round_trip(native.clone())?, native);
    }
    Ok(())
}

#[test]
fn passthrough_is_identity() -> Result<(), IPanic> {
    let encoded = Value::from_native(Native::from(vec![1i64, 2, 3]))?;
    let again = Value::from_native(Native::Value(encoded.clone()))?;
    assert!(Value::ptr_eq(&encoded, &again));
    Ok(())
}

#[test]
fn singletons_are_identical() -> Result<(), IPanic> {
    let a = Value::from_native(Native::Null)?;
    let b = Value::from_native(Native::Null)?;
    assert!(Value::ptr_eq(&a, &b));
    let t1 = Value::from_native(Native::Bool(true))?;
    let t2 = Value::from_native(Native::Bool(true))?;
    assert!(Value::ptr_eq(&t1, &t2));
    Ok(())
}

#[test]
fn integers_are_never_decimals() -> Result<(), IPanic> {
    let three = Value::from_native(Native::from(3i64))?;
    assert_eq!(three.value_type(), ValueType::Integer);
    assert!(!three.is_decimal());
    let three_f = Value::from_native(Native::from(3.0f64))?;
    assert!(three_f.is_integer());
    let frac = Value::from_native(Native::from(3.5f64))?;
    assert_eq!(frac.value_type(), ValueType::Decimal);
    assert_eq!(frac.as_number(), Some(Number::Decimal(3.5)));
    Ok(())
}

#[test]
fn non_finite_numbers_are_rejected() {
    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Value::from_native(Native::from(x)).unwrap_err();
        assert!(err.to_string().starts_with("invalid argument"), "{err}");
    }
}

#[test]
fn deep_list_round_trips() -> Result<(), IPanic> {
    let native = Native::from(vec![
        Native::from(1i64),
        Native::from("a"),
        Native::from(vec![Native::Bool(true), Native::Null]),
    ]);
    let value = Value::from_native(native.clone())?;
    assert_eq!(value.as_native(), native);
    assert_eq!(value.as_array(), Some(vec![
        Native::from(1i64),
        Native::from("a"),
        Native::from(vec![Native::Bool(true), Native::Null]),
    ]));
    Ok(())
}

#[test]
fn object_round_trips_in_key_order() -> Result<(), IPanic> {
    let mut map = IndexMap::new();
    map.insert("b".to_string(), Native::from("x"));
    map.insert("a".to_string(), Native::from(1i64));
    let value = Value::from_native(Native::Map(map.clone()))?;
    let back = value.as_object().expect("object");
    assert_eq!(back.keys().collect::<Vec<_>>(), ["b", "a"]);
    assert_eq!(back, map);
    assert_eq!(value.as_native(), Native::Map(map));
    Ok(())
}

#[test]
fn mismatch_is_absence() {
    let five = Value::from_integer(5);
    assert_eq!(five.as_string(), None);
    assert!(!five.is_string());
    assert_eq!(five.as_array(), None);
    assert_eq!(five.as_object(), None);
    assert_eq!(five.as_binary(), None);
    assert_eq!(five.as_datetime(), None);
    assert_eq!(five.as_duration(), None);
    assert_eq!(Value::void().as_boolean(), None);
}

#[test]
fn values_are_shareable_across_threads() -> Result<(), IPanic> {
    let value = Value::from_native(Native::from(vec!["x", "y"]))?;
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = value.clone();
            std::thread::spawn(move || (value.as_native(), Value::void()))
        })
        .collect();
    for handle in handles {
        let (native, void) = handle.join().expect("thread panicked");
        assert_eq!(native, Native::from(vec!["x", "y"]));
        assert!(Value::ptr_eq(&void, &Value::void()));
    }
    Ok(())
}

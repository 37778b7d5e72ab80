//! Binary, datetime and duration tags through the codec.

use chrono::NaiveDate;
use fem_testhelpers::{IPanic, test};
use fem_value::{Native, VDatetime, VDuration, Value, ValueErrorKind};

#[test]
fn datetime_round_trips_through_native() -> Result<(), IPanic> {
    let dt = VDatetime::from_ymd_hms_milli(1999, 12, 31, 23, 59, 59, 999)?;
    let value = Value::from_native(Native::from(dt))?;
    assert!(value.is_datetime());
    assert_eq!(value.as_datetime(), Some(dt));
    assert_eq!(value.as_native(), Native::Datetime(dt));
    Ok(())
}

#[test]
fn datetime_from_chrono() -> Result<(), IPanic> {
    let naive = NaiveDate::from_ymd_opt(1582, 10, 16)
        .expect("date")
        .and_hms_milli_opt(0, 0, 1, 5)
        .expect("time");
    let dt = VDatetime::try_from(naive)?;
    assert_eq!((dt.days(), dt.millis()), (1, 1_005));
    assert_eq!(dt.to_naive(), naive);
    Ok(())
}

#[test]
fn datetime_out_of_window_is_unsupported() {
    let naive = NaiveDate::from_ymd_opt(10_000, 1, 1)
        .expect("date")
        .and_hms_opt(0, 0, 0)
        .expect("time");
    let err = VDatetime::from_naive(naive).unwrap_err();
    assert!(matches!(err.kind, ValueErrorKind::UnsupportedConversion { .. }));
}

#[test]
fn duration_round_trips() -> Result<(), IPanic> {
    let d = VDuration::from_parts(true, 0, 6, 0, 12, 0, 0, 0)?;
    let value = Value::from_duration(d);
    assert!(value.is_duration());
    assert_eq!(value.as_native(), Native::Duration(d));
    assert_eq!(d.to_string(), "-P6MT12H");
    Ok(())
}

#[test]
fn binary_round_trips() -> Result<(), IPanic> {
    let bytes: Vec<u8> = (0..=255).collect();
    let value = Value::from_native(Native::Binary(bytes.clone()))?;
    assert!(value.is_binary());
    assert_eq!(value.as_binary(), Some(bytes.as_slice()));
    assert_eq!(value.as_native(), Native::Binary(bytes));
    Ok(())
}

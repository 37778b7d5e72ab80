//! Integer and decimal payloads.
//!
//! A native number is classified exactly once, when it is encoded: a finite
//! value with no fractional part that fits an `i64` becomes an Integer,
//! anything else finite becomes a Decimal. NaN and the infinities have no
//! encoding and are rejected.

use tracing::debug;

use crate::error::ValueError;
use crate::native::Number;
use crate::value::{Payload, Value};

/// Classifies a native float into an Integer or Decimal payload.
pub(crate) fn classify(x: f64) -> Result<Payload, ValueError> {
    if !x.is_finite() {
        return Err(ValueError::invalid(format!("{x} has no tagged encoding")));
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if x == x.trunc() && x >= i64::MIN as f64 && x < i64::MAX as f64 {
        Ok(Payload::Integer(x as i64))
    } else {
        Ok(Payload::Decimal(x))
    }
}

impl Value {
    /// Creates an Integer.
    #[must_use]
    pub fn from_integer(i: i64) -> Self {
        Self::from_payload(Payload::Integer(i))
    }

    /// Creates a Decimal, even for integral input.
    ///
    /// Fails for NaN and the infinities.
    pub fn from_decimal(x: f64) -> Result<Self, ValueError> {
        if !x.is_finite() {
            return Err(ValueError::invalid(format!("{x} is not a finite decimal")));
        }
        Ok(Self::from_payload(Payload::Decimal(x)))
    }

    /// Encodes a native number, classifying decimals that hold whole numbers
    /// as Integer.
    pub fn from_number(n: Number) -> Result<Self, ValueError> {
        match n {
            Number::Integer(i) => Ok(Self::from_integer(i)),
            Number::Decimal(x) => classify(x).map(Self::from_payload),
        }
    }

    /// Parses decimal integer text into an Integer.
    pub fn parse_integer(text: &str) -> Result<Self, ValueError> {
        text.parse::<i64>().map(Self::from_integer).map_err(|err| {
            debug!(text, %err, "rejected integer text");
            ValueError::invalid(format!("`{text}` is not an integer: {err}"))
        })
    }

    /// Parses floating-point text into a Decimal.
    pub fn parse_decimal(text: &str) -> Result<Self, ValueError> {
        let x = text.parse::<f64>().map_err(|err| {
            debug!(text, %err, "rejected decimal text");
            ValueError::invalid(format!("`{text}` is not a decimal: {err}"))
        })?;
        Self::from_decimal(x)
    }
}

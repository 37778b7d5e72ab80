//! Native host values and conversion to and from [`Value`].
//!
//! [`Native`] is the closed set of plain Rust values a renderer works with.
//! [`Value::from_native`] encodes one (deeply) and [`Value::as_native`]
//! projects an encoded value back.

use indexmap::IndexMap;
use tracing::trace;

use crate::array::VArray;
use crate::datetime::VDatetime;
use crate::duration::VDuration;
use crate::error::{PathSegment, ValueError};
use crate::object::VObject;
use crate::value::{Payload, Raw, Value};

/// A native number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Whole number
    Integer(i64),
    /// Floating-point number
    Decimal(f64),
}

impl Number {
    /// The number as a float (lossy for integers beyond 2^53).
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Decimal(x) => x,
        }
    }
}

/// A plain in-memory value.
#[derive(Clone, Debug, PartialEq)]
pub enum Native {
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(Number),
    /// Text
    String(String),
    /// Bytes
    Binary(Vec<u8>),
    /// Calendar timestamp
    Datetime(VDatetime),
    /// Time span
    Duration(VDuration),
    /// Ordered list
    List(Vec<Native>),
    /// Keyed mapping in insertion order
    Map(IndexMap<String, Native>),
    /// An already encoded value, passed through unchanged
    Value(Value),
}

impl Value {
    /// Encodes a native value.
    ///
    /// Fails only for decimals that are NaN or infinite; the error path names
    /// the offending list index or map key.
    ///
    /// Encoding recurses once per nesting level, so input nested thousands of
    /// levels deep can overflow the stack. Values nested deeper than
    /// [`wire::MAX_DEPTH`](crate::wire::MAX_DEPTH) encode but do not serialize.
    pub fn from_native(native: Native) -> Result<Value, ValueError> {
        Ok(match native {
            Native::Null => Value::void(),
            Native::Bool(b) => Value::from_boolean(b),
            Native::Number(n) => Value::from_number(n)?,
            Native::String(s) => Value::from_string(s),
            Native::Binary(b) => Value::from_binary(b),
            Native::Datetime(d) => Value::from_datetime(d),
            Native::Duration(d) => Value::from_duration(d),
            Native::List(items) => {
                trace!(len = items.len(), "encoding list");
                let raw = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        Value::from_native(item)
                            .map(Value::into_payload)
                            .map_err(|e| e.with_path(PathSegment::Index(index)))
                    })
                    .collect::<Result<Vec<Raw>, _>>()?;
                Value::from_payload(Payload::Array(VArray::from_raw(raw)))
            }
            Native::Map(entries) => {
                trace!(len = entries.len(), "encoding map");
                let mut keys = Vec::with_capacity(entries.len());
                let mut values = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    let value = Value::from_native(item)
                        .map_err(|e| e.with_path(PathSegment::Key(key.clone())))?;
                    keys.push(Value::from_string(key).into_payload());
                    values.push(value.into_payload());
                }
                // IndexMap keys are unique strings
                Value::from_payload(Payload::Object(VObject::from_raw_unchecked(keys, values)))
            }
            Native::Value(v) => v,
        })
    }

    /// Encodes an optional native value.
    ///
    /// A missing value (`None`) stays missing; an explicit [`Native::Null`]
    /// becomes Void.
    pub fn from_optional(native: Option<Native>) -> Result<Option<Value>, ValueError> {
        native.map(Value::from_native).transpose()
    }

    /// Projects back to a native value, converting containers deeply.
    ///
    /// Recurses once per nesting level, like [`Value::from_native`].
    #[must_use]
    pub fn as_native(&self) -> Native {
        payload_to_native(self.payload())
    }

    /// The children as native values, if this is an Array.
    #[must_use]
    pub fn as_array(&self) -> Option<Vec<Native>> {
        self.as_varray().map(array_to_native)
    }

    /// The entries as a native map, if this is an Object.
    #[must_use]
    pub fn as_object(&self) -> Option<IndexMap<String, Native>> {
        self.as_vobject().map(object_to_native)
    }

    /// The number, if this is an Integer or a Decimal.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self.payload() {
            Payload::Integer(i) => Some(Number::Integer(*i)),
            Payload::Decimal(x) => Some(Number::Decimal(*x)),
            _ => None,
        }
    }
}

fn payload_to_native(payload: &Payload) -> Native {
    match payload {
        Payload::Void => Native::Null,
        Payload::True => Native::Bool(true),
        Payload::False => Native::Bool(false),
        Payload::Binary(b) => Native::Binary(b.to_vec()),
        Payload::String(s) => Native::String(s.to_string()),
        Payload::Decimal(x) => Native::Number(Number::Decimal(*x)),
        Payload::Integer(i) => Native::Number(Number::Integer(*i)),
        Payload::Datetime(d) => Native::Datetime(*d),
        Payload::Duration(d) => Native::Duration(*d),
        Payload::Array(a) => Native::List(array_to_native(a)),
        Payload::Object(o) => Native::Map(object_to_native(o)),
    }
}

fn array_to_native(array: &VArray) -> Vec<Native> {
    trace!(len = array.len(), "projecting array");
    array.raw().iter().map(|raw| payload_to_native(raw)).collect()
}

fn object_to_native(object: &VObject) -> IndexMap<String, Native> {
    trace!(len = object.len(), "projecting object");
    object
        .keys()
        .zip(object.raw_values())
        .map(|(key, raw)| (key.to_owned(), payload_to_native(raw)))
        .collect()
}

// === From implementations ===

impl From<bool> for Native {
    fn from(b: bool) -> Self {
        Native::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Native {
                fn from(i: $t) -> Self {
                    Native::Number(Number::Integer(i64::from(i)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Native {
    fn from(x: f32) -> Self {
        Native::Number(Number::Decimal(f64::from(x)))
    }
}

impl From<f64> for Native {
    fn from(x: f64) -> Self {
        Native::Number(Number::Decimal(x))
    }
}

impl From<Number> for Native {
    fn from(n: Number) -> Self {
        Native::Number(n)
    }
}

impl From<&str> for Native {
    fn from(s: &str) -> Self {
        Native::String(s.to_owned())
    }
}

impl From<String> for Native {
    fn from(s: String) -> Self {
        Native::String(s)
    }
}

impl From<VDatetime> for Native {
    fn from(d: VDatetime) -> Self {
        Native::Datetime(d)
    }
}

impl From<VDuration> for Native {
    fn from(d: VDuration) -> Self {
        Native::Duration(d)
    }
}

impl From<Value> for Native {
    fn from(v: Value) -> Self {
        Native::Value(v)
    }
}

impl<T: Into<Native>> From<Vec<T>> for Native {
    fn from(items: Vec<T>) -> Self {
        Native::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Native>> From<Option<T>> for Native {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Native::Null, Into::into)
    }
}

impl<V: Into<Native>> From<IndexMap<String, V>> for Native {
    fn from(entries: IndexMap<String, V>) -> Self {
        Native::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl TryFrom<Native> for Value {
    type Error = ValueError;

    fn try_from(native: Native) -> Result<Self, Self::Error> {
        Value::from_native(native)
    }
}

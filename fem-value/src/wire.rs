//! Wire form of encoded values.
//!
//! A scalar travels as its one-character tag prefix followed by the payload
//! text (`I42`, `Shello`, `B00FF`, `W0,0`). Containers travel as lists: an
//! Array is a list of one element holding the child list, an Object is a
//! list of two elements holding the key list and the value list.
//!
//! ```text
//! {"n": 42, "ok": true}  ──►  [["Sn","Sok"],["I42","T"]]
//! [1, "a"]               ──►  [["I1","Sa"]]
//! ```
//!
//! With the `serde` feature, `Value` serializes to and deserializes from
//! exactly this shape, so any serde format (JSON for the browser) carries it.
//!
//! Every container costs two list levels on the wire. [`MAX_DEPTH`] counts
//! containers and is applied in both directions, so whatever serializes also
//! decodes. It stays below half of serde_json's 128-level recursion limit.
//! Formats without their own recursion limit buffer the whole tree before
//! the container count is checked.
//!
//! Integer parts must be canonical (no `+`, no leading zeros, no `-0`) so
//! decoded text re-encodes to the same string. Decimal text accepts any
//! spelling `f64` parses except a leading `+`.

use core::fmt::Display;
use core::str::FromStr;

use tracing::debug;

use crate::binary::{from_hex, to_hex};
use crate::datetime::VDatetime;
use crate::duration::VDuration;
use crate::error::ValueError;
use crate::value::{Payload, Value, ValueType};

/// Deepest container nesting accepted when encoding or decoding.
pub const MAX_DEPTH: usize = 60;

/// The prefixed text of a scalar payload; `None` for containers.
pub(crate) fn scalar_text(payload: &Payload) -> Option<String> {
    Some(match payload {
        Payload::Void => "V".to_owned(),
        Payload::True => "T".to_owned(),
        Payload::False => "F".to_owned(),
        Payload::Binary(b) => format!("B{}", to_hex(b)),
        Payload::String(s) => format!("S{s}"),
        Payload::Decimal(x) => format!("D{x}"),
        Payload::Integer(i) => format!("I{i}"),
        Payload::Datetime(d) => format!("W{},{}", d.days(), d.millis()),
        Payload::Duration(d) => format!("H{},{}", d.months(), d.millis()),
        Payload::Array(_) | Payload::Object(_) => return None,
    })
}

/// Encodes a scalar value as prefixed text; `None` for Array and Object.
#[must_use]
pub fn encode_scalar(value: &Value) -> Option<String> {
    scalar_text(value.payload())
}

/// Rejects integer text that would re-encode differently (`+5`, `007`, `-0`).
fn canonical_int(text: &str) -> Result<&str, ValueError> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.starts_with('+') || (digits.len() > 1 && digits.starts_with('0')) || text == "-0" {
        debug!(text, "non-canonical integer text");
        return Err(ValueError::invalid(format!(
            "`{text}` is not a canonical integer"
        )));
    }
    Ok(text)
}

fn parse_pair<A, B>(text: &str) -> Result<(A, B), ValueError>
where
    A: FromStr,
    B: FromStr,
    A::Err: Display,
    B::Err: Display,
{
    let (a, b) = text
        .split_once(',')
        .ok_or_else(|| ValueError::invalid(format!("expected `<a>,<b>`, got `{text}`")))?;
    let a = canonical_int(a)?
        .parse()
        .map_err(|e| ValueError::invalid(format!("bad first component `{a}`: {e}")))?;
    let b = canonical_int(b)?
        .parse()
        .map_err(|e| ValueError::invalid(format!("bad second component `{b}`: {e}")))?;
    Ok((a, b))
}

/// Decodes prefixed scalar text.
///
/// Void, True and False decode to the interned singletons.
pub fn decode_scalar(text: &str) -> Result<Value, ValueError> {
    let mut chars = text.chars();
    let prefix = chars
        .next()
        .ok_or_else(|| ValueError::invalid("empty scalar text"))?;
    let rest = chars.as_str();
    let tag = ValueType::from_prefix(prefix).ok_or_else(|| {
        debug!(text, "unknown tag prefix");
        ValueError::invalid(format!("unknown tag prefix `{prefix}`"))
    })?;
    let expect_empty = |value: Value| {
        if rest.is_empty() {
            Ok(value)
        } else {
            Err(ValueError::invalid(format!(
                "`{prefix}` takes no payload, got `{rest}`"
            )))
        }
    };
    match tag {
        ValueType::Void => expect_empty(Value::void()),
        ValueType::True => expect_empty(Value::from_boolean(true)),
        ValueType::False => expect_empty(Value::from_boolean(false)),
        ValueType::Binary => from_hex(rest).map(Value::from_binary),
        ValueType::String => Ok(Value::from_string(rest)),
        ValueType::Decimal if rest.starts_with('+') => Err(ValueError::invalid(format!(
            "`{rest}` is not a canonical decimal"
        ))),
        ValueType::Decimal => Value::parse_decimal(rest),
        ValueType::Integer => canonical_int(rest).and_then(Value::parse_integer),
        ValueType::Datetime => {
            let (days, millis) = parse_pair(rest)?;
            VDatetime::new(days, millis).map(Value::from_datetime)
        }
        ValueType::Duration => {
            let (months, millis) = parse_pair(rest)?;
            VDuration::new(months, millis).map(Value::from_duration)
        }
        ValueType::Array | ValueType::Object => {
            unreachable!("from_prefix only yields scalar tags")
        }
    }
}

#[cfg(feature = "serde")]
pub(crate) use node::WireNode;

#[cfg(feature = "serde")]
mod node {
    use super::*;
    use crate::array::VArray;
    use crate::error::PathSegment;
    use crate::object::VObject;
    use crate::value::Raw;

    /// One node of the wire tree.
    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    #[serde(untagged)]
    pub(crate) enum WireNode {
        Scalar(String),
        Container(Vec<Vec<WireNode>>),
    }

    fn too_deep() -> ValueError {
        ValueError::invalid(format!("containers nested deeper than {MAX_DEPTH}"))
    }

    fn encode_all(raw: &[Raw], depth: usize) -> Result<Vec<WireNode>, ValueError> {
        raw.iter()
            .enumerate()
            .map(|(index, r)| {
                encode(r, depth).map_err(|e| e.with_path(PathSegment::Index(index)))
            })
            .collect()
    }

    fn encode(payload: &Payload, depth: usize) -> Result<WireNode, ValueError> {
        let lists = match payload {
            Payload::Array(a) => vec![a.raw()],
            Payload::Object(o) => vec![o.raw_keys(), o.raw_values()],
            scalar => return Ok(WireNode::Scalar(scalar_text(scalar).unwrap_or_default())),
        };
        if depth >= MAX_DEPTH {
            return Err(too_deep());
        }
        lists
            .into_iter()
            .map(|list| encode_all(list, depth + 1))
            .collect::<Result<_, _>>()
            .map(WireNode::Container)
    }

    fn decode_all(nodes: Vec<WireNode>, depth: usize) -> Result<Vec<Raw>, ValueError> {
        nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                decode(node, depth)
                    .map(Value::into_payload)
                    .map_err(|e| e.with_path(PathSegment::Index(index)))
            })
            .collect()
    }

    fn decode(node: WireNode, depth: usize) -> Result<Value, ValueError> {
        let mut lists = match node {
            WireNode::Scalar(text) => return decode_scalar(&text),
            WireNode::Container(lists) => lists,
        };
        if depth >= MAX_DEPTH {
            return Err(too_deep());
        }
        match lists.len() {
            1 => {
                let items = lists.pop().unwrap_or_default();
                let items = decode_all(items, depth + 1)?;
                Ok(Value::from_payload(Payload::Array(VArray::from_raw(items))))
            }
            2 => {
                let values = lists.pop().unwrap_or_default();
                let keys = lists.pop().unwrap_or_default();
                let keys = decode_all(keys, depth + 1)?;
                let values = decode_all(values, depth + 1)?;
                let object = VObject::new(keys, values)?;
                Ok(Value::from_payload(Payload::Object(object)))
            }
            n => Err(ValueError::invalid(format!(
                "container list has {n} elements, expected 1 (array) or 2 (object)"
            ))),
        }
    }

    impl serde::Serialize for Value {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            encode(self.payload(), 0)
                .map_err(<S::Error as serde::ser::Error>::custom)?
                .serialize(serializer)
        }
    }

    impl TryFrom<WireNode> for Value {
        type Error = ValueError;

        fn try_from(node: WireNode) -> Result<Self, Self::Error> {
            decode(node, 0).inspect_err(|err| debug!(%err, "rejected wire value"))
        }
    }
}

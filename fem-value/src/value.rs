//! Core `Value` type.
//!
//! # Representation
//!
//! A `Value` is a shared pointer to an immutable `Payload`: an explicit
//! discriminant plus typed data. Containers hold their children as the same
//! shared payload pointers, not as `Value` wrappers, so wrapping a child
//! costs one reference count bump and no copy.
//!
//! ```text
//! Value ──► Arc<Payload::Array> ──► [Arc<Payload::Integer>, Arc<Payload::Void>]
//!                                                          ▲
//! Value::void() ───────────────────────────────────────────┘ (interned)
//! ```
//!
//! Void, True and False are interned: every one of them in the process points
//! at the same allocation, so they can be compared by identity with
//! [`Value::ptr_eq`].
//!
//! ## Tags
//!
//! | Tag | Prefix | Payload |
//! |-----|--------|---------|
//! | Void | `V` | none |
//! | True | `T` | none |
//! | False | `F` | none |
//! | Binary | `B` | bytes |
//! | String | `S` | UTF-8 text |
//! | Decimal | `D` | finite `f64` |
//! | Integer | `I` | `i64` |
//! | Datetime | `W` | [`VDatetime`] |
//! | Duration | `H` | [`VDuration`] |
//! | Array | list of one | [`VArray`] |
//! | Object | list of two | [`VObject`] |

use core::fmt::{self, Debug, Formatter};
use std::sync::{Arc, LazyLock};

use crate::array::VArray;
use crate::datetime::VDatetime;
use crate::duration::VDuration;
use crate::object::VObject;

/// Encoded payload of a value.
#[derive(Debug, PartialEq)]
pub(crate) enum Payload {
    Void,
    True,
    False,
    Binary(Box<[u8]>),
    String(Box<str>),
    Decimal(f64),
    Integer(i64),
    Datetime(VDatetime),
    Duration(VDuration),
    Array(VArray),
    Object(VObject),
}

/// A payload as stored inside a container.
pub(crate) type Raw = Arc<Payload>;

/// The tag of a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// Absence of a value
    Void,
    /// Boolean true
    True,
    /// Boolean false
    False,
    /// Byte sequence
    Binary,
    /// UTF-8 text
    String,
    /// Floating-point number
    Decimal,
    /// Whole number
    Integer,
    /// Calendar timestamp
    Datetime,
    /// Time span
    Duration,
    /// Ordered list
    Array,
    /// Keyed mapping
    Object,
}

impl ValueType {
    /// The single-character wire prefix of a scalar tag; `None` for containers.
    #[must_use]
    pub const fn prefix(self) -> Option<char> {
        match self {
            ValueType::Void => Some('V'),
            ValueType::True => Some('T'),
            ValueType::False => Some('F'),
            ValueType::Binary => Some('B'),
            ValueType::String => Some('S'),
            ValueType::Decimal => Some('D'),
            ValueType::Integer => Some('I'),
            ValueType::Datetime => Some('W'),
            ValueType::Duration => Some('H'),
            ValueType::Array | ValueType::Object => None,
        }
    }

    /// The scalar tag for a wire prefix.
    #[must_use]
    pub const fn from_prefix(prefix: char) -> Option<Self> {
        Some(match prefix {
            'V' => ValueType::Void,
            'T' => ValueType::True,
            'F' => ValueType::False,
            'B' => ValueType::Binary,
            'S' => ValueType::String,
            'D' => ValueType::Decimal,
            'I' => ValueType::Integer,
            'W' => ValueType::Datetime,
            'H' => ValueType::Duration,
            _ => return None,
        })
    }
}

static VOID: LazyLock<Value> = LazyLock::new(|| Value(Arc::new(Payload::Void)));
static TRUE: LazyLock<Value> = LazyLock::new(|| Value(Arc::new(Payload::True)));
static FALSE: LazyLock<Value> = LazyLock::new(|| Value(Arc::new(Payload::False)));

/// An immutable tagged value.
///
/// Cloning is cheap (a reference count bump). Every transformation builds a
/// new value; nothing is mutated in place.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "crate::wire::WireNode")
)]
pub struct Value(pub(crate) Raw);

impl Value {
    // === Interned constants ===

    /// The interned Void value.
    #[must_use]
    pub fn void() -> Self {
        VOID.clone()
    }

    /// The interned True or False value.
    #[must_use]
    pub fn from_boolean(b: bool) -> Self {
        if b { TRUE.clone() } else { FALSE.clone() }
    }

    // === Internal constructors ===

    /// Wraps a fresh payload. Void/True/False go through the singletons.
    pub(crate) fn from_payload(payload: Payload) -> Self {
        match payload {
            Payload::Void => Self::void(),
            Payload::True => Self::from_boolean(true),
            Payload::False => Self::from_boolean(false),
            payload => Self(Arc::new(payload)),
        }
    }

    /// Unwraps into the shared payload, as stored inside containers.
    pub(crate) fn into_payload(self) -> Raw {
        self.0
    }

    pub(crate) fn payload(&self) -> &Payload {
        &self.0
    }

    // === Scalar constructors ===

    /// Creates a String value.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self::from_payload(Payload::String(s.into().into_boxed_str()))
    }

    /// Creates a Datetime value.
    #[must_use]
    pub fn from_datetime(datetime: VDatetime) -> Self {
        Self::from_payload(Payload::Datetime(datetime))
    }

    /// Creates a Duration value.
    #[must_use]
    pub fn from_duration(duration: VDuration) -> Self {
        Self::from_payload(Payload::Duration(duration))
    }

    // === Container constructors ===

    /// Creates an Array from already encoded children.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self::from_payload(Payload::Array(values.into_iter().collect()))
    }

    /// Creates an Object from already encoded entries.
    ///
    /// Fails if a key appears twice.
    pub fn from_entries<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Result<Self, crate::ValueError> {
        let (keys, values): (Vec<Raw>, Vec<Raw>) = entries
            .into_iter()
            .map(|(k, v)| (Self::from_string(k).into_payload(), v.into_payload()))
            .unzip();
        VObject::new(keys, values).map(|o| Self::from_payload(Payload::Object(o)))
    }

    // === Identity ===

    /// Returns `true` if both values are the same instance.
    #[must_use]
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    // === Type checking ===

    /// Returns the tag of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self.payload() {
            Payload::Void => ValueType::Void,
            Payload::True => ValueType::True,
            Payload::False => ValueType::False,
            Payload::Binary(_) => ValueType::Binary,
            Payload::String(_) => ValueType::String,
            Payload::Decimal(_) => ValueType::Decimal,
            Payload::Integer(_) => ValueType::Integer,
            Payload::Datetime(_) => ValueType::Datetime,
            Payload::Duration(_) => ValueType::Duration,
            Payload::Array(_) => ValueType::Array,
            Payload::Object(_) => ValueType::Object,
        }
    }

    /// Returns `true` if this is Void.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self.payload(), Payload::Void)
    }

    /// Returns `true` if this is True.
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self.payload(), Payload::True)
    }

    /// Returns `true` if this is False.
    #[must_use]
    pub fn is_false(&self) -> bool {
        matches!(self.payload(), Payload::False)
    }

    /// Returns `true` if this is True or False.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        self.is_true() || self.is_false()
    }

    /// Returns `true` if this is Binary.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self.payload(), Payload::Binary(_))
    }

    /// Returns `true` if this is a String.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.payload(), Payload::String(_))
    }

    /// Returns `true` if this is a Decimal.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        matches!(self.payload(), Payload::Decimal(_))
    }

    /// Returns `true` if this is an Integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.payload(), Payload::Integer(_))
    }

    /// Returns `true` if this is a Datetime.
    #[must_use]
    pub fn is_datetime(&self) -> bool {
        matches!(self.payload(), Payload::Datetime(_))
    }

    /// Returns `true` if this is a Duration.
    #[must_use]
    pub fn is_duration(&self) -> bool {
        matches!(self.payload(), Payload::Duration(_))
    }

    /// Returns `true` if this is an Array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.payload(), Payload::Array(_))
    }

    /// Returns `true` if this is an Object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.payload(), Payload::Object(_))
    }

    // === Primitive projections ===

    /// The boolean, if this is True or False.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self.payload() {
            Payload::True => Some(true),
            Payload::False => Some(false),
            _ => None,
        }
    }

    /// The text, if this is a String.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self.payload() {
            Payload::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// The integer, if this is an Integer.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self.payload() {
            Payload::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The float, if this is a Decimal.
    #[must_use]
    pub fn as_decimal(&self) -> Option<f64> {
        match self.payload() {
            Payload::Decimal(x) => Some(*x),
            _ => None,
        }
    }

    /// The bytes, if this is Binary.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self.payload() {
            Payload::Binary(b) => Some(&**b),
            _ => None,
        }
    }

    /// The timestamp, if this is a Datetime.
    #[must_use]
    pub fn as_datetime(&self) -> Option<VDatetime> {
        match self.payload() {
            Payload::Datetime(d) => Some(*d),
            _ => None,
        }
    }

    /// The span, if this is a Duration.
    #[must_use]
    pub fn as_duration(&self) -> Option<VDuration> {
        match self.payload() {
            Payload::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// The encoded children, if this is an Array.
    #[must_use]
    pub fn as_varray(&self) -> Option<&VArray> {
        match self.payload() {
            Payload::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The encoded entries, if this is an Object.
    #[must_use]
    pub fn as_vobject(&self) -> Option<&VObject> {
        match self.payload() {
            Payload::Object(o) => Some(o),
            _ => None,
        }
    }
}

// === PartialEq ===

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Value::ptr_eq(self, other) || self.0 == other.0
    }
}

// === Debug ===

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value")
            .field(&format_args!("{self}"))
            .finish()
    }
}

// === Default ===

impl Default for Value {
    fn default() -> Self {
        Self::void()
    }
}

// === From implementations ===

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::from_boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::from_integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl From<VDatetime> for Value {
    fn from(d: VDatetime) -> Self {
        Self::from_datetime(d)
    }
}

impl From<VDuration> for Value {
    fn from(d: VDuration) -> Self {
        Self::from_duration(d)
    }
}

impl FromIterator<Value> for Value {
    /// Collect into an Array.
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

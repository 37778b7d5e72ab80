//! Object payload: parallel lists of String key payloads and value payloads.

use std::collections::HashSet;

use crate::error::{PathSegment, ValueError};
use crate::value::{Payload, Raw, Value};

/// The entries of an Object value, in insertion order.
///
/// `keys` and `values` always have the same length, every key is a String
/// payload and no key repeats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VObject {
    keys: Box<[Raw]>,
    values: Box<[Raw]>,
}

fn key_str(raw: &Raw) -> &str {
    match &**raw {
        Payload::String(s) => s,
        other => unreachable!("object key is not a String payload: {other:?}"),
    }
}

impl VObject {
    /// Builds an object from parallel raw lists, checking every invariant.
    pub(crate) fn new(keys: Vec<Raw>, values: Vec<Raw>) -> Result<Self, ValueError> {
        if keys.len() != values.len() {
            return Err(ValueError::invalid(format!(
                "object has {} keys but {} values",
                keys.len(),
                values.len()
            )));
        }
        let mut seen = HashSet::with_capacity(keys.len());
        for (index, key) in keys.iter().enumerate() {
            let Payload::String(name) = &**key else {
                return Err(ValueError::invalid("object key is not a string")
                    .with_path(PathSegment::Index(index)));
            };
            if !seen.insert(&**name) {
                return Err(ValueError::invalid(format!("duplicate object key `{name}`")));
            }
        }
        Ok(Self::from_raw_unchecked(keys, values))
    }

    /// Caller guarantees equal lengths, String keys and unique keys.
    pub(crate) fn from_raw_unchecked(keys: Vec<Raw>, values: Vec<Raw>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self {
            keys: keys.into_boxed_slice(),
            values: values.into_boxed_slice(),
        }
    }

    pub(crate) fn raw_keys(&self) -> &[Raw] {
        &self.keys
    }

    pub(crate) fn raw_values(&self) -> &[Raw] {
        &self.values
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.keys
            .iter()
            .position(|k| key_str(k) == key)
            .map(|i| Value(self.values[i].clone()))
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| key_str(k) == key)
    }

    /// Iterates the keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(key_str)
    }

    /// Iterates the values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = Value> + '_ {
        self.values.iter().cloned().map(Value)
    }

    /// Iterates `(key, value)` entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, Value)> + '_ {
        self.keys
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (key_str(k), Value(v.clone())))
    }
}

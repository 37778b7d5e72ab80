//! Array payload: an ordered list of raw child payloads.

use crate::value::{Raw, Value};

/// The children of an Array value.
///
/// Children are held as shared payloads rather than `Value` wrappers;
/// [`get`](Self::get) and [`iter`](Self::iter) wrap them on the way out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VArray {
    items: Box<[Raw]>,
}

impl VArray {
    pub(crate) fn from_raw(items: Vec<Raw>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    pub(crate) fn raw(&self) -> &[Raw] {
        &self.items
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.get(index).cloned().map(Value)
    }

    /// Iterates the children in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Value> + '_ {
        self.items.iter().cloned().map(Value)
    }
}

impl FromIterator<Value> for VArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_raw(iter.into_iter().map(Value::into_payload).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_share_payloads() {
        let s = Value::from_string("shared");
        let array: VArray = [s.clone(), Value::void()].into_iter().collect();
        assert_eq!(array.len(), 2);
        assert!(Value::ptr_eq(&array.get(0).unwrap(), &s));
        assert!(array.get(1).unwrap().is_void());
        assert!(array.get(2).is_none());
    }

    #[test]
    fn empty_array() {
        let array = VArray::default();
        assert!(array.is_empty());
        assert_eq!(array.iter().count(), 0);
    }
}

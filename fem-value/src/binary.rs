//! Byte sequence payloads and their hexadecimal text form.

use tracing::debug;

use crate::error::ValueError;
use crate::value::{Payload, Value};

/// Uppercase hex, two digits per byte.
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decodes hex text in either case.
pub(crate) fn from_hex(text: &str) -> Result<Vec<u8>, ValueError> {
    hex::decode(text).map_err(|err| {
        debug!(%err, "rejected hex text");
        ValueError::invalid(format!("bad hex payload: {err}"))
    })
}

impl Value {
    /// Creates a Binary value.
    #[must_use]
    pub fn from_binary(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_payload(Payload::Binary(bytes.into().into_boxed_slice()))
    }

    /// Creates a Binary value from its hex text.
    pub fn parse_binary(text: &str) -> Result<Self, ValueError> {
        from_hex(text).map(Self::from_binary)
    }
}

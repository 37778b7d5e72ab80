//! Diagnostic dump of the internal tagged form.
//!
//! `Display` for [`Value`] prints scalars as their prefixed text and
//! containers as the nested lists they are made of:
//!
//! ```text
//! [["Sn", "Sok"], ["I42", "T"]]   (wire JSON)
//! [[Sn, Sok], [I42, T]]           (dump)
//! ```
//!
//! The dump is meant for logs and test output. Text payloads are not quoted
//! or escaped, so it is not parseable; use the wire form for transport.

use core::fmt::{self, Display, Formatter};

use crate::value::{Payload, Raw, Value};
use crate::wire::scalar_text;

fn write_list(f: &mut Formatter<'_>, items: &[Raw]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_payload(f, item)?;
    }
    f.write_str("]")
}

fn write_payload(f: &mut Formatter<'_>, payload: &Payload) -> fmt::Result {
    match payload {
        Payload::Array(a) => {
            f.write_str("[")?;
            write_list(f, a.raw())?;
            f.write_str("]")
        }
        Payload::Object(o) => {
            f.write_str("[")?;
            write_list(f, o.raw_keys())?;
            f.write_str(", ")?;
            write_list(f, o.raw_values())?;
            f.write_str("]")
        }
        scalar => f.write_str(&scalar_text(scalar).unwrap_or_default()),
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_payload(f, self.payload())
    }
}

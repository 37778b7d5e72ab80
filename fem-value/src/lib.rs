//! `fem-value` is the tagged value codec used to pass structured data between
//! a documentation generator and the browser that renders it.
//!
//! # Overview
//!
//! - [`Value`]: an immutable, cheaply clonable tagged value with eleven tags
//!   (Void, True, False, Binary, String, Decimal, Integer, Datetime, Duration,
//!   Array, Object)
//! - [`Native`]: the plain Rust values a renderer works with;
//!   [`Value::from_native`] encodes them and [`Value::as_native`] projects
//!   them back
//! - [`wire`]: the prefixed text form (`I42`, `Shello`, `[["Sk"],["T"]]`),
//!   available to any serde format with the `serde` feature
//!
//! ```
//! use fem_value::{Native, Value};
//!
//! let v = Value::from_native(Native::from(vec![Native::from(1i64), Native::Null])).unwrap();
//! assert!(v.is_array());
//! assert_eq!(v.to_string(), "[[I1, V]]");
//! assert_eq!(v.as_native(), Native::from(vec![Native::from(1i64), Native::Null]));
//! ```
//!
//! Projections (`as_*`) return `None` when the tag does not match; only
//! constructors that are handed unrepresentable input return a
//! [`ValueError`].

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod value;
pub use value::{Value, ValueType};

mod native;
pub use native::{Native, Number};

mod number;

mod binary;

mod datetime;
pub use datetime::VDatetime;

mod duration;
pub use duration::VDuration;

mod array;
pub use array::VArray;

mod object;
pub use object::VObject;

mod error;
pub use error::{PathSegment, ValueError, ValueErrorKind};

mod format;

pub mod wire;

//! Errors raised while building a [`Value`](crate::Value).
//!
//! Projections never fail: asking an integer for its text yields `None`.
//! Errors only come from constructors that are handed input their target tag
//! cannot hold, and from decoding malformed wire text.

use core::fmt;

/// A segment in the path to the node that failed to convert.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A key in a map
    Key(String),
    /// An index in a list
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, ".{key}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// The kind of conversion failure.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueErrorKind {
    /// The input cannot be represented by the requested tag: non-numeric text
    /// for an integer, a non-finite decimal, an out-of-range datetime part,
    /// malformed wire text.
    InvalidArgument {
        /// What was wrong with the input
        message: String,
    },
    /// The native value has no tagged representation.
    UnsupportedConversion {
        /// What could not be converted
        message: String,
    },
}

impl fmt::Display for ValueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueErrorKind::InvalidArgument { message } => {
                write!(f, "invalid argument: {message}")
            }
            ValueErrorKind::UnsupportedConversion { message } => {
                write!(f, "unsupported conversion: {message}")
            }
        }
    }
}

/// Error returned by the fallible `Value` constructors.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueError {
    /// The specific kind of error
    pub kind: ValueErrorKind,
    /// Path from the root of the converted value to the failing node
    pub path: Vec<PathSegment>,
}

impl ValueError {
    /// Create an error with an empty path.
    pub fn new(kind: ValueErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// Shorthand for an [`ValueErrorKind::InvalidArgument`] error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ValueErrorKind::InvalidArgument {
            message: message.into(),
        })
    }

    /// Shorthand for an [`ValueErrorKind::UnsupportedConversion`] error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ValueErrorKind::UnsupportedConversion {
            message: message.into(),
        })
    }

    /// Prepend a path segment (errors are built at the failing leaf and
    /// unwound towards the root).
    pub fn with_path(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Format the path as a string, `<root>` when empty.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "<root>".into();
        }
        self.path.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path_string(), self.kind)
        }
    }
}

impl core::error::Error for ValueError {}

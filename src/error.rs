//! Decode-error taxonomy for the wire codec.
//!
//! Every decode failure is reported as a [`DecodeError`]: the failure kind
//! plus the dotted/indexed path of the field that caused it (e.g.
//! `chargingSchedulePeriod[1].startPeriod`). The path is assembled as the
//! error propagates out of nested decoders, so the dispatch layer can map it
//! onto a protocol-level error response without re-parsing the payload.

use std::fmt;

use thiserror::Error;

/// A bounded string was constructed (or decoded) from an over-long input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("string exceeds {max} characters (got {len})")]
pub struct LengthError {
    /// The declared maximum length, in Unicode scalar values.
    pub max: usize,
    /// The actual length of the rejected input.
    pub len: usize,
}

/// What went wrong while decoding a wire value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    /// A bounded string field exceeded its declared maximum length.
    #[error("{0}")]
    LengthViolation(#[from] LengthError),

    /// A required field was absent (or explicitly `null`).
    #[error("required field is missing")]
    MissingField,

    /// The JSON value's kind does not match the field's declared kind.
    /// Covers numeric-precision mismatches: a fractional number offered to a
    /// whole-number field is a mismatch, never a truncation.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A token outside an enumeration's closed set. Always a hard failure:
    /// no enumeration decodes to a default variant.
    #[error("unknown {enumeration} token `{token}`")]
    UnknownEnumValue {
        enumeration: &'static str,
        token: String,
    },

    /// A timestamp string the timestamp collaborator could not parse.
    #[error("malformed timestamp `{value}`")]
    MalformedTimestamp { value: String },

    /// The payload text was not valid JSON at all.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),
}

/// A decode failure with the path of the offending field.
///
/// The path is empty when the failure concerns the top-level value itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    path: String,
    kind: DecodeErrorKind,
}

impl DecodeError {
    /// A failure at the current (top-level) value, with an empty path.
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            path: String::new(),
            kind,
        }
    }

    /// A `MissingField` failure for the given key.
    pub fn missing_field(key: &str) -> Self {
        Self {
            path: key.to_string(),
            kind: DecodeErrorKind::MissingField,
        }
    }

    /// Prepend an object key to the path while unwinding.
    pub fn in_field(mut self, key: &str) -> Self {
        self.path = if self.path.is_empty() {
            key.to_string()
        } else if self.path.starts_with('[') {
            format!("{key}{}", self.path)
        } else {
            format!("{key}.{}", self.path)
        };
        self
    }

    /// Prepend a list index to the path while unwinding.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path = if self.path.is_empty() {
            format!("[{index}]")
        } else if self.path.starts_with('[') {
            format!("[{index}]{}", self.path)
        } else {
            format!("[{index}].{}", self.path)
        };
        self
    }

    /// The dotted/indexed path of the field that failed; empty for the
    /// top-level value.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The failure kind.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeErrorKind> for DecodeError {
    fn from(kind: DecodeErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<LengthError> for DecodeError {
    fn from(err: LengthError) -> Self {
        Self::new(DecodeErrorKind::LengthViolation(err))
    }
}

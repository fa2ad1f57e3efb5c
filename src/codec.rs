//! The wire codec contract.
//!
//! Every payload type converts to and from a `serde_json::Value`:
//!
//! - **Encode** never fails: construction-time validation guarantees
//!   encodability, required keys are always emitted, optional keys are
//!   omitted when absent (never written as `null`).
//! - **Decode** is strict where the protocol is strict (missing required
//!   fields, wrong JSON kinds, tokens outside an enumeration) and tolerant
//!   where it must be for forward compatibility (unrecognized keys are
//!   ignored, a present-but-`null` optional reads as absent).
//!
//! All operations are pure: they read their arguments, allocate their
//! results, and hold no shared state, so they are freely usable from any
//! number of threads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::error::{DecodeError, DecodeErrorKind};
use crate::string::CiString;

/// Bidirectional conversion between an in-memory value and its JSON wire
/// representation.
pub trait OcppJson: Sized {
    /// Produce the wire representation. Never fails for a validly
    /// constructed value.
    fn encode(&self) -> Value;

    /// Reconstruct a value from its wire representation.
    fn decode(value: &Value) -> Result<Self, DecodeError>;
}

/// The JSON kind name used in `TypeMismatch` diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, actual: &Value) -> DecodeError {
    DecodeError::new(DecodeErrorKind::TypeMismatch {
        expected,
        actual: json_kind(actual),
    })
}

// ── Field access ───────────────────────────────────────────────

/// View over a decoded JSON object enforcing the required/optional field
/// rules shared by every composite type.
#[derive(Debug)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Borrow `value` as an object, or fail with `TypeMismatch`.
    pub fn of(value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(mismatch("object", other)),
        }
    }

    /// Decode a required field. Absent and explicit-`null` keys both fail
    /// with `MissingField`; sub-decoder failures propagate with `key`
    /// prepended to their path.
    pub fn required<T: OcppJson>(&self, key: &'static str) -> Result<T, DecodeError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Err(DecodeError::missing_field(key)),
            Some(value) => T::decode(value).map_err(|e| e.in_field(key)),
        }
    }

    /// Decode an optional field. Absent keys and present-but-`null` keys
    /// both read as `None`; the `null` tolerance is decode-only (encode
    /// never emits `null`).
    pub fn optional<T: OcppJson>(&self, key: &'static str) -> Result<Option<T>, DecodeError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::decode(value).map(Some).map_err(|e| e.in_field(key)),
        }
    }
}

// ── Primitive impls ────────────────────────────────────────────

impl OcppJson for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl OcppJson for i32 {
    fn encode(&self) -> Value {
        Value::Number((*self).into())
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        // A fractional number offered to a whole-number field is a hard
        // mismatch, never a truncation.
        let wide = value.as_i64().ok_or_else(|| mismatch("integer", value))?;
        i32::try_from(wide).map_err(|_| {
            DecodeError::new(DecodeErrorKind::TypeMismatch {
                expected: "32-bit integer",
                actual: "number",
            })
        })
    }
}

impl OcppJson for f64 {
    /// Non-finite values (NaN, ±infinity) are not valid protocol values:
    /// JSON cannot represent them and no decoder ever produces them, so a
    /// value holding one was constructed outside the contract. They fall
    /// back to `null` rather than panic.
    fn encode(&self) -> Value {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl OcppJson for DateTime<Utc> {
    fn encode(&self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let text = value.as_str().ok_or_else(|| mismatch("string", value))?;
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                DecodeError::new(DecodeErrorKind::MalformedTimestamp {
                    value: text.to_string(),
                })
            })
    }
}

impl<const N: usize> OcppJson for CiString<N> {
    fn encode(&self) -> Value {
        // Original casing goes out on the wire verbatim.
        Value::String(self.as_str().to_owned())
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let text = value.as_str().ok_or_else(|| mismatch("string", value))?;
        CiString::new(text).map_err(DecodeError::from)
    }
}

impl<T: OcppJson> OcppJson for Vec<T> {
    fn encode(&self) -> Value {
        Value::Array(self.iter().map(T::encode).collect())
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let items = value.as_array().ok_or_else(|| mismatch("array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item).map_err(|e| e.at_index(i)))
            .collect()
    }
}

// ── Payload text entry points ──────────────────────────────────

/// Decode a payload from JSON text, reporting failures with their field
/// path. The transport hands payload text in; this is where it becomes a
/// typed value.
pub fn decode_payload<T: OcppJson>(text: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        let err = DecodeError::new(DecodeErrorKind::InvalidJson(e.to_string()));
        tracing::debug!(error = %err, "payload is not valid JSON");
        err
    })?;
    T::decode(&value).inspect_err(|err| {
        tracing::debug!(path = err.path(), error = %err, "payload decode failed");
    })
}

/// Encode a payload to JSON text.
pub fn encode_payload<T: OcppJson>(value: &T) -> String {
    // serde_json::to_string on a Value never fails
    serde_json::to_string(&value.encode()).unwrap()
}

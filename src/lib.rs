//! # OCPP 2.0.1 payload data model & wire codec
//!
//! The typed vocabulary exchanged between a charging station and a CSMS:
//! identity and authorization records, charging schedules and tariffs,
//! device-model and monitoring records, metering data, network and security
//! configuration, and session/firmware metadata — plus the JSON codec that
//! moves each of them on and off the wire.
//!
//! ## Layout
//!
//! - **string**: `CiString<N>`, the bounded case-insensitive protocol string
//! - **enums**: closed enumeration sets with exact wire tokens
//! - **types**: the composite record catalog
//! - **codec**: the `OcppJson` encode/decode contract and field rules
//! - **error**: the decode-failure taxonomy with field paths
//!
//! Everything here is a pure value: no I/O, no shared state, safe to use
//! from any thread. Transport framing, call correlation, session state and
//! persistence live in the layers that consume these types.
//!
//! ```
//! use ocpp_wire::{decode_payload, IdToken, IdTokenType};
//!
//! let token: IdToken = decode_payload(r#"{"idToken":"ABCDEF1234","type":"ISO14443"}"#)?;
//! assert_eq!(token.kind, IdTokenType::Iso14443);
//! # Ok::<(), ocpp_wire::DecodeError>(())
//! ```

pub mod codec;
pub mod enums;
pub mod error;
pub mod string;
pub mod types;

pub use codec::{decode_payload, encode_payload, OcppJson};
pub use error::{DecodeError, DecodeErrorKind, LengthError};
pub use string::CiString;

pub use enums::*;
pub use types::*;

//! Case-insensitive bounded protocol strings.
//!
//! OCPP identifier fields carry a maximum length straight out of the
//! protocol tables (`CiString<20>`, `CiString<512>`, ...). The bound is a
//! const generic so each field's limit is part of its type, and it is
//! enforced both at construction and at decode time: a live `CiString` never
//! exceeds its bound.
//!
//! The bound counts **Unicode scalar values** (`chars().count()`), not bytes.
//! Comparison, ordering and hashing are ASCII-case-insensitive (protocol
//! identifiers match irrespective of case); the original casing is preserved
//! for display and for the wire.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::LengthError;

/// A string whose length never exceeds `N` Unicode scalar values, comparing
/// case-insensitively.
#[derive(Clone)]
pub struct CiString<const N: usize>(String);

impl<const N: usize> CiString<N> {
    /// The maximum length, in Unicode scalar values.
    pub const MAX_LEN: usize = N;

    /// Validate and wrap `value`, rejecting inputs longer than `N`.
    pub fn new(value: impl Into<String>) -> Result<Self, LengthError> {
        let value = value.into();
        let len = value.chars().count();
        if len > N {
            return Err(LengthError { max: N, len });
        }
        Ok(Self(value))
    }

    /// The stored string, original casing intact.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<const N: usize> PartialEq for CiString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl<const N: usize> Eq for CiString<N> {}

impl<const N: usize> Ord for CiString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.0.chars().map(|c| c.to_ascii_lowercase());
        let rhs = other.0.chars().map(|c| c.to_ascii_lowercase());
        lhs.cmp(rhs)
    }
}

impl<const N: usize> PartialOrd for CiString<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Hash must agree with the case-insensitive equality.
impl<const N: usize> Hash for CiString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.0.chars() {
            c.to_ascii_lowercase().hash(state);
        }
    }
}

impl<const N: usize> fmt::Display for CiString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Transparent Debug keeps diagnostic renderings of composite records concise.
impl<const N: usize> fmt::Debug for CiString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<const N: usize> TryFrom<&str> for CiString<N> {
    type Error = LengthError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> TryFrom<String> for CiString<N> {
    type Error = LengthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> AsRef<str> for CiString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

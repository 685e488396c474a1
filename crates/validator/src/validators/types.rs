//! Type-marker validators.
//!
//! The actual type check happens in the
//! [`AsValidatable`](crate::foundation::AsValidatable) bridge when a value is
//! extracted from a document; these markers pin the expected type for chains
//! that have no other constraint to express. `is_integer()` therefore
//! rejects float-typed numbers (even whole-valued ones) purely through the
//! bridge's strict extraction.

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Accepts any string; pins the expected type to `str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsString;

impl Validate for IsString {
    type Input = str;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates an [`IsString`] marker.
#[must_use]
pub const fn is_string() -> IsString {
    IsString
}

/// Accepts any integer; pins the expected type to `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsInteger;

impl Validate for IsInteger {
    type Input = i64;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates an [`IsInteger`] marker.
#[must_use]
pub const fn is_integer() -> IsInteger {
    IsInteger
}

/// Accepts any boolean; pins the expected type to `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsBoolean;

impl Validate for IsBoolean {
    type Input = bool;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates an [`IsBoolean`] marker.
#[must_use]
pub const fn is_boolean() -> IsBoolean {
    IsBoolean
}

/// Accepts any array; pins the expected type to `[T]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsArray<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for IsArray<T> {
    type Input = [T];

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates an [`IsArray`] marker.
#[must_use]
pub fn is_array<T>() -> IsArray<T> {
    IsArray {
        _phantom: PhantomData,
    }
}

/// Accepts any mapping; pins the expected type to a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsHash;

impl Validate for IsHash {
    type Input = serde_json::Map<String, serde_json::Value>;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates an [`IsHash`] marker.
#[must_use]
pub const fn is_hash() -> IsHash {
    IsHash
}

/// Presence-only check for opaque capability references.
///
/// Accepts any non-null value without inspecting its shape; interface
/// expectations are the consuming subsystem's business, not this engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Present;

impl Validate for Present {
    type Input = serde_json::Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_null() {
            Err(ValidationError::missing())
        } else {
            Ok(())
        }
    }
}

/// Creates a [`Present`] check.
#[must_use]
pub const fn present() -> Present {
    Present
}

//! `AsValidatable` trait with GAT for total type conversion.
//!
//! Predicates are typed (`str`, `i64`, `bool`, …) while configuration
//! documents are loosely-typed `serde_json::Value` trees. This module is the
//! bridge between the two: every conversion is total, returning a
//! `type_mismatch` error instead of panicking for any wrong-typed input.

use std::borrow::Borrow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// Trait for types that can be converted into a validatable view.
///
/// The GAT output allows returning either a borrowed reference or an owned
/// value, unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output view, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable view.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// REFLEXIVE IMPLEMENTATIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<i64> for i64 {
    type Output<'a> = i64;

    #[inline]
    fn as_validatable(&self) -> Result<i64, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<bool> for bool {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        Ok(*self)
    }
}

impl<T> AsValidatable<[T]> for [T] {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self)
    }
}

impl<T> AsValidatable<[T]> for Vec<T> {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self.as_slice())
    }
}

// ============================================================================
// SERDE JSON VALUE CONVERSIONS
// ============================================================================

/// Returns a human-readable type name for a JSON value.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            serde_json::Value::String(s) => Ok(s.as_str()),
            other => Err(ValidationError::type_mismatch("string", json_type_name(other))),
        }
    }
}

impl AsValidatable<i64> for serde_json::Value {
    type Output<'a> = i64;

    /// Strict integer extraction: any float-typed number fails, including
    /// whole-valued ones like `3.0`.
    #[inline]
    fn as_validatable(&self) -> Result<i64, ValidationError> {
        match self {
            serde_json::Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| ValidationError::type_mismatch("integer", "number")),
            other => Err(ValidationError::type_mismatch(
                "integer",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<bool> for serde_json::Value {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        match self {
            serde_json::Value::Bool(b) => Ok(*b),
            other => Err(ValidationError::type_mismatch(
                "boolean",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<[serde_json::Value]> for serde_json::Value {
    type Output<'a>
        = &'a [serde_json::Value]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[serde_json::Value], ValidationError> {
        match self {
            serde_json::Value::Array(arr) => Ok(arr.as_slice()),
            other => Err(ValidationError::type_mismatch(
                "array",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<serde_json::Map<String, serde_json::Value>> for serde_json::Value {
    type Output<'a>
        = &'a serde_json::Map<String, serde_json::Value>
    where
        Self: 'a;

    #[inline]
    fn as_validatable(
        &self,
    ) -> Result<&serde_json::Map<String, serde_json::Value>, ValidationError> {
        match self {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(ValidationError::type_mismatch(
                "object",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<serde_json::Value> for serde_json::Value {
    type Output<'a>
        = &'a serde_json::Value
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&serde_json::Value, ValidationError> {
        Ok(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

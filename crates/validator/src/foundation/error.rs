//! Structured validation errors.
//!
//! Every failed check produces a [`ValidationError`] carrying a symbolic,
//! machine-matchable `code` alongside the default English message. Callers
//! localize or branch on `code`; the message is a courtesy.
//!
//! String fields use `Cow<'static, str>` so the common case of static codes
//! and messages allocates nothing.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with a symbolic code, optional field path,
/// message parameters, and nested errors for aggregated failures.
///
/// # Examples
///
/// ```rust,ignore
/// let error = ValidationError::new("min", "Value must be at least 1")
///     .with_field("min_bytes")
///     .with_param("min", "1")
///     .with_param("actual", "0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Symbolic code for programmatic handling and i18n.
    ///
    /// Examples: "missing", "type_mismatch", "invalid_format"
    pub code: Cow<'static, str>,

    /// Human-readable default message in English.
    pub message: Cow<'static, str>,

    /// Field path the error is attached to, when known.
    ///
    /// Examples: "max_wait_time", "topics[0].name"
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the message template, as ordered key-value pairs.
    ///
    /// Typically 0-2 entries, hence the small-vector optimization.
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Nested errors for aggregated failures (per-element collection checks).
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error aggregates nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        for (i, error) in self.nested.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, error)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TAXONOMY CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A required field is absent or nil.
    #[must_use]
    pub fn missing() -> Self {
        Self::new("missing", "Field is required and cannot be nil")
    }

    /// A value has the wrong type for the declared check.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new("type_mismatch", format!("Expected {expected}, got {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// A string value does not have the expected shape.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// A collection that must carry at least one element is empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("empty", "Collection must not be empty")
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Field rules: a predicate chain bound to a named document field.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde_json::Value;

use crate::foundation::{AsValidatable, Validate, ValidationError};

/// Boxed, type-erased check over a document value.
///
/// This is the erasure point that lets one schema hold rules over strings,
/// integers, booleans, and arrays side by side.
pub(crate) type BoxedCheck = Box<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>;

// ============================================================================
// REQUIREDNESS
// ============================================================================

/// Whether a field must be present and non-nil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requiredness {
    /// Absent or nil fails with `missing` before any predicate runs.
    Required,
    /// Absent or nil passes and skips all predicates; any other value is
    /// fully validated.
    OptionalNilable,
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// Binds a predicate chain to a named field with a requiredness policy.
///
/// The chain is evaluated in order and stops at the first failing predicate,
/// so one bad value reports one error code rather than a cascade
/// (`type_mismatch` *and* `invalid_format` for the same integer id, say).
pub struct FieldRule {
    path: Cow<'static, str>,
    requiredness: Requiredness,
    check: BoxedCheck,
}

impl FieldRule {
    /// Creates a rule from a typed validator chain.
    ///
    /// The chain is lifted through the JSON bridge, so the first check every
    /// present value meets is the type extraction.
    pub fn new<V>(
        path: impl Into<Cow<'static, str>>,
        requiredness: Requiredness,
        validator: V,
    ) -> Self
    where
        V: Validate + Send + Sync + 'static,
        Value: AsValidatable<V::Input>,
        for<'a> <Value as AsValidatable<V::Input>>::Output<'a>: Borrow<V::Input>,
    {
        Self {
            path: path.into(),
            requiredness,
            check: Box::new(move |value| validator.validate_any(value)),
        }
    }

    /// The field path this rule applies to.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The rule's requiredness policy.
    #[must_use]
    pub fn requiredness(&self) -> Requiredness {
        self.requiredness
    }

    /// Applies the rule to the field's value as found in the document.
    ///
    /// `None` means the key is absent; JSON `null` is treated the same way.
    pub(crate) fn apply(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        match value {
            None | Some(Value::Null) => match self.requiredness {
                Requiredness::Required => Err(ValidationError::missing()),
                Requiredness::OptionalNilable => Ok(()),
            },
            Some(value) => (self.check)(value),
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("path", &self.path)
            .field("requiredness", &self.requiredness)
            .field("check", &"<check>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

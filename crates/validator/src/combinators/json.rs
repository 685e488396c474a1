//! JSON adapter combinator.
//!
//! Lifts a typed validator into one over `serde_json::Value`, routing the
//! value through the [`AsValidatable`](crate::foundation::AsValidatable)
//! bridge. A wrong-typed value yields the bridge's `type_mismatch` error;
//! the inner validator never sees it.

use std::borrow::Borrow;

use crate::foundation::{AsValidatable, Validate, ValidationError};

/// Adapts a typed validator to `serde_json::Value` input.
///
/// This is the erasure point the schema layer builds on: every field chain
/// is a typed composition wrapped into a `Value`-consuming check exactly
/// once, at the outside.
///
/// # Examples
///
/// ```rust,ignore
/// let v = json(identifier());
/// assert!(v.validate(&json!("consumer_group_1")).is_ok());
/// assert_eq!(v.validate(&json!(2)).unwrap_err().code, "type_mismatch");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Json<V> {
    inner: V,
}

impl<V> Json<V> {
    /// Creates a new JSON adapter around a typed validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Json<V>
where
    V: Validate,
    serde_json::Value: AsValidatable<V::Input>,
    for<'a> <serde_json::Value as AsValidatable<V::Input>>::Output<'a>: Borrow<V::Input>,
{
    type Input = serde_json::Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate_any(input)
    }
}

/// Creates a [`Json`] adapter from a typed validator.
pub fn json<V>(inner: V) -> Json<V> {
    Json::new(inner)
}

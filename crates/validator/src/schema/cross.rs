//! Cross-field rules: constraints over the relationship between two fields.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::ValidationError;

type BoxedPairCheck = Box<dyn Fn(&Value, &Value) -> Result<(), ValidationError> + Send + Sync>;

/// A predicate over two already-individually-valid fields.
///
/// The rule is only evaluated when neither referenced field accumulated an
/// error of its own; a violation is attached to the dependent field alone,
/// never duplicated onto the other.
pub struct CrossFieldRule {
    dependent: Cow<'static, str>,
    other: Cow<'static, str>,
    check: BoxedPairCheck,
}

impl CrossFieldRule {
    /// Creates a cross-field rule from a binary check.
    ///
    /// `dependent` is the field the violation is reported on; `other` is the
    /// field it is constrained against.
    pub fn new<F>(
        dependent: impl Into<Cow<'static, str>>,
        other: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self
    where
        F: Fn(&Value, &Value) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self {
            dependent: dependent.into(),
            other: other.into(),
            check: Box::new(check),
        }
    }

    /// The comparator family: dependent must not exceed other.
    ///
    /// Non-integer operands pass vacuously — their own field rules already
    /// reported them, and this rule never runs in that case anyway.
    pub fn lteq(dependent: &'static str, other: &'static str) -> Self {
        Self::new(dependent, other, move |dep, oth| {
            match (dep.as_i64(), oth.as_i64()) {
                (Some(d), Some(o)) if d > o => Err(ValidationError::new(
                    "lteq",
                    format!("Value must not exceed {other}"),
                )
                .with_param("max", o.to_string())
                .with_param("actual", d.to_string())),
                _ => Ok(()),
            }
        })
    }

    /// The field the violation is reported on.
    #[must_use]
    pub fn dependent(&self) -> &str {
        &self.dependent
    }

    /// The field the dependent one is constrained against.
    #[must_use]
    pub fn other(&self) -> &str {
        &self.other
    }

    pub(crate) fn apply(&self, dependent: &Value, other: &Value) -> Result<(), ValidationError> {
        (self.check)(dependent, other)
    }
}

impl fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("dependent", &self.dependent)
            .field("other", &self.other)
            .field("check", &"<check>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lteq_allows_equal_and_below() {
        let rule = CrossFieldRule::lteq("max_wait_time", "socket_timeout");
        assert!(rule.apply(&json!(5), &json!(5)).is_ok());
        assert!(rule.apply(&json!(4), &json!(5)).is_ok());
    }

    #[test]
    fn lteq_rejects_above_with_params() {
        let rule = CrossFieldRule::lteq("max_wait_time", "socket_timeout");
        let err = rule.apply(&json!(2), &json!(1)).unwrap_err();
        assert_eq!(err.code, "lteq");
        assert_eq!(err.param("max"), Some("1"));
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn lteq_is_vacuous_for_non_integers() {
        let rule = CrossFieldRule::lteq("max_wait_time", "socket_timeout");
        assert!(rule.apply(&json!("2"), &json!(1)).is_ok());
        assert!(rule.apply(&json!(2), &json!(null)).is_ok());
    }
}

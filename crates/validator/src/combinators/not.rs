//! NOT combinator - logical negation of a validator.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                "Value matched a check it must not match",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(inner: V) -> Not<V> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::positive;

    #[test]
    fn inverts_the_inner_validator() {
        let v = not(positive());
        assert!(v.validate(&-1).is_ok());
        assert!(v.validate(&1).is_err());
    }

    #[test]
    fn double_negation_restores() {
        let v = not(not(positive()));
        assert!(v.validate(&1).is_ok());
        assert!(v.validate(&-1).is_err());
    }
}

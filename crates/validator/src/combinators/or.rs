//! OR combinator - logical disjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass; evaluation short-circuits on the first
/// success. When both fail, the reported error nests both failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left_err = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        match self.right.validate(input) {
            Ok(()) => Ok(()),
            Err(right_err) => Err(ValidationError::new("none_of", "No alternative matched")
                .with_nested_error(left_err)
                .with_nested_error(right_err)),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}

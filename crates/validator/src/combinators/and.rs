//! AND combinator - logical conjunction of validators.
//!
//! Both validators must pass; evaluation short-circuits on the first
//! failure, so a chained field reports the first violated check only.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// # Examples
///
/// ```rust,ignore
/// let chain = And::new(is_integer(), min(1));
/// assert!(chain.validate(&3).is_ok());
/// assert!(chain.validate(&0).is_err()); // fails min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}

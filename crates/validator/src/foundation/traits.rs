//! Core traits for the validation system.

use std::borrow::Borrow;

use crate::foundation::ValidationError;
use crate::foundation::validatable::AsValidatable;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait every predicate implements.
///
/// Predicates are generic over their input type for compile-time safety and
/// return `Result<(), ValidationError>` for a consistent API. They are pure:
/// no I/O, no interior state, total over their input.
///
/// # Examples
///
/// ```rust,ignore
/// struct Positive;
///
/// impl Validate for Positive {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if *input > 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("greater_than", "Value must be positive"))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type being validated.
    ///
    /// `?Sized` allows validation of DSTs like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates any value that can be viewed as `Self::Input`.
    ///
    /// This is the totality bridge: a predicate typed over `i64` can be
    /// handed a loosely-typed `serde_json::Value` and reports a
    /// `type_mismatch` error, never a panic, when the shapes disagree.
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let view = value.as_validatable()?;
        self.validate(view.borrow())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for predicates.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// let chain = is_integer().and(min(1));
/// assert!(chain.validate(&3).is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two predicates with logical AND.
    ///
    /// Short-circuits on the first failure, so a chained field reports the
    /// first violated check only.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two predicates with logical OR.
    ///
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the predicate with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

//! Collection size validators.

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a collection has at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmptyCollection<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for NotEmptyCollection<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::empty())
        } else {
            Ok(())
        }
    }
}

/// Creates a validator that rejects empty collections.
///
/// # Examples
///
/// ```
/// use samovar_validator::validators::not_empty_collection;
/// use samovar_validator::foundation::Validate;
///
/// let validator = not_empty_collection::<i64>();
/// assert!(validator.validate(&[1]).is_ok());
/// assert!(validator.validate(&[]).is_err());
/// ```
#[must_use]
pub fn not_empty_collection<T>() -> NotEmptyCollection<T> {
    NotEmptyCollection {
        _phantom: PhantomData,
    }
}

// ============================================================================
// MIN SIZE
// ============================================================================

/// Validates that a collection has at least a minimum number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinSize<T> {
    min: usize,
    _phantom: PhantomData<T>,
}

impl<T> Validate for MinSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let size = input.len();
        if size >= self.min {
            Ok(())
        } else {
            Err(ValidationError::new(
                "min_size",
                format!("Collection must have at least {} elements", self.min),
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", size.to_string()))
        }
    }
}

/// Creates a validator that checks a collection's minimum size.
#[must_use]
pub fn min_size<T>(min: usize) -> MinSize<T> {
    MinSize {
        min,
        _phantom: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================

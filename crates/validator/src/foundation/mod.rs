//! Core validation types and traits.
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//! - **Bridge**: [`AsValidatable`] — total conversion from loosely-typed
//!   document values into typed predicate inputs
//!
//! Predicates are generic over their input type, compose with
//! `.and()` / `.or()` / `.not()`, and are total functions: a predicate
//! expecting a number returns a `type_mismatch` error, never a panic, when
//! handed a string.

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
pub use validatable::AsValidatable;

pub(crate) use validatable::json_type_name;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

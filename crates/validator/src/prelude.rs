//! Prelude module for convenient imports.
//!
//! A single `use samovar_validator::prelude::*;` brings in the traits,
//! error types, built-in validators, combinators, and the schema layer.

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    AsValidatable, Validate, ValidateExt, ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Each, Json, Not, Or, and, each, json, not, or};

// ============================================================================
// SCHEMA: Rule model and reports
// ============================================================================

pub use crate::schema::{
    CrossFieldRule, FieldRule, Report, Requiredness, Schema, SchemaBuilder, SchemaError, SubSchema,
};

// ============================================================================
// SCHEMAS: Concrete document schemas
// ============================================================================

pub use crate::schemas::consumer_group;

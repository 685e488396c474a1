//! The rule model: schemas, field rules, sub-schemas, cross-field rules,
//! and validation reports.
//!
//! A [`Schema`] is a data-driven rule table: an ordered list of
//! [`FieldRule`]s and [`SubSchema`]s plus the [`CrossFieldRule`]s evaluated
//! over individually-valid fields. It is constructed once, never mutated,
//! and shared across threads; each [`Schema::validate`] call produces a
//! fresh [`Report`].

pub mod cross;
pub mod report;
pub mod rule;
#[allow(clippy::module_inception)]
pub mod schema;
pub mod subschema;

pub use cross::CrossFieldRule;
pub use report::Report;
pub use rule::{FieldRule, Requiredness};
pub use schema::{ROOT_PATH, Schema, SchemaBuilder, SchemaError};
pub use subschema::SubSchema;

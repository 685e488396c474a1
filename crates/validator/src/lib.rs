//! # samovar-validator
//!
//! Configuration validation for Samovar consumer groups.
//!
//! Given a loosely-typed settings document, the engine decides whether every
//! field is present, correctly typed, in range, correctly formatted, and
//! mutually consistent — and reports *all* violations as structured data. It
//! never raises: malformed values, malformed URIs, and wrong-typed fields
//! all degrade to symbolic error codes in a [`schema::Report`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use samovar_validator::prelude::*;
//!
//! let report = consumer_group().validate_json(&settings);
//! if !report.success() {
//!     for (path, errors) in report.errors() {
//!         eprintln!("{path}: {:?}", errors);
//!     }
//! }
//! ```
//!
//! ## Layers
//!
//! - [`validators`] — the predicate library: primitive, reusable checks
//! - [`combinators`] — `.and()` / `.or()` / `.not()`, element-wise [`combinators::Each`],
//!   and the [`combinators::Json`] bridge into loosely-typed documents
//! - [`schema`] — field rules, sub-schemas, cross-field rules, reports
//! - [`schemas`] — the concrete consumer-group schema
//!
//! Custom predicates take one [`validator!`] invocation, or a manual
//! [`foundation::Validate`] impl for complex cases.

// ValidationError is the fundamental error type of every check — boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod schemas;
pub mod validators;

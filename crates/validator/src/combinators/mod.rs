//! Validator combinators.
//!
//! Composition primitives for the predicate library:
//!
//! - [`And`] / [`Or`] / [`Not`] — logical composition (also reachable
//!   through [`ValidateExt`](crate::foundation::ValidateExt))
//! - [`Each`] — element-wise validation over `[T]`
//! - [`Json`] — lifts a typed validator to `serde_json::Value` input

pub mod and;
pub mod each;
pub mod json;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use each::{Each, each};
pub use json::{Json, json};
pub use not::{Not, not};
pub use or::{Or, or};

//! Built-in validators.
//!
//! The predicate library: primitive, reusable boolean checks over a single
//! value. Every validator here is a total function — wrong-typed input
//! reaching one through the JSON bridge reports `type_mismatch` instead of
//! panicking.
//!
//! # Categories
//!
//! - **Type markers**: [`is_string`], [`is_integer`], [`is_boolean`],
//!   [`is_array`], [`is_hash`], [`present`]
//! - **Numeric**: [`min`], [`greater_than`], [`positive`]
//! - **Format**: [`identifier`], [`matches_regex`], [`broker_uri`]
//! - **Membership**: [`one_of`]
//! - **Collection**: [`not_empty_collection`], [`min_size`]

pub mod broker;
pub mod membership;
pub mod pattern;
pub mod range;
pub mod size;
pub mod types;

pub use broker::{BrokerUri, broker_uri};
pub use membership::{OneOf, one_of};
pub use pattern::{Identifier, MatchesRegex, identifier, matches_regex};
pub use range::{GreaterThan, Min, Positive, greater_than, min, positive};
pub use size::{MinSize, NotEmptyCollection, min_size, not_empty_collection};
pub use types::{
    IsArray, IsBoolean, IsHash, IsInteger, IsString, Present, is_array, is_boolean, is_hash,
    is_integer, is_string, present,
};

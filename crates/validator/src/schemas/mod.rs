//! Concrete document schemas.
//!
//! One module per document shape the surrounding system validates. Each
//! schema is a process-wide immutable singleton built from the generic rule
//! model in [`crate::schema`].

pub mod consumer_group;

pub use consumer_group::{
    CREDENTIAL_FIELDS, SEED_BROKER_SCHEMES, TOPIC_BACKENDS, consumer_group, topic,
};

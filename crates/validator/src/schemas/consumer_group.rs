//! Consumer-group configuration schema.
//!
//! The rule table a consumer-group settings document must satisfy before the
//! bootstrap layer builds connections, consumers, and subscriptions from it.
//! Constructed once per process and shared read-only; validation itself
//! performs no I/O — seed brokers are checked for shape, never reachability.

use std::sync::LazyLock;

use crate::combinators::{each, json};
use crate::compose;
use crate::foundation::ValidateExt;
use crate::schema::{CrossFieldRule, Schema};
use crate::validators::{
    broker_uri, identifier, is_boolean, is_integer, is_string, min, not_empty_collection, one_of,
    positive, present,
};

/// URI schemes a seed broker may use. Every seed broker must also carry an
/// explicit port.
pub const SEED_BROKER_SCHEMES: &[&str] = &["kafka", "kafka+ssl", "plaintext", "ssl"];

/// Processing modes a topic may declare.
pub const TOPIC_BACKENDS: &[&str] = &["inline", "async"];

/// Credential fields: accepted as absent or nil, but must be strings when
/// given.
pub const CREDENTIAL_FIELDS: &[&str] = &[
    "ssl_ca_cert",
    "ssl_ca_cert_file_path",
    "ssl_client_cert",
    "ssl_client_cert_key",
    "sasl_plain_authzid",
    "sasl_plain_username",
    "sasl_plain_password",
    "sasl_gssapi_principal",
    "sasl_gssapi_keytab",
];

/// The per-topic rule set applied to each element of `topics`.
///
/// `controller` and `parser` are opaque capability references: validated for
/// presence only, never shape-inspected here.
#[must_use]
pub fn topic() -> Schema {
    Schema::builder()
        .required("id", identifier())
        .required("name", is_string())
        .required("backend", one_of(TOPIC_BACKENDS))
        .required("controller", present())
        .required("parser", present())
        .required("max_bytes_per_partition", positive())
        .required("start_from_beginning", is_boolean())
        .required("batch_consuming", is_boolean())
        .required("persistent", is_boolean())
        .build()
        .expect("topic schema is statically well-formed")
}

static CONSUMER_GROUP: LazyLock<Schema> = LazyLock::new(|| {
    let mut builder = Schema::builder()
        .required("id", identifier())
        .required(
            "seed_brokers",
            compose![
                not_empty_collection(),
                each(json(broker_uri(SEED_BROKER_SCHEMES, true)))
            ],
        )
        .required("session_timeout", is_integer())
        .required("offset_commit_interval", is_integer())
        .required("offset_commit_threshold", is_integer())
        .optional("offset_retention_time", is_integer())
        .required("heartbeat_interval", is_integer())
        .required("connect_timeout", positive())
        .required("socket_timeout", positive())
        .required("max_wait_time", min(0i64))
        .required("min_bytes", compose![is_integer(), min(1i64)])
        .required("batch_fetching", is_boolean())
        .optional("pause_timeout", min(0i64))
        .optional("max_bytes_per_partition", positive())
        .optional("start_from_beginning", is_boolean());

    for field in CREDENTIAL_FIELDS {
        builder = builder.optional(*field, is_string());
    }

    builder
        .array_of("topics", topic())
        .cross_rule(CrossFieldRule::lteq("max_wait_time", "socket_timeout"))
        .build()
        .expect("consumer group schema is statically well-formed")
});

/// The process-wide consumer-group schema.
///
/// Built on first use, immutable afterwards, safe to share across threads.
#[must_use]
pub fn consumer_group() -> &'static Schema {
    &CONSUMER_GROUP
}

// ============================================================================
// TESTS
// ============================================================================

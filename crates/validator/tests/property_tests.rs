//! Property-based tests for samovar-validator.

use proptest::prelude::*;
use samovar_validator::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(n in any::<i64>()) {
        let a = min(0i64);
        let b = greater_than(100i64);
        let combined = a.and(b);

        let a_ok = a.validate(&n).is_ok();
        let b_ok = b.validate(&n).is_ok();
        prop_assert_eq!(combined.validate(&n).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(n in any::<i64>()) {
        let a = min(0i64);
        let b = greater_than(100i64);
        let combined = a.or(b);

        let a_ok = a.validate(&n).is_ok();
        let b_ok = b.validate(&n).is_ok();
        prop_assert_eq!(combined.validate(&n).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn double_negation_agrees(n in any::<i64>()) {
        let v = positive();
        let double_neg = not(not(positive()));
        prop_assert_eq!(v.validate(&n).is_ok(), double_neg.validate(&n).is_ok());
    }
}

// ============================================================================
// TOTALITY: no input panics a predicate
// ============================================================================

proptest! {
    #[test]
    fn identifier_is_total_and_deterministic(s in ".*") {
        let v = identifier();
        let first = v.validate(&*s).is_ok();
        let second = v.validate(&*s).is_ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn broker_uri_is_total_over_arbitrary_strings(s in ".*") {
        let v = broker_uri(&["kafka"], true);
        // Must never panic; failures surface as errors.
        let _ = v.validate(&*s);
    }

    #[test]
    fn type_markers_are_total_over_arbitrary_json(value in arbitrary_scalar()) {
        let _ = is_string().validate_any(&value);
        let _ = is_integer().validate_any(&value);
        let _ = is_boolean().validate_any(&value);
    }
}

// ============================================================================
// ENGINE IDEMPOTENCE
// ============================================================================

fn valid_config() -> Value {
    json!({
        "id": "id",
        "seed_brokers": ["kafka://localhost:9092"],
        "offset_commit_interval": 1,
        "offset_commit_threshold": 1,
        "heartbeat_interval": 1,
        "session_timeout": 1,
        "connect_timeout": 10,
        "socket_timeout": 10,
        "max_wait_time": 10,
        "batch_fetching": true,
        "min_bytes": 1,
        "topics": [{
            "id": "id",
            "name": "name",
            "backend": "inline",
            "controller": "EventsController",
            "parser": "JsonParser",
            "max_bytes_per_partition": 1,
            "start_from_beginning": true,
            "batch_consuming": true,
            "persistent": false,
        }],
    })
}

fn arbitrary_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(|f| json!(f)),
        ".{0,20}".prop_map(Value::from),
    ]
}

fn mutable_field() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("id"),
        Just("seed_brokers"),
        Just("session_timeout"),
        Just("connect_timeout"),
        Just("max_wait_time"),
        Just("min_bytes"),
        Just("batch_fetching"),
        Just("ssl_ca_cert"),
        Just("topics"),
    ]
}

proptest! {
    #[test]
    fn validation_is_idempotent_under_mutation(
        field in mutable_field(),
        value in arbitrary_scalar(),
    ) {
        let mut config = valid_config();
        config[field] = value;

        let first = consumer_group().validate_json(&config);
        let second = consumer_group().validate_json(&config);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).expect("report serializes"),
            serde_json::to_string(&second).expect("report serializes"),
        );
    }

    #[test]
    fn any_identifier_shaped_id_is_accepted(id in "[A-Za-z0-9_-]{1,32}") {
        let mut config = valid_config();
        config["id"] = json!(id);
        prop_assert!(consumer_group().validate_json(&config).success());
    }

    #[test]
    fn success_iff_no_error_paths(
        field in mutable_field(),
        value in arbitrary_scalar(),
    ) {
        let mut config = valid_config();
        config[field] = value;
        let report = consumer_group().validate_json(&config);
        prop_assert_eq!(report.success(), report.errors().is_empty());
    }
}

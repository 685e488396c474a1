//! Engine-level integration tests: building custom schemas and the
//! guarantees the evaluator makes regardless of the concrete schema.

use pretty_assertions::assert_eq;
use samovar_validator::prelude::*;
use serde_json::{Map, Value, json};

fn doc(value: Value) -> Map<String, Value> {
    value.as_object().expect("document is an object").clone()
}

fn endpoint_schema() -> Schema {
    Schema::builder()
        .required("name", identifier())
        .required("retries", min(0i64))
        .optional("note", is_string())
        .required("endpoints", each(json(broker_uri(&["kafka"], true))))
        .build()
        .expect("schema is well-formed")
}

#[test]
fn custom_schemas_compose_from_the_same_primitives() {
    let report = endpoint_schema().validate(&doc(json!({
        "name": "fetcher",
        "retries": 3,
        "endpoints": ["kafka://localhost:9092"],
    })));
    assert!(report.success(), "unexpected errors: {report}");
}

#[test]
fn every_failing_path_is_reported_in_declaration_order() {
    let report = endpoint_schema().validate(&doc(json!({
        "name": "%bad%",
        "retries": -2,
        "note": 7,
        "endpoints": "not-a-list",
    })));
    let paths: Vec<&str> = report.errors().keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["name", "retries", "note", "endpoints"]);
    assert_eq!(report.error_count(), 4);
}

#[test]
fn builder_rejects_cross_rules_over_undeclared_fields() {
    let err = Schema::builder()
        .required("max_wait_time", is_integer())
        .cross_rule(CrossFieldRule::lteq("max_wait_time", "socket_timeout"))
        .build()
        .unwrap_err();
    assert_eq!(err, SchemaError::UnknownField("socket_timeout".into()));
    assert!(err.to_string().contains("socket_timeout"));
}

#[test]
fn requiredness_is_part_of_the_rule_not_the_predicate() {
    let schema = Schema::builder()
        .field("a", Requiredness::Required, is_integer())
        .field("b", Requiredness::OptionalNilable, is_integer())
        .build()
        .expect("schema is well-formed");

    let report = schema.validate(&doc(json!({})));
    assert_eq!(report.codes("a"), vec!["missing"]);
    assert!(report.codes("b").is_empty());
}

#[test]
fn custom_regex_rules_fit_the_same_chains() {
    let version = matches_regex(r"^\d+\.\d+$").expect("pattern is valid");
    let schema = Schema::builder()
        .required("api_version", version)
        .build()
        .expect("schema is well-formed");

    assert!(schema.validate(&doc(json!({"api_version": "2.1"}))).success());
    assert_eq!(
        schema
            .validate(&doc(json!({"api_version": "two"})))
            .codes("api_version"),
        vec!["invalid_format"]
    );
}

#[test]
fn reports_are_detached_from_schema_and_document() {
    let report = {
        let schema = Schema::builder()
            .required("id", identifier())
            .build()
            .expect("schema is well-formed");
        let document = doc(json!({"id": "%%"}));
        schema.validate(&document)
        // Schema and document drop here; the report stays usable.
    };
    assert_eq!(report.codes("id"), vec!["invalid_format"]);
}

#[test]
fn one_schema_serves_concurrent_validations() {
    let schema = consumer_group();
    let good = doc(json!({
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
    }));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(schema.validate(&good).success());
                }
            });
        }
    });
}

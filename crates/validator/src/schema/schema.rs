//! Schema: the ordered aggregate of field rules, sub-schemas, and
//! cross-field rules for one document shape.

use std::borrow::{Borrow, Cow};
use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::foundation::{AsValidatable, Validate, ValidationError, json_type_name};
use crate::schema::cross::CrossFieldRule;
use crate::schema::report::Report;
use crate::schema::rule::{FieldRule, Requiredness};
use crate::schema::subschema::SubSchema;

/// Path under which a non-mapping document root is reported by
/// [`Schema::validate_json`].
pub const ROOT_PATH: &str = "$";

#[derive(Debug)]
enum Rule {
    Field(FieldRule),
    Array(SubSchema),
}

impl Rule {
    fn path(&self) -> &str {
        match self {
            Rule::Field(rule) => rule.path(),
            Rule::Array(sub) => sub.path(),
        }
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An immutable, data-driven rule table for one configuration document shape.
///
/// Built once via [`Schema::builder`], then shared freely: a `Schema` is
/// `Send + Sync` and never mutated after construction, so concurrent
/// validations need no locking. Each call only reads the schema and
/// allocates its own [`Report`].
///
/// Evaluation contract:
///
/// - Top-level rules run in declaration order, and every one of them runs —
///   a failure in one field never suppresses a sibling field.
/// - Within a single field's chain, evaluation stops at the first failing
///   predicate, so one bad value yields one error code.
/// - Cross-field rules run last, and only when both referenced fields
///   accumulated no individual errors.
#[derive(Debug)]
pub struct Schema {
    rules: Vec<Rule>,
    cross: Vec<CrossFieldRule>,
}

impl Schema {
    /// Starts building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Number of top-level rules (field rules and sub-schemas).
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Validates a configuration document.
    ///
    /// Never panics and never returns early: the report carries every
    /// violation found across the whole document.
    #[must_use = "a validation report must be checked"]
    pub fn validate(&self, document: &Map<String, Value>) -> Report {
        tracing::trace!(
            rules = self.rules.len(),
            cross_rules = self.cross.len(),
            "validating configuration document"
        );

        let mut errors: IndexMap<String, Vec<ValidationError>> = IndexMap::new();

        for rule in &self.rules {
            match rule {
                Rule::Field(field) => {
                    if let Err(error) = field.apply(document.get(field.path())) {
                        errors
                            .entry(field.path().to_string())
                            .or_default()
                            .push(error.with_field(field.path().to_string()));
                    }
                }
                Rule::Array(sub) => sub.apply(document.get(sub.path()), &mut errors),
            }
        }

        for cross in &self.cross {
            if errors.contains_key(cross.dependent()) || errors.contains_key(cross.other()) {
                continue;
            }
            let (Some(dependent), Some(other)) =
                (document.get(cross.dependent()), document.get(cross.other()))
            else {
                continue;
            };
            if let Err(error) = cross.apply(dependent, other) {
                errors
                    .entry(cross.dependent().to_string())
                    .or_default()
                    .push(error.with_field(cross.dependent().to_string()));
            }
        }

        if errors.is_empty() {
            tracing::trace!("configuration document accepted");
        } else {
            tracing::debug!(
                failed_paths = errors.len(),
                "configuration document rejected"
            );
        }

        Report::new(errors)
    }

    /// Validates an arbitrary JSON value as a configuration document.
    ///
    /// A non-mapping root is reported as `type_mismatch` under [`ROOT_PATH`]
    /// rather than panicking.
    #[must_use = "a validation report must be checked"]
    pub fn validate_json(&self, document: &Value) -> Report {
        match document.as_object() {
            Some(map) => self.validate(map),
            None => {
                let mut errors: IndexMap<String, Vec<ValidationError>> = IndexMap::new();
                errors.entry(ROOT_PATH.to_string()).or_default().push(
                    ValidationError::type_mismatch("object", json_type_name(document))
                        .with_field(ROOT_PATH),
                );
                Report::new(errors)
            }
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Construction-time error for a malformed schema.
///
/// Evaluation is infallible; building is the only place a schema can go
/// wrong, and it happens once at process start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A cross-field rule references a field no rule declares.
    #[error("cross-field rule references undeclared field `{0}`")]
    UnknownField(String),
}

/// Builder assembling the immutable rule table.
///
/// Declaration order is evaluation order.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    rules: Vec<Rule>,
    cross: Vec<CrossFieldRule>,
}

impl SchemaBuilder {
    /// Declares a field rule with an explicit requiredness policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(
        mut self,
        path: impl Into<Cow<'static, str>>,
        requiredness: Requiredness,
        validator: V,
    ) -> Self
    where
        V: Validate + Send + Sync + 'static,
        Value: AsValidatable<V::Input>,
        for<'a> <Value as AsValidatable<V::Input>>::Output<'a>: Borrow<V::Input>,
    {
        self.rules
            .push(Rule::Field(FieldRule::new(path, requiredness, validator)));
        self
    }

    /// Declares a required field.
    #[must_use = "builder methods must be chained or built"]
    pub fn required<V>(self, path: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        Value: AsValidatable<V::Input>,
        for<'a> <Value as AsValidatable<V::Input>>::Output<'a>: Borrow<V::Input>,
    {
        self.field(path, Requiredness::Required, validator)
    }

    /// Declares an optional field that also accepts nil.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional<V>(self, path: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        Value: AsValidatable<V::Input>,
        for<'a> <Value as AsValidatable<V::Input>>::Output<'a>: Borrow<V::Input>,
    {
        self.field(path, Requiredness::OptionalNilable, validator)
    }

    /// Declares a required, non-empty array field whose elements each
    /// satisfy the given schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn array_of(mut self, path: impl Into<Cow<'static, str>>, element: Schema) -> Self {
        self.rules.push(Rule::Array(SubSchema::new(path, element)));
        self
    }

    /// Adds a cross-field rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn cross_rule(mut self, rule: CrossFieldRule) -> Self {
        self.cross.push(rule);
        self
    }

    /// Finalizes the schema.
    ///
    /// Fails when a cross-field rule references a field no rule declares.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let declared: HashSet<&str> = self.rules.iter().map(Rule::path).collect();
        for cross in &self.cross {
            for path in [cross.dependent(), cross.other()] {
                if !declared.contains(path) {
                    return Err(SchemaError::UnknownField(path.to_string()));
                }
            }
        }
        Ok(Schema {
            rules: self.rules,
            cross: self.cross,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{identifier, is_integer, positive};
    use serde_json::json;

    fn schema() -> Schema {
        Schema::builder()
            .required("id", identifier())
            .required("connect_timeout", positive())
            .optional("offset_retention_time", is_integer())
            .cross_rule(CrossFieldRule::lteq("connect_timeout", "connect_timeout"))
            .build()
            .expect("test schema is well-formed")
    }

    fn doc(value: Value) -> Map<String, Value> {
        value.as_object().expect("test document is an object").clone()
    }

    #[test]
    fn valid_document_produces_success() {
        let report = schema().validate(&doc(json!({
            "id": "group_1",
            "connect_timeout": 10,
        })));
        assert!(report.success());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn sibling_fields_are_validated_independently() {
        let report = schema().validate(&doc(json!({
            "id": 2,
            "connect_timeout": 0,
        })));
        assert_eq!(report.codes("id"), vec!["type_mismatch"]);
        assert_eq!(report.codes("connect_timeout"), vec!["greater_than"]);
    }

    #[test]
    fn errors_follow_declaration_order() {
        let report = schema().validate(&doc(json!({
            "connect_timeout": 0,
        })));
        let paths: Vec<&str> = report.errors().keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["id", "connect_timeout"]);
    }

    #[test]
    fn field_chain_reports_one_code() {
        let report = schema().validate(&doc(json!({
            "id": 2,
            "connect_timeout": 10,
        })));
        assert_eq!(report.codes("id").len(), 1);
    }

    #[test]
    fn errors_carry_their_field_path() {
        let report = schema().validate(&doc(json!({
            "connect_timeout": 10,
        })));
        assert_eq!(report.errors()["id"][0].field.as_deref(), Some("id"));
    }

    #[test]
    fn cross_rule_skipped_when_a_field_failed() {
        let bounded = Schema::builder()
            .required("max_wait_time", is_integer())
            .required("socket_timeout", positive())
            .cross_rule(CrossFieldRule::lteq("max_wait_time", "socket_timeout"))
            .build()
            .expect("test schema is well-formed");

        let report = bounded.validate(&doc(json!({
            "max_wait_time": "s",
            "socket_timeout": 1,
        })));
        assert_eq!(report.codes("max_wait_time"), vec!["type_mismatch"]);
    }

    #[test]
    fn cross_rule_violation_lands_on_dependent_only() {
        let bounded = Schema::builder()
            .required("max_wait_time", is_integer())
            .required("socket_timeout", positive())
            .cross_rule(CrossFieldRule::lteq("max_wait_time", "socket_timeout"))
            .build()
            .expect("test schema is well-formed");

        let report = bounded.validate(&doc(json!({
            "max_wait_time": 2,
            "socket_timeout": 1,
        })));
        assert_eq!(report.codes("max_wait_time"), vec!["lteq"]);
        assert!(report.codes("socket_timeout").is_empty());
    }

    #[test]
    fn build_rejects_cross_rule_over_undeclared_field() {
        let result = Schema::builder()
            .required("a", is_integer())
            .cross_rule(CrossFieldRule::lteq("a", "b"))
            .build();
        assert_eq!(result.unwrap_err(), SchemaError::UnknownField("b".into()));
    }

    #[test]
    fn validate_json_reports_non_object_root() {
        let report = schema().validate_json(&json!("not a document"));
        assert!(!report.success());
        assert_eq!(report.codes(ROOT_PATH), vec!["type_mismatch"]);
    }

    #[test]
    fn validate_json_accepts_object_root() {
        let report = schema().validate_json(&json!({
            "id": "g",
            "connect_timeout": 1,
        }));
        assert!(report.success());
    }

    #[test]
    fn unknown_document_keys_are_ignored() {
        let report = schema().validate(&doc(json!({
            "id": "g",
            "connect_timeout": 1,
            "unrelated": {"anything": true},
        })));
        assert!(report.success());
    }

    #[test]
    fn chains_compose_in_builders() {
        let s = Schema::builder()
            .required("min_bytes", is_integer().and(crate::validators::min(1i64)))
            .build()
            .expect("test schema is well-formed");
        assert!(s.validate(&doc(json!({"min_bytes": 1}))).success());
        assert_eq!(
            s.validate(&doc(json!({"min_bytes": 0}))).codes("min_bytes"),
            vec!["min"]
        );
    }
}

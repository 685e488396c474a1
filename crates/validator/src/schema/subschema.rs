//! Sub-schemas: a nested rule set applied to each element of an array field.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{ValidationError, json_type_name};
use crate::schema::Schema;

/// Applies a child [`Schema`] to every element of an array-valued field.
///
/// The parent value must be a non-empty array before any element runs: a
/// configuration with zero subscription targets is itself invalid, not
/// vacuously valid. Element errors are keyed `parent[index].field`; an
/// element that is not a mapping reports `type_mismatch` at `parent[index]`.
pub struct SubSchema {
    path: Cow<'static, str>,
    element: Schema,
}

impl SubSchema {
    /// Creates a sub-schema for an array field.
    pub fn new(path: impl Into<Cow<'static, str>>, element: Schema) -> Self {
        Self {
            path: path.into(),
            element,
        }
    }

    /// The array field path this sub-schema applies to.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The schema each element must satisfy.
    #[must_use]
    pub fn element_schema(&self) -> &Schema {
        &self.element
    }

    /// Applies the sub-schema, recording errors into the shared map.
    pub(crate) fn apply(
        &self,
        value: Option<&Value>,
        errors: &mut IndexMap<String, Vec<ValidationError>>,
    ) {
        let parent = self.path.to_string();

        let items = match value {
            None | Some(Value::Null) => {
                record(errors, parent, ValidationError::missing().with_field(self.path.clone()));
                return;
            }
            Some(Value::Array(items)) => items,
            Some(other) => {
                record(
                    errors,
                    parent,
                    ValidationError::type_mismatch("array", json_type_name(other))
                        .with_field(self.path.clone()),
                );
                return;
            }
        };

        if items.is_empty() {
            record(errors, parent, ValidationError::empty().with_field(self.path.clone()));
            return;
        }

        for (index, item) in items.iter().enumerate() {
            let Some(element) = item.as_object() else {
                let path = format!("{}[{}]", self.path, index);
                record(
                    errors,
                    path.clone(),
                    ValidationError::type_mismatch("object", json_type_name(item))
                        .with_field(path),
                );
                continue;
            };

            let report = self.element.validate(element);
            for (child_path, child_errors) in report.into_errors() {
                let path = format!("{}[{}].{}", self.path, index, child_path);
                for error in child_errors {
                    let error = error.with_field(path.clone());
                    record(errors, path.clone(), error);
                }
            }
        }
    }
}

fn record(
    errors: &mut IndexMap<String, Vec<ValidationError>>,
    path: String,
    error: ValidationError,
) {
    errors.entry(path).or_default().push(error);
}

impl fmt::Debug for SubSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubSchema")
            .field("path", &self.path)
            .field("element", &self.element)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

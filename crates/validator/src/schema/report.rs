//! Validation reports: the output contract of a schema evaluation.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::foundation::ValidationError;

/// The outcome of validating one configuration document.
///
/// Holds the full error mapping keyed by field path, in declaration /
/// encounter order. Created fresh per validation call; holds no references
/// back into the schema or the document, so it can outlive both.
///
/// Validation never raises: a malformed document produces a failed report,
/// not a panic, and every accessor here is total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    errors: IndexMap<String, Vec<ValidationError>>,
}

impl Report {
    pub(crate) fn new(errors: IndexMap<String, Vec<ValidationError>>) -> Self {
        Self { errors }
    }

    /// True iff no rule recorded an error.
    #[must_use]
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The full error mapping, keyed by field path.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, Vec<ValidationError>> {
        &self.errors
    }

    /// Consumes the report, yielding the error mapping.
    #[must_use]
    pub fn into_errors(self) -> IndexMap<String, Vec<ValidationError>> {
        self.errors
    }

    /// The symbolic error codes recorded for a field path.
    ///
    /// Empty when the field passed (or does not exist in the schema).
    #[must_use]
    pub fn codes(&self, path: &str) -> Vec<&str> {
        self.errors
            .get(path)
            .map(|errors| errors.iter().map(|e| e.code.as_ref()).collect())
            .unwrap_or_default()
    }

    /// Total number of recorded errors across all paths.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Converts the report to a JSON structure for surfacing to operators.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "success": self.success(),
            "errors": self.errors,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success() {
            return write!(f, "configuration is valid");
        }
        writeln!(
            f,
            "configuration failed validation with {} error(s):",
            self.error_count()
        )?;
        for (path, errors) in &self.errors {
            for error in errors {
                writeln!(f, "  {path}: {}: {}", error.code, error.message)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_report() -> Report {
        let mut errors: IndexMap<String, Vec<ValidationError>> = IndexMap::new();
        errors
            .entry("id".to_string())
            .or_default()
            .push(ValidationError::missing().with_field("id"));
        errors
            .entry("topics".to_string())
            .or_default()
            .push(ValidationError::empty().with_field("topics"));
        Report::new(errors)
    }

    #[test]
    fn success_iff_no_errors() {
        assert!(Report::new(IndexMap::new()).success());
        assert!(!failed_report().success());
    }

    #[test]
    fn codes_accessor_is_total() {
        let report = failed_report();
        assert_eq!(report.codes("id"), vec!["missing"]);
        assert_eq!(report.codes("never_declared"), Vec::<&str>::new());
    }

    #[test]
    fn error_count_sums_all_paths() {
        assert_eq!(failed_report().error_count(), 2);
    }

    #[test]
    fn display_lists_paths_and_codes() {
        let rendered = failed_report().to_string();
        assert!(rendered.contains("id: missing"));
        assert!(rendered.contains("topics: empty"));
    }

    #[test]
    fn to_json_value_carries_success_and_errors() {
        let value = failed_report().to_json_value();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"]["id"][0]["code"], "missing");
        assert_eq!(Report::new(IndexMap::new()).to_json_value()["success"], true);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let json = serde_json::to_string(&failed_report()).expect("report serializes");
        let id_pos = json.find("\"id\"").unwrap();
        let topics_pos = json.find("\"topics\"").unwrap();
        assert!(id_pos < topics_pos);
    }
}

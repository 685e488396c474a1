//! String format validators.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static IDENTIFIER_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

crate::validator! {
    /// Validates identifier-like strings: alphanumerics, underscores, and
    /// dashes only, at least one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use samovar_validator::validators::identifier;
    /// use samovar_validator::foundation::Validate;
    ///
    /// assert!(identifier().validate("consumer_group-1").is_ok());
    /// assert!(identifier().validate("%^&*(").is_err());
    /// assert!(identifier().validate("").is_err());
    /// ```
    pub Identifier for str;
    rule(input) { IDENTIFIER_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_format("identifier")
            .with_param("pattern", IDENTIFIER_REGEX.as_str())
    }
    fn identifier();
}

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

// ============================================================================
// TESTS
// ============================================================================

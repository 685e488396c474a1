//! Enum membership validators.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is one of a fixed set of allowed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use samovar_validator::validators::one_of;
    /// use samovar_validator::foundation::Validate;
    ///
    /// let backend = one_of(&["inline", "async"]);
    /// assert!(backend.validate("inline").is_ok());
    /// assert!(backend.validate("sidekiq").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub OneOf { allowed: &'static [&'static str] } for str;
    rule(self, input) { self.allowed.contains(&input) }
    error(self, input) {
        ValidationError::new("included_in", "Value is not in the allowed set")
            .with_param("allowed", self.allowed.join(", "))
            .with_param("actual", input.to_string())
    }
    fn one_of(allowed: &'static [&'static str]);
}

//! Seed-broker URI validator.
//!
//! Broker endpoints arrive as strings like `kafka://host:9092`. Parsing is
//! total: malformed input degrades to an `invalid_format` error, never a
//! panic, so a garbage entry cannot take down configuration loading.

use url::Url;

use crate::foundation::{Validate, ValidationError};

/// Validates a broker endpoint URI.
///
/// Checks, in order: the string parses as a URI, the scheme is in the
/// allowed set, a host is present, and (when required) a port is present.
///
/// # Examples
///
/// ```
/// use samovar_validator::validators::broker_uri;
/// use samovar_validator::foundation::Validate;
///
/// let validator = broker_uri(&["kafka"], true);
/// assert!(validator.validate("kafka://localhost:9092").is_ok());
/// assert!(validator.validate("kafka://localhost").is_err());   // no port
/// assert!(validator.validate("https://localhost:9092").is_err()); // scheme
/// assert!(validator.validate("#$%^&*()").is_err());            // unparsable
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BrokerUri {
    schemes: &'static [&'static str],
    port_required: bool,
}

impl BrokerUri {
    /// Creates a new broker URI validator.
    #[must_use]
    pub const fn new(schemes: &'static [&'static str], port_required: bool) -> Self {
        Self {
            schemes,
            port_required,
        }
    }

    /// Returns the allowed scheme set.
    #[must_use]
    pub const fn schemes(&self) -> &'static [&'static str] {
        self.schemes
    }
}

impl Validate for BrokerUri {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Ok(uri) = Url::parse(input) else {
            return Err(ValidationError::invalid_format("broker uri")
                .with_param("value", input.to_string()));
        };

        if !self.schemes.contains(&uri.scheme()) {
            return Err(ValidationError::invalid_format("broker uri")
                .with_param("scheme", uri.scheme().to_string())
                .with_param("allowed", self.schemes.join(", ")));
        }

        if uri.host_str().is_none() {
            return Err(ValidationError::invalid_format("broker uri")
                .with_param("value", input.to_string())
                .with_param("reason", "missing host"));
        }

        if self.port_required && uri.port().is_none() {
            return Err(ValidationError::invalid_format("broker uri")
                .with_param("value", input.to_string())
                .with_param("reason", "missing port"));
        }

        Ok(())
    }
}

/// Creates a [`BrokerUri`] validator.
#[must_use]
pub const fn broker_uri(schemes: &'static [&'static str], port_required: bool) -> BrokerUri {
    BrokerUri::new(schemes, port_required)
}

// ============================================================================
// TESTS
// ============================================================================

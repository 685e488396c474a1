//! EACH combinator - validates every element of a collection.

use crate::foundation::{Validate, ValidationError};

/// Applies a validator to every element of a slice and aggregates failures.
///
/// All elements are visited; the aggregate error keeps the code of the first
/// failing element (so the field-level taxonomy survives aggregation),
/// records the failed indices as a parameter, and nests every element error.
///
/// # Examples
///
/// ```rust,ignore
/// let v = each(json(broker_uri(SEED_BROKER_SCHEMES, true)));
/// assert!(v.validate(&brokers).is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut failures: Vec<(usize, ValidationError)> = Vec::new();

        for (index, element) in input.iter().enumerate() {
            if let Err(e) = self.inner.validate(element) {
                failures.push((index, e));
            }
        }

        if failures.is_empty() {
            return Ok(());
        }

        let indices: Vec<String> = failures.iter().map(|(i, _)| i.to_string()).collect();
        let code = failures[0].1.code.clone();
        let mut error = ValidationError::new(
            code,
            format!(
                "{} of {} elements failed validation",
                failures.len(),
                input.len()
            ),
        )
        .with_param("failed_indices", indices.join(","));

        for (_, e) in failures {
            error = error.with_nested_error(e);
        }

        Err(error)
    }
}

/// Creates an `Each` combinator from an element validator.
pub fn each<V>(inner: V) -> Each<V> {
    Each::new(inner)
}

//! The error sink every check writes into.

use std::collections::BTreeMap;
use std::fmt;

use super::ValidationError;

/// Accumulates [`ValidationError`]s across the clauses of one or more
/// validation calls.
///
/// The sink is owned by the caller and is never reset implicitly: errors
/// recorded by earlier calls stay visible (and keep [`has_errors`] true)
/// until [`clear`] is called.
///
/// [`has_errors`]: Validation::has_errors
/// [`clear`]: Validation::clear
///
/// # Examples
///
/// ```
/// use ruleval::foundation::{Validation, ValidationError};
///
/// let mut validation = Validation::new();
/// validation.record(ValidationError::new("name.Required", "Can not be empty"));
///
/// assert!(validation.has_errors());
/// assert_eq!(validation.errors_for("name").len(), 1);
///
/// validation.clear();
/// assert!(!validation.has_errors());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validation {
    errors: Vec<ValidationError>,
}

impl Validation {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records a failed check.
    pub fn record(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if any check has failed since the last [`clear`](Self::clear).
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors grouped by field name, each group in recording order.
    #[must_use]
    pub fn error_map(&self) -> BTreeMap<&str, Vec<&ValidationError>> {
        let mut map: BTreeMap<&str, Vec<&ValidationError>> = BTreeMap::new();
        for error in &self.errors {
            map.entry(error.field.as_str()).or_default().push(error);
        }
        map
    }

    /// Errors recorded for one field.
    #[must_use]
    pub fn errors_for(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Removes every recorded error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

//! Dynamic validation entry point

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::error::RuleResult;
use crate::foundation::{Validation, ValidationError};
use crate::rules::{self, Registry};

/// A validation context that accepts rules as strings.
///
/// Each [`valid_by_strings`](Self::valid_by_strings) call compiles its rule
/// string against the registry, runs every clause against the value, and
/// accumulates failures in the shared [`Validation`]. Errors from earlier
/// calls remain until [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use ruleval::DynamicValidation;
///
/// let mut valid = DynamicValidation::new();
/// assert!(valid.valid_by_strings("name", "Required;Alpha", "alphaman").unwrap());
/// assert!(!valid.valid_by_strings("age", "Required;Min(18)", 17).unwrap());
///
/// let errors = valid.error_map();
/// assert_eq!(errors["age"][0].message, "Minimum is 18");
///
/// // an invalid rule string is an error, not a failed validation
/// assert!(valid.valid_by_strings("age", "Min", 17).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DynamicValidation<'r> {
    validation: Validation,
    registry: &'r Registry,
}

impl DynamicValidation<'static> {
    /// Creates a context backed by the built-in registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Registry::global())
    }
}

impl Default for DynamicValidation<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> DynamicValidation<'r> {
    /// Creates a context backed by a caller-provided registry.
    #[must_use]
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self {
            validation: Validation::new(),
            registry,
        }
    }

    /// Validates `value` against `rule`, recording failures under
    /// `<field>.<Validator>` keys.
    ///
    /// Returns `Ok(true)` if the context holds no errors after the run,
    /// `Ok(false)` if it does (from this call or an earlier one), and `Err`
    /// if the rule string does not compile or a clause cannot be invoked.
    /// A blank rule string runs nothing.
    pub fn valid_by_strings(
        &mut self,
        field: &str,
        rule: &str,
        value: impl Into<Value>,
    ) -> RuleResult<bool> {
        rules::compile(field, rule, self.registry)
            .and_then(|clauses| {
                rules::run(&mut self.validation, &value.into(), &clauses, self.registry)
            })
            .inspect_err(|e| warn!(field, rule, error = %e, "rule string rejected"))
    }

    /// Drops every recorded error.
    pub fn clear(&mut self) {
        self.validation.clear();
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.validation.has_errors()
    }

    /// The underlying error sink.
    #[must_use]
    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    /// Recorded errors grouped by field.
    #[must_use]
    pub fn error_map(&self) -> BTreeMap<&str, Vec<&ValidationError>> {
        self.validation.error_map()
    }

    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }
}

//! Error records for values that fail a check
//!
//! A [`ValidationError`] is the routine outcome of a check rejecting a value.
//! It carries the field-qualified key the rule compiler built for the clause
//! (`"<field>.<Validator>"`), plus the message, the offending value and any
//! limit parameters the check was configured with.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed check.
///
/// # Examples
///
/// ```
/// use ruleval::foundation::ValidationError;
///
/// let error = ValidationError::new("password.MinSize", "Minimum size is 8")
///     .with_param("min", "8");
///
/// assert_eq!(error.field, "password");
/// assert_eq!(error.name, "MinSize");
/// assert_eq!(error.param("min"), Some("8"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Field-qualified key, e.g. `"user.email.Required"`.
    pub key: String,

    /// Field part of the key (everything before the last `.`).
    pub field: String,

    /// Validator part of the key (everything after the last `.`).
    pub name: String,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// The value that was rejected.
    pub value: Value,

    /// Limit parameters the check ran with, in declaration order.
    ///
    /// Example: `[("min", "5")]`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error for `key` with a message.
    ///
    /// The key is split on its last `.`; a key without a dot is used as the
    /// field name and leaves `name` empty.
    pub fn new(key: impl Into<String>, message: impl Into<Cow<'static, str>>) -> Self {
        let key = key.into();
        let (field, name) = match key.rsplit_once('.') {
            Some((field, name)) => (field.to_owned(), name.to_owned()),
            None => (key.clone(), String::new()),
        };

        Self {
            key,
            field,
            name,
            message: message.into(),
            value: Value::Null,
            params: Vec::new(),
        }
    }

    /// Attaches the rejected value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: &Value) -> Self {
        self.value = value.clone();
        self
    }

    /// Adds a limit parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.field, self.name, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

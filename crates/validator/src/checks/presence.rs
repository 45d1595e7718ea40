//! Presence check

use serde_json::Value;

use super::{Args, ensure};
use crate::error::RuleResult;
use crate::foundation::{Validation, ValidationError};

/// Whether a value counts as present.
///
/// `null`, blank strings, zero, empty arrays and empty objects are absent.
/// Booleans are always present, `false` included.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(_) => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// `Required`
pub fn required(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let key = args.key()?;
    ensure(validation, is_present(value), || {
        ValidationError::new(key, "Can not be empty").with_value(value)
    })
}

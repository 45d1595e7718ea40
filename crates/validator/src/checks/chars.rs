//! Character-class checks
//!
//! `Alpha`, `Numeric` and `AlphaNumeric` only accept strings. `AlphaDash`
//! inspects the rendered value, so numbers pass it too.

use serde_json::Value;

use super::{Args, ensure, render};
use crate::error::RuleResult;
use crate::foundation::{Validation, ValidationError};

fn string_of(value: &Value, allowed: impl Fn(char) -> bool) -> bool {
    value.as_str().is_some_and(|s| s.chars().all(allowed))
}

/// `Alpha`: ASCII letters only.
pub fn alpha(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let key = args.key()?;
    ensure(
        validation,
        string_of(value, |c| c.is_ascii_alphabetic()),
        || ValidationError::new(key, "Must be valid alpha characters").with_value(value),
    )
}

/// `Numeric`: ASCII digits only.
pub fn numeric(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let key = args.key()?;
    ensure(validation, string_of(value, |c| c.is_ascii_digit()), || {
        ValidationError::new(key, "Must be valid numeric characters").with_value(value)
    })
}

/// `AlphaNumeric`: ASCII letters and digits.
pub fn alpha_numeric(
    validation: &mut Validation,
    value: &Value,
    args: &Args<'_>,
) -> RuleResult<()> {
    let key = args.key()?;
    ensure(
        validation,
        string_of(value, |c| c.is_ascii_alphanumeric()),
        || ValidationError::new(key, "Must be valid alpha or numeric characters").with_value(value),
    )
}

/// `AlphaDash`: ASCII letters, digits, `-` and `_`.
pub fn alpha_dash(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let key = args.key()?;
    let ok = render(value)
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    ensure(validation, ok, || {
        ValidationError::new(key, "Must be valid alpha or numeric or dash(-_) characters")
            .with_value(value)
    })
}

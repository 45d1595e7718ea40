//! Integer range checks
//!
//! Only integer values qualify; floats, numeric strings and other kinds
//! always fail.

use serde_json::Value;

use super::{Args, ensure};
use crate::error::RuleResult;
use crate::foundation::{Validation, ValidationError};

/// `Min(min)`
pub fn min(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let min = args.int(0, "min")?;
    let key = args.key()?;
    ensure(validation, value.as_i64().is_some_and(|n| n >= min), || {
        ValidationError::new(key, format!("Minimum is {min}"))
            .with_value(value)
            .with_param("min", min.to_string())
    })
}

/// `Max(max)`
pub fn max(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let max = args.int(0, "max")?;
    let key = args.key()?;
    ensure(validation, value.as_i64().is_some_and(|n| n <= max), || {
        ValidationError::new(key, format!("Maximum is {max}"))
            .with_value(value)
            .with_param("max", max.to_string())
    })
}

/// `Range(min, max)`, both bounds inclusive.
pub fn range(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let min = args.int(0, "min")?;
    let max = args.int(1, "max")?;
    let key = args.key()?;
    ensure(
        validation,
        value.as_i64().is_some_and(|n| (min..=max).contains(&n)),
        || {
            ValidationError::new(key, format!("Range is {min} to {max}"))
                .with_value(value)
                .with_param("min", min.to_string())
                .with_param("max", max.to_string())
        },
    )
}

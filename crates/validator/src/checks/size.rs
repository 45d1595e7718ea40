//! Size checks
//!
//! Size is the character count of a string or the element count of an
//! array. Other kinds have no size and always fail.

use serde_json::Value;

use super::{Args, ensure, size_of};
use crate::error::RuleResult;
use crate::foundation::{Validation, ValidationError};

/// Negative limits are treated as 0 (every size satisfies a negative minimum).
fn limit(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// `MinSize(min)`
pub fn min_size(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let min = args.int(0, "min")?;
    let key = args.key()?;
    let ok = size_of(value).is_some_and(|size| size >= limit(min));
    ensure(validation, ok, || {
        ValidationError::new(key, format!("Minimum size is {min}"))
            .with_value(value)
            .with_param("min", min.to_string())
    })
}

/// `MaxSize(max)`
pub fn max_size(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let max = args.int(0, "max")?;
    let key = args.key()?;
    let ok = max >= 0 && size_of(value).is_some_and(|size| size <= limit(max));
    ensure(validation, ok, || {
        ValidationError::new(key, format!("Maximum size is {max}"))
            .with_value(value)
            .with_param("max", max.to_string())
    })
}

/// `Length(n)`
pub fn length(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let n = args.int(0, "length")?;
    let key = args.key()?;
    let ok = n >= 0 && size_of(value).is_some_and(|size| size == limit(n));
    ensure(validation, ok, || {
        ValidationError::new(key, format!("Required length is {n}"))
            .with_value(value)
            .with_param("length", n.to_string())
    })
}

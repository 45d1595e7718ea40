//! Built-in checks
//!
//! Every check has the same calling convention ([`CheckFn`]): the shared
//! [`Validation`] sink, the subject value, and the clause's typed parameters
//! ([`Args`]) whose last entry is always the field-qualified error key.
//! A check that rejects the value records a [`ValidationError`] and still
//! returns `Ok(())`; `Err` is reserved for parameters that do not fit the
//! check's declared signature.
//!
//! # Categories
//!
//! - **Presence**: `Required`
//! - **Numeric**: `Min`, `Max`, `Range`
//! - **Size**: `MinSize`, `MaxSize`, `Length`
//! - **Characters**: `Alpha`, `Numeric`, `AlphaNumeric`, `AlphaDash`
//! - **Patterns**: `Match`, `NoMatch`, `Email`, `IP`, `Base64`, `Mobile`,
//!   `Tel`, `Phone`, `ZipCode`

pub mod chars;
pub mod numeric;
pub mod pattern;
pub mod presence;
pub mod size;

use std::borrow::Cow;

use regex::Regex;
use serde_json::Value;

use crate::error::{RuleError, RuleResult};
use crate::foundation::{Validation, ValidationError};
use crate::rules::{Param, ParamKind, ValidatorDescriptor};

/// Signature shared by every check.
pub type CheckFn = fn(&mut Validation, &Value, &Args<'_>) -> RuleResult<()>;

/// Every built-in check, in documentation order.
pub static BUILTIN: &[ValidatorDescriptor] = &[
    ValidatorDescriptor::new("Required", &[], presence::required),
    ValidatorDescriptor::new("Min", &[ParamKind::Int], numeric::min),
    ValidatorDescriptor::new("Max", &[ParamKind::Int], numeric::max),
    ValidatorDescriptor::new("Range", &[ParamKind::Int, ParamKind::Int], numeric::range),
    ValidatorDescriptor::new("MinSize", &[ParamKind::Int], size::min_size),
    ValidatorDescriptor::new("MaxSize", &[ParamKind::Int], size::max_size),
    ValidatorDescriptor::new("Length", &[ParamKind::Int], size::length),
    ValidatorDescriptor::new("Alpha", &[], chars::alpha),
    ValidatorDescriptor::new("Numeric", &[], chars::numeric),
    ValidatorDescriptor::new("AlphaNumeric", &[], chars::alpha_numeric),
    ValidatorDescriptor::new("AlphaDash", &[], chars::alpha_dash),
    ValidatorDescriptor::new("Match", &[ParamKind::Pattern], pattern::matches),
    ValidatorDescriptor::new("NoMatch", &[ParamKind::Pattern], pattern::no_match),
    ValidatorDescriptor::new("Email", &[], pattern::email),
    ValidatorDescriptor::new("IP", &[], pattern::ip),
    ValidatorDescriptor::new("Base64", &[], pattern::base64),
    ValidatorDescriptor::new("Mobile", &[], pattern::mobile),
    ValidatorDescriptor::new("Tel", &[], pattern::tel),
    ValidatorDescriptor::new("Phone", &[], pattern::phone),
    ValidatorDescriptor::new("ZipCode", &[], pattern::zip_code),
];

// ============================================================================
// ARGUMENTS
// ============================================================================

/// Typed parameters of one compiled clause, as seen by its check.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    name: &'a str,
    params: &'a [Param],
}

impl<'a> Args<'a> {
    /// Wraps a clause's parameters (error key last).
    pub fn new(name: &'a str, params: &'a [Param]) -> Self {
        Self { name, params }
    }

    /// Integer parameter at `index`.
    pub fn int(&self, index: usize, arg_name: &str) -> RuleResult<i64> {
        let param = self.get(index, arg_name)?;
        param
            .as_int()
            .ok_or_else(|| self.kind_mismatch(arg_name, ParamKind::Int, param))
    }

    /// Text parameter at `index`.
    pub fn text(&self, index: usize, arg_name: &str) -> RuleResult<&'a str> {
        let param = self.get(index, arg_name)?;
        param
            .as_text()
            .ok_or_else(|| self.kind_mismatch(arg_name, ParamKind::Text, param))
    }

    /// Pattern parameter at `index`.
    pub fn pattern(&self, index: usize, arg_name: &str) -> RuleResult<&'a Regex> {
        let param = self.get(index, arg_name)?;
        param
            .as_pattern()
            .ok_or_else(|| self.kind_mismatch(arg_name, ParamKind::Pattern, param))
    }

    /// The field-qualified error key (always the last parameter).
    pub fn key(&self) -> RuleResult<&'a str> {
        match self.params.len() {
            0 => Err(RuleError::invocation(self.name, "missing error key")),
            n => self.text(n - 1, "key"),
        }
    }

    fn get(&self, index: usize, arg_name: &str) -> RuleResult<&'a Param> {
        self.params.get(index).ok_or_else(|| {
            RuleError::invocation(
                self.name,
                format!("missing argument '{arg_name}' at position {index}"),
            )
        })
    }

    fn kind_mismatch(&self, arg_name: &str, expected: ParamKind, actual: &Param) -> RuleError {
        RuleError::invocation(
            self.name,
            format!(
                "argument '{arg_name}' must be {expected}, got {}",
                actual.kind()
            ),
        )
    }
}

// ============================================================================
// VALUE HELPERS
// ============================================================================

/// The value as text: strings as-is, everything else as JSON.
pub(crate) fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Character count of a string or element count of an array.
pub(crate) fn size_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Records `error()` unless `ok`.
pub(crate) fn ensure(
    validation: &mut Validation,
    ok: bool,
    error: impl FnOnce() -> ValidationError,
) -> RuleResult<()> {
    if !ok {
        validation.record(error());
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Runs `check` against `value` with `params` plus a `field.<name>` key
    /// and returns whether the value passed.
    pub fn passes(check: CheckFn, name: &str, value: &Value, mut params: Vec<Param>) -> bool {
        params.push(Param::Text(format!("field.{name}")));
        let mut validation = Validation::new();
        check(&mut validation, value, &Args::new(name, &params)).unwrap();
        !validation.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_builtin_names_are_unique() {
        let mut names: Vec<_> = BUILTIN.iter().map(ValidatorDescriptor::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN.len());
    }

    #[test]
    fn test_args_typed_access() {
        let params = vec![
            Param::Int(3),
            Param::Text("name.MinSize".into()),
        ];
        let args = Args::new("MinSize", &params);
        assert_eq!(args.int(0, "min").unwrap(), 3);
        assert_eq!(args.key().unwrap(), "name.MinSize");
    }

    #[test]
    fn test_args_kind_mismatch() {
        let params = vec![Param::Text("3".into()), Param::Text("k".into())];
        let err = Args::new("MinSize", &params).int(0, "min").unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot invoke `MinSize`: argument 'min' must be int, got string"
        );
    }

    #[test]
    fn test_args_missing() {
        let err = Args::new("Min", &[]).key().unwrap_err();
        assert!(matches!(err, RuleError::Invocation { .. }));

        let params = vec![Param::Text("k".into())];
        assert!(Args::new("Range", &params).int(1, "max").is_err());
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&json!("abc")), "abc");
        assert_eq!(render(&json!(12)), "12");
        assert_eq!(render(&json!(true)), "true");
    }

    #[test]
    fn test_size_of() {
        assert_eq!(size_of(&json!("héllo")), Some(5));
        assert_eq!(size_of(&json!([1, 2])), Some(2));
        assert_eq!(size_of(&json!(5)), None);
    }
}

//! Clause parser
//!
//! Turns one clause text (`Name` or `Name(p1, p2, ...)`) into a
//! [`RawClause`] whose parameter count has been checked against the
//! registry. Parameters stay untyped here; coercion happens in
//! [`compile`](super::compile).

use super::registry::Registry;
use crate::error::{RuleError, RuleResult};

/// A clause split into its name and raw parameter texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClause<'a> {
    /// Validator name, trimmed.
    pub name: &'a str,
    /// Raw parameters, trimmed, in order.
    pub params: Vec<&'a str>,
    /// Field-qualified error key (`<field>.<name>`).
    pub key: String,
}

/// The error key every failure of `name` on `field` is recorded under.
#[must_use]
pub fn error_key(field: &str, name: &str) -> String {
    format!("{field}.{name}")
}

/// Parses one clause text for `field`.
///
/// A bare name is only valid for zero-arity validators. With parentheses the
/// content up to the first `)` after the `(` is split on `,`; anything past
/// that `)` is ignored. Empty parentheses hold one empty parameter, so
/// `Required()` is an arity error.
///
/// # Examples
///
/// ```
/// use ruleval::rules::{parse_clause, Registry};
///
/// let clause = parse_clause("Range(1, 140)", "age", Registry::global()).unwrap();
/// assert_eq!(clause.name, "Range");
/// assert_eq!(clause.params, vec!["1", "140"]);
/// assert_eq!(clause.key, "age.Range");
///
/// assert!(parse_clause("MinSize", "name", Registry::global()).is_err());
/// ```
pub fn parse_clause<'a>(
    text: &'a str,
    field: &str,
    registry: &Registry,
) -> RuleResult<RawClause<'a>> {
    let text = text.trim();

    let Some(open) = text.find('(') else {
        let expected = registry.arity_of(text)?;
        if expected != 0 {
            return Err(RuleError::arity(text, expected));
        }
        return Ok(RawClause {
            name: text,
            params: Vec::new(),
            key: error_key(field, text),
        });
    };

    let close = text[open..]
        .find(')')
        .map(|offset| open + offset)
        .ok_or_else(|| RuleError::InvalidFunction {
            clause: text.to_owned(),
        })?;

    let name = text[..open].trim();
    let inner = &text[open + 1..close];
    let params: Vec<&str> = inner.split(',').map(str::trim).collect();

    let expected = registry.arity_of(name)?;
    if params.len() != expected {
        return Err(RuleError::arity(name, expected));
    }

    Ok(RawClause {
        name,
        params,
        key: error_key(field, name),
    })
}

//! Parameter coercion
//!
//! Rule strings carry parameters as text. Each validator declares the kind
//! of every explicit parameter ([`ParamKind`]); [`coerce`] turns the raw text
//! into a typed [`Param`] of that kind. The set of kinds is closed: adding a
//! new one means adding a variant here and an arm to every match on it.

use std::fmt;

use regex::Regex;

use crate::error::{RuleError, RuleResult};

/// The kind of value a validator expects at one parameter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Base-10 signed integer.
    Int,
    /// Text, passed through unchanged.
    Text,
    /// Regular expression, compiled at coercion time.
    Pattern,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Text => "string",
            Self::Pattern => "regexp",
        })
    }
}

/// A typed parameter ready to be handed to a check.
#[derive(Debug, Clone)]
pub enum Param {
    /// Integer parameter.
    Int(i64),
    /// Text parameter. The trailing error key of every clause is also `Text`.
    Text(String),
    /// Compiled pattern.
    Pattern(Regex),
}

impl Param {
    /// The kind this parameter satisfies.
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Int(_) => ParamKind::Int,
            Self::Text(_) => ParamKind::Text,
            Self::Pattern(_) => ParamKind::Pattern,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            Self::Pattern(re) => Some(re),
            _ => None,
        }
    }
}

// Patterns compare by source text so two compilations of one rule string
// are equal.
impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// Converts one raw parameter into the declared kind.
///
/// # Examples
///
/// ```
/// use ruleval::rules::{coerce, Param, ParamKind};
///
/// assert_eq!(coerce(ParamKind::Int, "42").unwrap(), Param::Int(42));
/// assert!(coerce(ParamKind::Int, "4x2").is_err());
/// assert!(coerce(ParamKind::Pattern, "^[a-z]+$").is_ok());
/// ```
pub fn coerce(kind: ParamKind, raw: &str) -> RuleResult<Param> {
    match kind {
        ParamKind::Int => raw
            .parse::<i64>()
            .map(Param::Int)
            .map_err(|source| RuleError::InvalidInteger {
                literal: raw.to_owned(),
                source,
            }),
        ParamKind::Text => Ok(Param::Text(raw.to_owned())),
        ParamKind::Pattern => Ok(Param::Pattern(Regex::new(raw)?)),
    }
}

/// Coerces every raw parameter positionally and appends the error key as the
/// final `Text` parameter.
///
/// Callers check arity first; surplus raw parameters are ignored.
pub fn coerce_params(kinds: &[ParamKind], raw: &[&str], key: String) -> RuleResult<Vec<Param>> {
    let mut params = Vec::with_capacity(kinds.len() + 1);
    for (kind, literal) in kinds.iter().zip(raw) {
        params.push(coerce(*kind, literal)?);
    }
    params.push(Param::Text(key));
    Ok(params)
}

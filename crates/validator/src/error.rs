//! Rule errors
//!
//! A [`RuleError`] means the rule string itself is malformed relative to the
//! registry (or a check could not be invoked). It is never used to report
//! that a value failed a check; those failures are recorded as
//! [`ValidationError`](crate::foundation::ValidationError)s in the
//! [`Validation`](crate::foundation::Validation) sink instead.

use std::num::ParseIntError;

/// Errors raised while compiling a rule string or dispatching its clauses.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    /// The clause names a validator the registry does not know.
    #[error("unknown validator `{name}`")]
    UnknownValidator {
        /// Name as written in the rule string.
        name: String,
    },

    /// The clause passes the wrong number of parameters.
    #[error("`{name}` requires {expected} parameters")]
    Arity {
        /// Validator name.
        name: String,
        /// Declared number of explicit parameters.
        expected: usize,
    },

    /// A `Match(/` opener without a matching `/)` after it.
    #[error("invalid Match function")]
    InvalidMatch,

    /// A clause with `(` but no closing `)`.
    #[error("invalid validator function `{clause}`")]
    InvalidFunction {
        /// The offending clause text.
        clause: String,
    },

    /// A regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An integer parameter could not be parsed.
    #[error("invalid integer parameter `{literal}`: {source}")]
    InvalidInteger {
        /// The literal as written.
        literal: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A compiled clause could not be applied to its check.
    #[error("cannot invoke `{name}`: {reason}")]
    Invocation {
        /// Validator name.
        name: String,
        /// What went wrong.
        reason: String,
    },

    /// A registry already holds a validator with this name.
    #[error("validator `{name}` is already registered")]
    Duplicate {
        /// Validator name.
        name: String,
    },
}

impl RuleError {
    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownValidator { name: name.into() }
    }

    pub(crate) fn arity(name: impl Into<String>, expected: usize) -> Self {
        Self::Arity {
            name: name.into(),
            expected,
        }
    }

    pub(crate) fn invocation(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invocation {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the rule compiler.
pub type RuleResult<T> = Result<T, RuleError>;

//! Rule lexer
//!
//! Splits a rule string into clause texts. A single `Match(/<pattern>/)`
//! clause is cut out first because its pattern may contain `;`, `,` or `)`;
//! it is compiled right away and always runs before the other clauses.

use regex::Regex;
use tracing::trace;

use super::coerce::Param;
use super::compile::CompiledClause;
use crate::error::{RuleError, RuleResult};

const MATCH_OPEN: &str = "Match(/";
const MATCH_CLOSE: &str = "/)";
const MATCH_NAME: &str = "Match";

/// Output of [`split`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// The synthesized `Match` clause, if the rule string had one.
    pub match_clause: Option<CompiledClause>,
    /// Remaining `;`-separated clause texts, trimmed, empties dropped.
    pub clauses: Vec<String>,
}

/// Splits `rule` into clauses for `field`.
///
/// The `Match` span runs from the first `Match(/` to the last `/)`, so a
/// second `Match(...)` in the same string ends up inside the first pattern.
///
/// # Examples
///
/// ```
/// use ruleval::rules::lexer::split;
///
/// let lexed = split("Required; Match(/^[a-z;]+$/) ;MinSize(3)", "name").unwrap();
/// assert_eq!(lexed.clauses, vec!["Required", "MinSize(3)"]);
///
/// let matcher = lexed.match_clause.unwrap();
/// assert_eq!(matcher.name(), "Match");
/// assert_eq!(matcher.key(), Some("name.Match"));
/// ```
pub fn split(rule: &str, field: &str) -> RuleResult<Lexed> {
    let rule = rule.trim();

    let Some(open) = rule.find(MATCH_OPEN) else {
        return Ok(Lexed {
            match_clause: None,
            clauses: split_plain(rule),
        });
    };

    let pattern_start = open + MATCH_OPEN.len();
    let close = match rule.rfind(MATCH_CLOSE) {
        Some(close) if close >= pattern_start => close,
        _ => return Err(RuleError::InvalidMatch),
    };

    let source = &rule[pattern_start..close];
    let pattern = Regex::new(source)?;
    trace!(field, pattern = source, "extracted Match clause");

    let match_clause = CompiledClause::new(
        MATCH_NAME,
        vec![Param::Pattern(pattern), Param::Text(format!("{field}.{MATCH_NAME}"))],
    );

    let remainder = format!(
        "{}{}",
        rule[..open].trim(),
        rule[close + MATCH_CLOSE.len()..].trim()
    );

    Ok(Lexed {
        match_clause: Some(match_clause),
        clauses: split_plain(&remainder),
    })
}

fn split_plain(rule: &str) -> Vec<String> {
    rule.split(';')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(str::to_owned)
        .collect()
}

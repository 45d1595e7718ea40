//! Rule compiler
//!
//! Lexes a rule string, parses each clause against the registry, and coerces
//! the raw parameters into [`CompiledClause`]s ready for dispatch.

use tracing::debug;

use super::coerce::{Param, ParamKind, coerce_params};
use super::lexer;
use super::parser::parse_clause;
use super::registry::Registry;
use crate::error::{RuleError, RuleResult};

/// A clause with its validator resolved and its parameters typed.
///
/// The last parameter is always the `Text` error key.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledClause {
    name: &'static str,
    params: Vec<Param>,
}

impl CompiledClause {
    pub(crate) fn new(name: &'static str, params: Vec<Param>) -> Self {
        Self { name, params }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Typed parameters, error key last.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The error key failures of this clause are recorded under.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.params.last().and_then(Param::as_text)
    }
}

/// Compiles `rule` for `field`.
///
/// A blank rule compiles to no clauses. A `Match(/.../)` clause, if any,
/// always comes first regardless of where it was written.
///
/// # Examples
///
/// ```
/// use ruleval::rules::{compile, Param, Registry};
///
/// let clauses = compile("age", "Required;Range(1, 140)", Registry::global()).unwrap();
/// assert_eq!(clauses.len(), 2);
/// assert_eq!(clauses[1].name(), "Range");
/// assert_eq!(
///     clauses[1].params(),
///     &[Param::Int(1), Param::Int(140), Param::Text("age.Range".into())]
/// );
/// ```
pub fn compile(field: &str, rule: &str, registry: &Registry) -> RuleResult<Vec<CompiledClause>> {
    if rule.trim().is_empty() {
        return Ok(Vec::new());
    }

    let lexed = lexer::split(rule, field)?;
    let mut compiled = Vec::with_capacity(lexed.clauses.len() + 1);
    if let Some(clause) = lexed.match_clause {
        check_match_descriptor(clause.name(), registry)?;
        compiled.push(clause);
    }

    for text in &lexed.clauses {
        let raw = parse_clause(text, field, registry)?;
        let descriptor = registry
            .resolve(raw.name)
            .ok_or_else(|| RuleError::unknown(raw.name))?;
        let params = coerce_params(descriptor.params(), &raw.params, raw.key)?;
        compiled.push(CompiledClause::new(descriptor.name(), params));
    }

    debug!(field, rule, clauses = compiled.len(), "compiled rule string");
    Ok(compiled)
}

/// The lexer builds the `Match` clause itself, so its registry entry is
/// checked here: it must exist and take exactly one pattern.
fn check_match_descriptor(name: &str, registry: &Registry) -> RuleResult<()> {
    let descriptor = registry.resolve(name).ok_or_else(|| RuleError::unknown(name))?;
    match descriptor.params() {
        [ParamKind::Pattern] => Ok(()),
        [other] => Err(RuleError::invocation(
            name,
            format!("argument 'pattern' must be {}, got {other}", ParamKind::Pattern),
        )),
        _ => Err(RuleError::arity(name, descriptor.arity())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ValidatorDescriptor;
    use pretty_assertions::assert_eq;

    fn compile_global(rule: &str) -> RuleResult<Vec<CompiledClause>> {
        compile("field", rule, Registry::global())
    }

    fn names(clauses: &[CompiledClause]) -> Vec<&'static str> {
        clauses.iter().map(CompiledClause::name).collect()
    }

    #[test]
    fn test_blank_rule() {
        assert!(compile_global("").unwrap().is_empty());
        assert!(compile_global("   ").unwrap().is_empty());
        assert!(compile_global(";;").unwrap().is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let clauses = compile_global("Required;Alpha;MaxSize(8)").unwrap();
        assert_eq!(names(&clauses), vec!["Required", "Alpha", "MaxSize"]);
        assert_eq!(clauses[2].key(), Some("field.MaxSize"));
    }

    #[test]
    fn test_match_runs_first() {
        let clauses = compile_global("Required;MinSize(2);Match(/^[a-z]+$/)").unwrap();
        assert_eq!(names(&clauses), vec!["Match", "Required", "MinSize"]);
        assert_eq!(clauses[0].key(), Some("field.Match"));
    }

    #[test]
    fn test_bad_integer() {
        let err = compile_global("Min(ten)").unwrap_err();
        assert!(matches!(err, RuleError::InvalidInteger { ref literal, .. } if literal == "ten"));
        assert!(matches!(
            compile_global("MinSize()"),
            Err(RuleError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_first_error_wins() {
        assert_eq!(
            compile_global("Required;Bogus;MinSize").unwrap_err(),
            RuleError::UnknownValidator {
                name: "Bogus".into()
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let rule = "Match(/^\\w+$/);Required;Range(1,5)";
        assert_eq!(compile_global(rule).unwrap(), compile_global(rule).unwrap());
    }

    #[test]
    fn test_match_requires_registered_descriptor() {
        assert_eq!(
            compile("f", "Match(/x/)", &Registry::empty()).unwrap_err(),
            RuleError::UnknownValidator {
                name: "Match".into()
            }
        );
    }

    #[test]
    fn test_match_descriptor_must_take_one_pattern() {
        fn noop(
            _: &mut crate::foundation::Validation,
            _: &serde_json::Value,
            _: &crate::checks::Args<'_>,
        ) -> RuleResult<()> {
            Ok(())
        }

        let mut text_match = Registry::empty();
        text_match
            .register(ValidatorDescriptor::new("Match", &[ParamKind::Text], noop))
            .unwrap();
        assert!(matches!(
            compile("f", "Match(/x/)", &text_match),
            Err(RuleError::Invocation { ref name, .. }) if name == "Match"
        ));

        let mut wide_match = Registry::empty();
        wide_match
            .register(ValidatorDescriptor::new(
                "Match",
                &[ParamKind::Pattern, ParamKind::Int],
                noop,
            ))
            .unwrap();
        assert_eq!(
            compile("f", "Match(/x/)", &wide_match).unwrap_err(),
            RuleError::Arity {
                name: "Match".into(),
                expected: 2
            }
        );
    }

    #[test]
    fn test_custom_registry_scopes_names() {
        let registry = Registry::empty();
        assert!(matches!(
            compile("f", "Required", &registry),
            Err(RuleError::UnknownValidator { .. })
        ));
    }
}

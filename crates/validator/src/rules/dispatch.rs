//! Clause dispatch
//!
//! Runs compiled clauses in order against one value. A check that rejects
//! the value records into the [`Validation`] and dispatch moves on; a clause
//! that cannot be invoked at all aborts the run.

use serde_json::Value;
use tracing::{debug, trace};

use super::compile::CompiledClause;
use super::registry::Registry;
use crate::checks::Args;
use crate::error::{RuleError, RuleResult};
use crate::foundation::Validation;

/// Applies `clauses` to `value` and reports whether `validation` is still
/// free of errors afterwards.
///
/// Errors recorded before the call count too, so a context shared across
/// fields keeps answering `false` once any field has failed.
pub fn run(
    validation: &mut Validation,
    value: &Value,
    clauses: &[CompiledClause],
    registry: &Registry,
) -> RuleResult<bool> {
    for clause in clauses {
        let descriptor = registry
            .resolve(clause.name())
            .ok_or_else(|| RuleError::unknown(clause.name()))?;

        if clause.params().len() != descriptor.arity() + 1 {
            return Err(RuleError::invocation(
                clause.name(),
                format!(
                    "expected {} parameters plus error key, got {}",
                    descriptor.arity(),
                    clause.params().len()
                ),
            ));
        }

        let before = validation.len();
        (descriptor.check())(validation, value, &Args::new(clause.name(), clause.params()))?;

        if validation.len() > before {
            debug!(
                validator = clause.name(),
                key = clause.key().unwrap_or_default(),
                "value rejected"
            );
        } else {
            trace!(validator = clause.name(), "value accepted");
        }
    }

    Ok(!validation.has_errors())
}

//! Validator registry
//!
//! Maps validator names to [`ValidatorDescriptor`]s. The registry is built
//! once (from the static table in [`checks`](crate::checks) or by hand) and
//! is only read afterwards, so one instance can serve any number of
//! validation calls on any number of threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use tracing::debug;

use super::coerce::ParamKind;
use crate::checks::{self, CheckFn};
use crate::error::{RuleError, RuleResult};

/// Built-in checks that must not be reachable from rule strings.
///
/// `NoMatch` takes a pattern but has no delimiter of its own in the rule
/// syntax, so a pattern containing `,` `;` or `)` would be mis-split.
pub const UNREGISTERED: &[&str] = &["NoMatch"];

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::builtin);

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// One registered validator: its name, the kinds of its explicit parameters,
/// and the check that implements it.
///
/// Every check also receives the [`Validation`](crate::foundation::Validation)
/// sink and the subject value; those two are implicit and never counted in
/// [`arity`](Self::arity).
#[derive(Clone, Copy)]
pub struct ValidatorDescriptor {
    name: &'static str,
    params: &'static [ParamKind],
    check: CheckFn,
}

impl ValidatorDescriptor {
    /// Creates a descriptor.
    pub const fn new(name: &'static str, params: &'static [ParamKind], check: CheckFn) -> Self {
        Self {
            name,
            params,
            check,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared kinds of the explicit parameters, in order.
    #[must_use]
    pub fn params(&self) -> &'static [ParamKind] {
        self.params
    }

    /// Number of explicit parameters a rule string must pass.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn check(&self) -> CheckFn {
        self.check
    }
}

impl fmt::Debug for ValidatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ValidatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if !self.params.is_empty() {
            f.write_str("(")?;
            for (i, kind) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{kind}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Name → descriptor table consulted by the compiler and the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    validators: HashMap<&'static str, ValidatorDescriptor>,
}

impl Registry {
    /// Creates a registry with no validators.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in check except the names in
    /// [`UNREGISTERED`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for descriptor in checks::BUILTIN {
            if UNREGISTERED.contains(&descriptor.name()) {
                continue;
            }
            registry.validators.insert(descriptor.name(), *descriptor);
        }
        debug!(validators = registry.len(), "built validator registry");
        registry
    }

    /// The process-wide built-in registry, initialized on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Adds a validator. Names are unique.
    pub fn register(&mut self, descriptor: ValidatorDescriptor) -> RuleResult<()> {
        if self.validators.contains_key(descriptor.name()) {
            return Err(RuleError::Duplicate {
                name: descriptor.name().to_owned(),
            });
        }
        self.validators.insert(descriptor.name(), descriptor);
        Ok(())
    }

    /// Looks a validator up by name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&ValidatorDescriptor> {
        self.validators.get(name)
    }

    /// Number of explicit parameters `name` takes.
    pub fn arity_of(&self, name: &str) -> RuleResult<usize> {
        self.resolve(name)
            .map(ValidatorDescriptor::arity)
            .ok_or_else(|| RuleError::unknown(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.validators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered descriptors, sorted by name.
    #[must_use]
    pub fn descriptors(&self) -> Vec<&ValidatorDescriptor> {
        let mut descriptors: Vec<_> = self.validators.values().collect();
        descriptors.sort_unstable_by_key(|d| d.name());
        descriptors
    }
}

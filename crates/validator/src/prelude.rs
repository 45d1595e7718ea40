//! Prelude module for convenient imports.
//!
//! ```rust
//! use ruleval::prelude::*;
//!
//! let mut valid = DynamicValidation::new();
//! assert!(valid.valid_by_strings("zip", "ZipCode", "100000").unwrap());
//! ```

pub use crate::DynamicValidation;
pub use crate::error::{RuleError, RuleResult};
pub use crate::foundation::{Validation, ValidationError};
pub use crate::rules::{CompiledClause, Param, ParamKind, Registry, ValidatorDescriptor, compile, run};

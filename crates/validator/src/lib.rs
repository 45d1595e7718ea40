//! # ruleval
//!
//! Rule-string validation: describe checks as text such as
//! `"Required;MinSize(6);Match(/^[a-z]+$/)"`, compile them against a registry
//! of named validators, and run them against a [`serde_json::Value`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ruleval::DynamicValidation;
//!
//! let mut valid = DynamicValidation::new();
//!
//! assert!(valid.valid_by_strings("name", "Required;MinSize(6)", "teststring")?);
//! assert!(!valid.valid_by_strings("age", "Required;Min(9998)", 9997)?);
//!
//! for (field, errors) in valid.error_map() {
//!     for error in errors {
//!         println!("{field}: {}", error.message);
//!     }
//! }
//! # Ok::<(), ruleval::RuleError>(())
//! ```
//!
//! ## Two kinds of failure
//!
//! - A value that does not satisfy a check is a routine outcome: it is
//!   recorded as a [`ValidationError`](foundation::ValidationError) and the
//!   call returns `Ok(false)`.
//! - A rule string that names an unknown validator, passes the wrong number
//!   of parameters, or carries a bad literal is a [`RuleError`].
//!
//! ## Layout
//!
//! - [`rules`]: lexer, clause parser, parameter coercion, registry, dispatch
//! - [`checks`]: the built-in validators
//! - [`foundation`]: the error record and the error sink

pub mod checks;
mod dynamic;
pub mod error;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use dynamic::DynamicValidation;
pub use error::{RuleError, RuleResult};

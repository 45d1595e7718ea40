//! Error records and the error sink checks write into
//!
//! - **Records**: [`ValidationError`], one per failed check
//! - **Sink**: [`Validation`], the caller-owned accumulator shared by every
//!   clause of a rule string
//!
//! Nothing in this module knows about rule strings; the compiler in
//! [`rules`](crate::rules) only depends on [`Validation::record`] and
//! [`Validation::has_errors`].

pub mod error;
pub mod validation;

pub use error::ValidationError;
pub use validation::Validation;

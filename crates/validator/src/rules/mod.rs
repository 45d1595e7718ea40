//! Rule-string compilation
//!
//! A rule string is a `;`-separated list of clauses such as
//! `Required;MinSize(3);Match(/^[a-z]+$/)`. Compilation runs in three steps:
//!
//! 1. [`lexer`] cuts out the `Match(/.../)` clause and splits the rest on `;`
//! 2. [`parser`] splits each clause into a name and raw parameters and checks
//!    the parameter count against the [`Registry`]
//! 3. [`coerce`](mod@coerce) types the raw parameters and appends the error key
//!
//! [`run`] then applies the resulting [`CompiledClause`]s to a value.

pub mod coerce;
pub mod compile;
pub mod dispatch;
pub mod lexer;
pub mod parser;
pub mod registry;

pub use coerce::{Param, ParamKind, coerce, coerce_params};
pub use compile::{CompiledClause, compile};
pub use dispatch::run;
pub use lexer::{Lexed, split};
pub use parser::{RawClause, error_key, parse_clause};
pub use registry::{Registry, UNREGISTERED, ValidatorDescriptor};

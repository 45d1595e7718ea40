//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::{LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "ruleval",
    version,
    about = "Validate values against rule strings such as \"Required;MinSize(6)\"",
    long_about = "Validate values against rule strings such as \"Required;MinSize(6)\".\n\n\
                  Rules are `;`-separated clauses naming built-in validators. \
                  Run `ruleval list` to see them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./ruleval.toml when present).
    #[arg(long, short, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configuration file and RULEVAL_LOG__LEVEL).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate one value against a rule string.
    Check(CheckArgs),

    /// Validate the fields of a JSON document against the configured rules.
    Document(DocumentArgs),

    /// List the registered validators and their parameters.
    List,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Field name used in error keys.
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Rule string, e.g. "Required;Range(1, 140)".
    #[arg(value_name = "RULES")]
    pub rules: String,

    /// Value to validate. Parsed as JSON when possible, otherwise taken as
    /// a string.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Always treat VALUE as a string.
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Parser)]
pub struct DocumentArgs {
    /// JSON file holding one object.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

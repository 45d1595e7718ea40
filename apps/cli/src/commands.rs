//! Subcommand implementations.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, bail};
use ruleval::DynamicValidation;
use ruleval::rules::Registry;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cli::{CheckArgs, DocumentArgs};
use crate::config::Config;

/// How a command ended, as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
    /// A rule string did not compile.
    RuleError,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
            Self::RuleError => 2,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Parses VALUE as JSON, falling back to a plain string.
pub fn parse_value(raw: &str, force_string: bool) -> Value {
    if force_string {
        return Value::String(raw.to_owned());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

pub fn run_check(args: &CheckArgs) -> Outcome {
    let value = parse_value(&args.value, args.raw);
    debug!(field = %args.field, rules = %args.rules, %value, "checking value");

    let mut valid = DynamicValidation::new();
    match valid.valid_by_strings(&args.field, &args.rules, value) {
        Ok(true) => {
            println!("valid");
            Outcome::Valid
        }
        Ok(false) => {
            for error in valid.validation().errors() {
                println!("{error}");
            }
            Outcome::Invalid
        }
        Err(error) => {
            eprintln!("error: {error}");
            Outcome::RuleError
        }
    }
}

pub fn run_document(args: &DocumentArgs, config: &Config) -> anyhow::Result<Outcome> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    let Value::Object(fields) = document else {
        bail!("{} must hold a JSON object", args.input.display());
    };

    if config.rules.is_empty() {
        warn!("no rules configured; nothing to validate");
    }

    let mut valid = DynamicValidation::new();
    for (field, rule) in &config.rules {
        let value = fields.get(field).cloned().unwrap_or(Value::Null);
        if let Err(error) = valid.valid_by_strings(field, rule, value) {
            eprintln!("error: rule for `{field}`: {error}");
            return Ok(Outcome::RuleError);
        }
    }

    let report = serde_json::to_string_pretty(&valid.error_map())
        .context("failed to serialize validation errors")?;
    println!("{report}");

    info!(
        fields = config.rules.len(),
        errors = valid.validation().len(),
        "document validated"
    );
    Ok(if valid.has_errors() {
        Outcome::Invalid
    } else {
        Outcome::Valid
    })
}

pub fn run_list() -> Outcome {
    for descriptor in Registry::global().descriptors() {
        println!("{descriptor}");
    }
    Outcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn value_parsing() {
        assert_eq!(parse_value("42", false), json!(42));
        assert_eq!(parse_value("[1, 2]", false), json!([1, 2]));
        assert_eq!(parse_value("hello", false), json!("hello"));
        assert_eq!(parse_value("42", true), json!("42"));
        assert_eq!(parse_value("\"quoted\"", false), json!("quoted"));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::Valid.code(), 0);
        assert_eq!(Outcome::Invalid.code(), 1);
        assert_eq!(Outcome::RuleError.code(), 2);
    }
}

//! Layered configuration: defaults → TOML file → `RULEVAL_` env → CLI flags.
//!
//! ```toml
//! [log]
//! level = "info"
//! format = "compact"
//!
//! [rules]
//! name = "Required;AlphaDash;MaxSize(32)"
//! age = "Required;Range(1, 140)"
//! ```
//!
//! Nested keys in the environment use `__`, e.g. `RULEVAL_LOG__LEVEL=debug`
//! or `RULEVAL_RULES__EMAIL=Email`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::logging::LogSettings;

pub const DEFAULT_CONFIG_FILE: &str = "ruleval.toml";
pub const ENV_PREFIX: &str = "RULEVAL_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogSettings,
    /// Field name → rule string, used by `document`.
    pub rules: BTreeMap<String, String>,
}

impl Config {
    /// Resolves the configuration for one invocation.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        if let Some(path) = &cli.config {
            ensure!(path.is_file(), "config file {} not found", path.display());
        }
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut figment = Self::figment(&path);
        if let Some(level) = cli.log_level {
            figment = figment.merge(Serialized::default("log.level", level));
        }
        if let Some(format) = cli.log_format {
            figment = figment.merge(Serialized::default("log.format", format));
        }

        figment
            .extract()
            .with_context(|| format!("invalid configuration (file {})", path.display()))
    }

    /// Defaults, then `path` if it exists, then the environment.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

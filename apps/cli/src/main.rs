//! ruleval command-line front end.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod config;
mod logging;

use crate::cli::{Cli, Command};
use crate::commands::{run_check, run_document, run_list};
use crate::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(&cli)?;
    logging::init(&config.log)?;
    debug!(?config, "configuration loaded");

    let outcome = match &cli.command {
        Command::Check(args) => run_check(args),
        Command::Document(args) => run_document(args, &config)?,
        Command::List => run_list(),
    };
    Ok(outcome.exit_code())
}

//! `oxirow` command-line tool.

use clap::Parser;
use oxirow::logging::{init_logging, LogConfig};
use oxirow::Config;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_compare, run_hash, run_show};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Flags override values from the config file.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.log_level.clone_from(level);
    }
    if let Some(format) = cli.log_format {
        config.log_format = format.into();
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    init_logging(&LogConfig {
        level: config.level_filter()?,
        format: config.log_format,
        with_ansi: io::stderr().is_terminal(),
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Show(args) => run_show(args, &config, &mut out),
        Command::Hash(args) => run_hash(args, &mut out),
        Command::Compare(args) => run_compare(args, &mut out),
    }
}

//! unicode-norm: rename files into a Unicode normalization form.
//!
//! This binary parses the command line, sets up logging, merges the config
//! file with the flags, and hands the run to `unorm-core`.

mod cli;
mod logging;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use unorm_core::{Config, CONFIG_ENV_VAR};

use crate::cli::Cli;
use crate::report::Reporter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return exit_for_parse_error(err),
    };

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn exit_for_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = Cli::command().print_help();
            ExitCode::SUCCESS
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let options = cli.apply(config.run_options());
    tracing::debug!("run options: {options:?}");

    let reporter = Reporter::new(cli.paths.len());
    let report = unorm_core::run(&cli.paths, &options, |event| reporter.handle(&event))?;
    reporter.finish(&report, options.dry_run);

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    match path {
        Some(path) => Config::load(&path)
            .with_context(|| format!("failed to load config file {}", path.display())),
        None => Ok(Config::default()),
    }
}

//! Crash records normalizer CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use crash_cli::config::NormalizerConfig;
use crash_cli::logging::{LogConfig, LogFormat, init_logging};
use crash_cli::pipeline::{error_category, run_normalizer, write_report};
use crash_cli::types::{RunOutcome, RunRequest};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::{print_confirmation, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(outcome) => {
            print_confirmation(&outcome);
            if cli.summary {
                print_summary(&outcome);
            }
            0
        }
        Err(error) => {
            eprintln!("error ({}): {error:#}", error_category(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<RunOutcome> {
    let config = NormalizerConfig::load_or_default(cli.config.as_deref()).context("load config")?;
    let request = RunRequest {
        input: cli.input.clone().unwrap_or_else(|| config.paths.input.clone()),
        output: cli.output.clone().unwrap_or_else(|| config.paths.output.clone()),
        csv: config.csv_options().context("csv options")?,
        dry_run: cli.dry_run,
    };
    let outcome = run_normalizer(&request)?;
    if let Some(path) = &cli.report {
        write_report(&outcome.report, path)?;
    }
    Ok(outcome)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

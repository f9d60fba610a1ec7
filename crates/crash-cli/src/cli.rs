//! CLI argument definitions for the crash record normalizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crash-normalize",
    version,
    about = "Normalize categorical fields in crash record extracts",
    long_about = "Normalize categorical fields in crash record extracts.\n\n\
                  Lowercases text columns, fills missing values, and collapses \
                  route type, lighting, traffic control, and collision type \
                  labels into canonical categories.\n\
                  With no arguments, reads crash.csv and writes crash2.csv."
)]
pub struct Cli {
    /// TOML config file with paths and CSV options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input CSV file (overrides the config).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output CSV file (overrides the config).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Normalize and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print a per-column summary table after the run.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Write the run statistics as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

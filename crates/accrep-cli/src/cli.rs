//! CLI argument definitions for the accident report reducer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "accrep",
    version,
    about = "Reduce Québec road accident report CSV files",
    long_about = "Reduce Québec road accident report CSV files.\n\n\
                  Drops the fixed set of unused columns and replaces the\n\
                  French severity label with an integer code (0-3)."
)]
pub struct Cli {
    /// Path to the accident report CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the reduced CSV output.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// JSON file mapping severity labels to integer codes.
    ///
    /// Defaults to the built-in Québec table (Dommages matériels
    /// seulement=0, Léger=1, Grave=2, Mortel=3).
    #[arg(long = "severity-map", value_name = "PATH")]
    pub severity_map: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

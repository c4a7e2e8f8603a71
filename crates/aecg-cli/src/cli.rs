//! CLI argument definitions for the aECG inspector.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aecg",
    version,
    about = "Inspect HL7 annotated ECG (aECG) XML documents",
    long_about = "Decode HL7 aECG XML documents into sample matrices and headers.\n\n\
                  Lists per-lead calibration, sampling frequency and recording start,\n\
                  and the lead, wave and beat vocabularies used to label leads."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode an aECG document and print its header and shape.
    Inspect(InspectArgs),

    /// List the lead vocabulary.
    Leads,

    /// List the wave vocabulary.
    Waves,

    /// List the beat vocabulary.
    Beats,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the aECG XML document.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Decode samples only; skip calibration, lead codes and time base.
    #[arg(long = "samples-only")]
    pub samples_only: bool,

    /// Request the annotation set (currently always empty).
    #[arg(long = "annotations")]
    pub annotations: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "worship-journey",
    version,
    about = "Worship Journey - praise history statistics",
    long_about = "Analyze a multi-year praise history sheet and generate a yearly\n\
                  statistics report: per-leader repertoires, global rankings,\n\
                  new-song detection, and leader overlap."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Analyze the praise history and generate the yearly report.
    Report(ReportArgs),

    /// Print the static alias tables for auditing.
    Aliases,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the praise history CSV.
    #[arg(value_name = "HISTORY_CSV")]
    pub history: PathBuf,

    /// Song index CSV carrying copyright metadata.
    #[arg(long = "song-index", value_name = "CSV")]
    pub song_index: Option<PathBuf>,

    /// Reference list of songs known through the end of last year.
    #[arg(long = "reference", value_name = "TXT")]
    pub reference: Option<PathBuf>,

    /// Output path for the HTML report.
    #[arg(
        long = "output",
        value_name = "HTML",
        default_value = "worship-journey.html"
    )]
    pub output: PathBuf,

    /// Target year for the statistics.
    #[arg(long = "year", value_name = "YYYY", default_value_t = 2025)]
    pub year: i32,

    /// Also write the raw statistics as JSON.
    #[arg(long = "stats-json", value_name = "PATH")]
    pub stats_json: Option<PathBuf>,

    /// Compute and summarize without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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

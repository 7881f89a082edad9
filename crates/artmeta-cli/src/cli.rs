//! CLI argument definitions for the artmeta browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "artmeta",
    version,
    about = "Browse and filter scraped art collection metadata",
    long_about = "Ingest per-record image metadata from JSONL and CSV sources,\n\
                  normalize the inconsistent upstream schemas into one shape,\n\
                  and narrow the collection with text, categorical, and\n\
                  numeric-range filters."
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
    /// Summarize facet vocabularies and dimension ranges for a collection.
    Stats(StatsArgs),

    /// List records matching the given filter criteria.
    Filter(FilterArgs),

    /// Show the full raw metadata for one record.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Path to the source-list document (a JSON array of source paths).
    #[arg(value_name = "INDEX")]
    pub index: PathBuf,
}

#[derive(Parser)]
pub struct FilterArgs {
    /// Path to the source-list document (a JSON array of source paths).
    #[arg(value_name = "INDEX")]
    pub index: PathBuf,

    /// Case-insensitive substring match against artist and title.
    #[arg(long)]
    pub keyword: Option<String>,

    /// Exact source to match.
    #[arg(long)]
    pub source: Option<String>,

    /// Exact artist to match.
    #[arg(long)]
    pub artist: Option<String>,

    /// Exact category to match.
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum width in pixels (records without a width count as 0).
    #[arg(long = "width-min", value_name = "N")]
    pub width_min: Option<f64>,

    /// Maximum width in pixels.
    #[arg(long = "width-max", value_name = "N")]
    pub width_max: Option<f64>,

    /// Minimum height in pixels.
    #[arg(long = "height-min", value_name = "N")]
    pub height_min: Option<f64>,

    /// Maximum height in pixels.
    #[arg(long = "height-max", value_name = "N")]
    pub height_max: Option<f64>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the source-list document (a JSON array of source paths).
    #[arg(value_name = "INDEX")]
    pub index: PathBuf,

    /// Upstream record identifier to show.
    #[arg(long)]
    pub id: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! CLI argument definitions for the store import tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use store_ingest::{DEFAULT_INSPECT_ROWS, STORE_SHEET_NAME};
use store_output::DEFAULT_RECORDS_FILE;

#[derive(Parser)]
#[command(
    name = "store-import",
    version,
    about = "Migrate a store list spreadsheet to the remote import route",
    long_about = "Migrate a store list spreadsheet to the remote import route.\n\n\
                  Run the steps in order: `inspect` to look at the workbook, \
                  `normalize` to write stores_import.json, `upload` to send it."
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow store field values (names, phones, e-mails) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the first non-empty rows of every sheet in a workbook.
    Inspect(InspectArgs),

    /// Convert the store list sheet into the records JSON file.
    Normalize(NormalizeArgs),

    /// Send the records JSON file to the import route.
    Upload(UploadArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the workbook.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Number of non-empty rows to print per sheet.
    #[arg(long = "max-rows", default_value_t = DEFAULT_INSPECT_ROWS)]
    pub max_rows: usize,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the workbook.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Sheet holding the store list.
    #[arg(long = "sheet", default_value = STORE_SHEET_NAME)]
    pub sheet: String,

    /// Output file for the normalized records.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_RECORDS_FILE)]
    pub output: PathBuf,

    /// Warn instead of failing when the header row does not match the layout.
    #[arg(long = "lenient-headers")]
    pub lenient_headers: bool,
}

#[derive(Parser)]
pub struct UploadArgs {
    /// Records file produced by `normalize`.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_RECORDS_FILE)]
    pub input: PathBuf,

    /// TOML file with upload settings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Import route URL (overrides the config file).
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds (overrides the config file).
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Build and report the envelope without sending it.
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

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nda-template-studio",
    version,
    about = "Validate tabular submission files against an NDA data dictionary",
    long_about = "Validate comma-delimited submission files against a declared schema,\n\
                  reconcile unrecognized column names, and re-emit a corrected,\n\
                  schema-conformant submission template."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Validate a submission file and print the report.
    Validate(ValidateArgs),
    /// Print candidate field names for unrecognized headers.
    Suggest(SuggestArgs),
    /// Export a corrected submission template.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Schema definition CSV (name,aliases,requirement,value_range).
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Submission file to validate.
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Expected template shortname (e.g. demographics02). When set,
    /// template-framed files must match it.
    #[arg(long = "short-name", value_name = "NAME")]
    pub short_name: Option<String>,

    /// Emit the full report as JSON instead of a summary table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Schema definition CSV.
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Submission file to inspect.
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Check a proposed new canonical field name for conflicts with the
    /// schema (including singular/plural variants).
    #[arg(long = "propose", value_name = "NAME")]
    pub propose: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Schema definition CSV.
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Submission file to correct.
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Target template shortname; drives the first output line.
    #[arg(long = "short-name", value_name = "NAME")]
    pub short_name: String,

    /// Header-to-field mapping, repeatable (e.g. --map gendr=gender).
    #[arg(long = "map", value_name = "HEADER=FIELD")]
    pub map: Vec<String>,

    /// Header to exclude from the export, repeatable.
    #[arg(long = "ignore", value_name = "HEADER")]
    pub ignore: Vec<String>,

    /// Output path (stdout when omitted).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! CLI argument definitions for the survey scorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use survey_cli::pipeline::DEFAULT_INPUT;

#[derive(Parser)]
#[command(
    name = "survey-score",
    version,
    about = "Score psychometric survey exports",
    long_about = "Score a survey export with three header rows into one row per respondent.\n\n\
                  Computes PHQ-9, BAI, OCI-R and STAI totals with their classifications,\n\
                  Big Five subscale means and ASSIST substance involvement risk."
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

    /// Allow respondent usernames in debug logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a survey export and optionally write the results.
    Score(ScoreArgs),

    /// List the scored instruments with their item ranges and cut-offs.
    Instruments,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Survey export to score.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path to write the results (nothing is written when omitted).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Field separator for CSV input and output.
    #[arg(long = "separator", value_name = "CHAR", default_value_t = ',', value_parser = parse_separator)]
    pub separator: char,

    /// Input is the survey tool's raw export, without the column-tag row.
    #[arg(long = "raw-export")]
    pub raw_export: bool,

    /// Reject missing answers and answers outside each instrument's scale.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print the classification distribution after scoring.
    #[arg(long = "summary")]
    pub summary: bool,
}

fn parse_separator(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some('\\'), Some('t')) if value.len() == 2 => Ok('\t'),
        (Some(ch), None) if ch.is_ascii() => Ok(ch),
        _ => Err(format!(
            "separator must be a single ASCII character, got '{value}'"
        )),
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
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

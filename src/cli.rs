//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`TimestampFormat`] - Timestamp layout options
//! - [`OutputFormat`] - Output format options
//!
//! The enums here are thin clap-facing mirrors of the library types in
//! [`crate::config`] and [`crate::format`]; `From` conversions bridge the two
//! so the rest of the crate never depends on clap.

use clap::{Parser, ValueEnum};

/// Parse a WhatsApp chat export and print descriptive statistics
/// about who writes, when, and in what mood.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscope")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscope chat.txt
    chatscope chat.txt --stats
    chatscope chat.txt -u Alice -s --top 5
    chatscope chat.txt -f day-first
    chatscope chat.txt -o records.csv
    chatscope chat.txt -o records.dat --export jsonl
    chatscope chat.txt --report")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// Timestamp layout of the export (auto-detected when omitted)
    #[arg(short = 'f', long, value_enum, value_name = "FORMAT")]
    pub timestamp_format: Option<TimestampFormat>,

    /// Restrict statistics to a single author
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,

    /// Print the full statistics dashboard
    #[arg(short, long)]
    pub stats: bool,

    /// How many rows to show in ranked tables
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Write parsed records to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Format for --output (detected from the file extension when omitted)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub export: Option<OutputFormat>,

    /// Print a JSON summary report instead of the text dashboard
    #[arg(long)]
    pub report: bool,
}

/// Timestamp layout options.
///
/// WhatsApp writes export timestamps in the device's locale, so the same
/// chat can arrive as `1/2/23, 10:15` or `2/1/23, 10:15`. When no format
/// is given on the command line the parser samples the file and guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TimestampFormat {
    /// Month first, 24-hour clock: M/D/YY, H:MM
    #[value(alias = "mdy")]
    MonthFirst,

    /// Month first, 12-hour clock: M/D/YY, H:MM AM
    #[value(name = "month-first-12h", alias = "mdy12")]
    MonthFirstAmPm,

    /// Day first, 24-hour clock: D/M/YY, H:MM
    #[value(alias = "dmy")]
    DayFirst,
}

impl std::fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::config::TimestampFormat::from(*self).fmt(f)
    }
}

// Conversion to library config type
impl From<TimestampFormat> for crate::config::TimestampFormat {
    fn from(format: TimestampFormat) -> crate::config::TimestampFormat {
        match format {
            TimestampFormat::MonthFirst => crate::config::TimestampFormat::MonthFirst,
            TimestampFormat::MonthFirstAmPm => crate::config::TimestampFormat::MonthFirstAmPm,
            TimestampFormat::DayFirst => crate::config::TimestampFormat::DayFirst,
        }
    }
}

/// Output format options for `--export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

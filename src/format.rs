//! Output format types for the chatscope library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks. These types are suitable for use in library code and other
//! contexts where CLI dependencies are not desired.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatscope::Result<()> {
//! use chatscope::format::{OutputFormat, write_to_format};
//! use chatscope::{ParsedMessage, Sentiment};
//! use chrono::{TimeZone, Utc};
//!
//! let records = vec![ParsedMessage::from_parts(
//!     "Alice",
//!     "Hello!",
//!     Sentiment::Neutral,
//!     Utc.with_ymd_and_hms(2023, 1, 2, 10, 15, 0).unwrap(),
//! )];
//!
//! // Write using format enum
//! write_to_format(&records, "output.csv", OutputFormat::Csv)?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("output.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatscopeError;
use crate::record::ParsedMessage;

/// Output format for parsed chat records.
///
/// Different formats serve different purposes:
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited table, opens in any spreadsheet
/// - [`Json`](OutputFormat::Json) - Structured array, good for APIs
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON per line, ideal for streaming pipelines
///
/// # Example
///
/// ```rust
/// use chatscope::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    ///
    /// One row per record with every derived column, so the export can be
    /// pivoted in a spreadsheet or loaded into a dataframe without further
    /// parsing.
    #[default]
    Csv,

    /// JSON array of records
    ///
    /// Standard JSON format, suitable for APIs and structured processing.
    Json,

    /// JSON Lines - one JSON object per line
    ///
    /// Ideal for streaming and ML applications. Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscope::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscope::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.mime_type(), "application/json");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscope::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("output.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not one of the supported formats.
    pub fn from_path(path: &str) -> Result<Self, ChatscopeError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatscopeError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// This is a convenience function that selects the appropriate writer
/// based on the format enum.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(all(feature = "csv-output", feature = "json-output"))]
/// # fn example() -> chatscope::Result<()> {
/// use chatscope::format::{OutputFormat, write_to_format};
/// use chatscope::ChatParser;
///
/// let records = ChatParser::new().parse_file("chat.txt")?;
///
/// write_to_format(&records, "output.csv", OutputFormat::Csv)?;
/// write_to_format(&records, "output.json", OutputFormat::Json)?;
/// write_to_format(&records, "output.jsonl", OutputFormat::Jsonl)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[ParsedMessage],
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatscopeError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatscopeError::invalid_format(
            "output",
            format!(
                "Output format {:?} requires the '{}' feature to be enabled",
                format,
                match format {
                    OutputFormat::Csv => "csv-output",
                    OutputFormat::Json | OutputFormat::Jsonl => "json-output",
                }
            ),
        )),
    }
}

/// Converts records to a string in the specified format.
///
/// This is useful when you need the output as a string rather than
/// writing to a file.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "csv-output", feature = "json-output"))]
/// # fn example() -> chatscope::Result<()> {
/// use chatscope::format::{OutputFormat, to_format_string};
/// use chatscope::ChatParser;
///
/// let records = ChatParser::new().parse_str("1/2/23, 10:15 - Alice: Hello!")?;
/// let csv = to_format_string(&records, OutputFormat::Csv)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled,
/// or if serialization fails.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[ParsedMessage],
    format: OutputFormat,
) -> Result<String, ChatscopeError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(ChatscopeError::invalid_format(
            "output",
            format!(
                "Output format {:?} requires the '{}' feature to be enabled",
                format,
                match format {
                    OutputFormat::Csv => "csv-output",
                    OutputFormat::Json | OutputFormat::Jsonl => "json-output",
                }
            ),
        )),
    }
}

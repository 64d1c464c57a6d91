//! Output format writers.
//!
//! This module provides writers for the parsed record set:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one record per line) - requires `json-output` feature
//!
//! All three render the same contract columns: `user`, `message`,
//! `sentiment`, `date`, `only_date`, `year`, `month_num`, `month`, `day`,
//! `day_name`, `hour`, `minute`, `period`.
//!
//! For extension-driven dispatch, see
//! [`write_to_format`](crate::format::write_to_format).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatscope::Result<()> {
//! use chatscope::output::{to_csv, write_csv, write_json, write_jsonl};
//! use chatscope::parser::ChatParser;
//!
//! let records = ChatParser::new().parse_file("chat.txt")?;
//!
//! // Write to files
//! write_csv(&records, "records.csv")?;
//! write_json(&records, "records.json")?;
//! write_jsonl(&records, "records.jsonl")?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

//! JSON Lines (JSONL) output writer.
//!
//! One record per line, ideal for streaming consumers and ML pipelines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::ParsedMessage;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is one compact JSON object:
/// ```jsonl
/// {"user":"Alice","message":"Hello",...}
/// {"user":"Bob","message":"Hi",...}
/// ```
pub fn write_jsonl<P: AsRef<Path>>(records: &[ParsedMessage], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
///
/// Same format as [`write_jsonl`], but returns a String instead of writing
/// to a file.
pub fn to_jsonl(records: &[ParsedMessage]) -> Result<String> {
    let mut out = String::new();

    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }

    Ok(out)
}

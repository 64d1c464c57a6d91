//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::record::ParsedMessage;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {
///     "user": "Alice",
///     "message": "Hello",
///     ...
///   }
/// ]
/// ```
pub fn write_json<P: AsRef<Path>>(records: &[ParsedMessage], path: P) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array string.
///
/// Same format as [`write_json`], but returns a String instead of writing
/// to a file.
pub fn to_json(records: &[ParsedMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

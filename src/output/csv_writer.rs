//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::record::ParsedMessage;

/// Contract column order.
const HEADER: [&str; 13] = [
    "user",
    "message",
    "sentiment",
    "date",
    "only_date",
    "year",
    "month_num",
    "month",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: the contract field order, `user` through `period`
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`, dates `YYYY-MM-DD`
/// - Encoding: UTF-8; fields with delimiters or newlines are quoted
pub fn write_csv<P: AsRef<Path>>(records: &[ParsedMessage], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, records)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing
/// to a file.
pub fn to_csv(records: &[ParsedMessage]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(vec![]);
    write_records(&mut writer, records)?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, records: &[ParsedMessage]) -> Result<()> {
    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(&record_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders one record in contract column order.
fn record_row(record: &ParsedMessage) -> [String; 13] {
    [
        record.user.clone(),
        record.message.clone(),
        record.sentiment.to_string(),
        record.date.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.only_date.format("%Y-%m-%d").to_string(),
        record.year.to_string(),
        record.month_num.to_string(),
        record.month.clone(),
        record.day.to_string(),
        record.day_name.clone(),
        record.hour.to_string(),
        record.minute.to_string(),
        record.period.clone(),
    ]
}

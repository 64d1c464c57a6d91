//! Parser configuration and timestamp format handling.
//!
//! This module provides [`ParserConfig`], the builder-style settings struct
//! for [`ChatParser`](crate::parser::ChatParser), and [`TimestampFormat`],
//! the enum of supported WhatsApp timestamp layouts.
//!
//! WhatsApp writes exports with locale-specific timestamp prefixes. The
//! parser auto-detects the layout by sampling the first matches in the file,
//! or you can pin one explicitly:
//!
//! ```rust
//! use chatscope::config::{ParserConfig, TimestampFormat};
//!
//! let config = ParserConfig::new()
//!     .with_timestamp_format(TimestampFormat::DayFirst);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ChatscopeError;

/// Supported timestamp layouts in WhatsApp text exports.
///
/// Each variant ties together the regex that locates timestamp prefixes in
/// raw text and the chrono formats that turn a matched prefix into a date.
/// Both 2-digit and 4-digit years are accepted by every variant.
///
/// # Example
///
/// ```rust
/// use chatscope::config::TimestampFormat;
///
/// let format = TimestampFormat::MonthFirst;
/// let parsed = format.parse_timestamp("1/2/23, 10:15 - ");
/// assert!(parsed.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `M/D/YY, H:MM - ` with a 24-hour clock (US locale).
    #[default]
    MonthFirst,

    /// `M/D/YY, H:MM AM - ` with a 12-hour clock and AM/PM marker.
    MonthFirstAmPm,

    /// `D/M/YY, H:MM - ` with a 24-hour clock (most non-US locales).
    DayFirst,
}

impl TimestampFormat {
    /// Returns the regex pattern that matches this layout's timestamp
    /// prefix at the start of a line.
    ///
    /// The pattern is multiline-anchored, so `find_iter` over a whole
    /// export yields one match per chat entry.
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::MonthFirst | TimestampFormat::DayFirst => {
                r"(?m)^\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s"
            }
            TimestampFormat::MonthFirstAmPm => {
                r"(?m)^\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s?[APap][Mm]\s-\s"
            }
        }
    }

    /// Returns the chrono format strings to try against a matched prefix,
    /// 2-digit year first.
    pub fn parse_formats(&self) -> &'static [&'static str] {
        match self {
            TimestampFormat::MonthFirst => &["%m/%d/%y, %H:%M - ", "%m/%d/%Y, %H:%M - "],
            TimestampFormat::MonthFirstAmPm => &["%m/%d/%y, %I:%M %p - ", "%m/%d/%Y, %I:%M %p - "],
            TimestampFormat::DayFirst => &["%d/%m/%y, %H:%M - ", "%d/%m/%Y, %H:%M - "],
        }
    }

    /// Parses a matched timestamp prefix into a naive date/time.
    ///
    /// Returns `None` when the text matched the pattern but is not a real
    /// calendar date (for example month 13 or hour 25).
    pub fn parse_timestamp(&self, raw: &str) -> Option<NaiveDateTime> {
        for format in self.parse_formats() {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(parsed);
            }
        }
        None
    }

    /// Returns a human-readable sketch of this layout for error messages.
    pub fn layout_hint(&self) -> &'static str {
        match self {
            TimestampFormat::MonthFirst => "M/D/YY, H:MM - ",
            TimestampFormat::MonthFirstAmPm => "M/D/YY, H:MM AM - ",
            TimestampFormat::DayFirst => "D/M/YY, H:MM - ",
        }
    }

    /// Auto-detects the timestamp layout from raw export content.
    ///
    /// Examines up to `sample` timestamp prefixes. Any AM/PM marker selects
    /// [`MonthFirstAmPm`](Self::MonthFirstAmPm); otherwise the first prefix
    /// whose leading pair disambiguates day and month decides (a first
    /// number over 12 means day-first, a second number over 12 means
    /// month-first). Ambiguous content falls back to
    /// [`MonthFirst`](Self::MonthFirst).
    ///
    /// Returns `None` when the content contains no timestamp prefix at all.
    pub fn detect(content: &str, sample: usize) -> Option<Self> {
        let ampm = Regex::new(TimestampFormat::MonthFirstAmPm.pattern()).unwrap();
        if ampm.find_iter(content).take(sample).next().is_some() {
            return Some(TimestampFormat::MonthFirstAmPm);
        }

        let plain = Regex::new(TimestampFormat::MonthFirst.pattern()).unwrap();
        let mut found = false;
        for m in plain.find_iter(content).take(sample) {
            found = true;
            let Some((first, second)) = leading_pair(m.as_str()) else {
                continue;
            };
            if first > 12 {
                return Some(TimestampFormat::DayFirst);
            }
            if second > 12 {
                return Some(TimestampFormat::MonthFirst);
            }
        }

        found.then_some(TimestampFormat::MonthFirst)
    }

    /// Returns all accepted names and aliases, for help text.
    pub fn all_names() -> &'static [&'static str] {
        &["month-first", "mdy", "month-first-12h", "mdy12", "day-first", "dmy"]
    }
}

/// Extracts the two numbers before the first two slashes of a matched
/// timestamp prefix.
fn leading_pair(matched: &str) -> Option<(u32, u32)> {
    let mut parts = matched.split('/');
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    Some((first, second))
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimestampFormat::MonthFirst => "month-first",
            TimestampFormat::MonthFirstAmPm => "month-first-12h",
            TimestampFormat::DayFirst => "day-first",
        };
        write!(f, "{name}")
    }
}

impl FromStr for TimestampFormat {
    type Err = ChatscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month-first" | "mdy" => Ok(TimestampFormat::MonthFirst),
            "month-first-12h" | "mdy12" => Ok(TimestampFormat::MonthFirstAmPm),
            "day-first" | "dmy" => Ok(TimestampFormat::DayFirst),
            other => Err(ChatscopeError::invalid_format(
                "timestamp",
                format!(
                    "unknown value '{}' (expected one of: {})",
                    other,
                    TimestampFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use chatscope::config::{ParserConfig, TimestampFormat};
///
/// let config = ParserConfig::new()
///     .with_timestamp_format(TimestampFormat::MonthFirstAmPm)
///     .with_detect_sample(50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Pinned timestamp layout; `None` enables auto-detection (default: None)
    pub timestamp_format: Option<TimestampFormat>,

    /// How many timestamp prefixes auto-detection samples (default: 20)
    pub detect_sample: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            timestamp_format: None, // auto-detect
            detect_sample: 20,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the timestamp layout, disabling auto-detection.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Sets how many timestamp prefixes auto-detection samples.
    #[must_use]
    pub fn with_detect_sample(mut self, sample: usize) -> Self {
        self.detect_sample = sample;
        self
    }
}

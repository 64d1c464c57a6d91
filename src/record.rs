//! Typed records produced by the parsing pipeline.
//!
//! This module provides [`ParsedMessage`], the statically-typed record every
//! chat line becomes, plus the [`RawEntry`] intermediate the line splitter
//! emits and the [`Sentiment`] label enum.
//!
//! # Overview
//!
//! A record consists of:
//! - **Identity**: `user` (or the [`GROUP_NOTIFICATION`] sentinel) and `message`
//! - **Sentiment**: one of {Positive, Negative, Neutral}, never absent
//! - **Time**: `date` plus calendar fields derived from it, including the
//!   hour-bucket `period` label
//!
//! # Examples
//!
//! ```
//! use chatscope::record::{ParsedMessage, Sentiment};
//! use chrono::{TimeZone, Utc};
//!
//! let date = Utc.with_ymd_and_hms(2023, 1, 2, 10, 15, 0).unwrap();
//! let msg = ParsedMessage::from_parts("Alice", "Hello there", Sentiment::Positive, date);
//!
//! assert_eq!(msg.month, "January");
//! assert_eq!(msg.day_name, "Monday");
//! assert_eq!(msg.period, "10-11");
//! ```

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel author value for non-authored system lines (joins, leaves,
/// encryption notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Placeholder WhatsApp substitutes for attachments stripped from a
/// text-only export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// One detected chat line before classification: the matched timestamp text
/// and everything up to the next timestamp.
///
/// Produced by [`ChatParser::split_entries`](crate::parser::ChatParser::split_entries)
/// and consumed exactly once downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// The timestamp prefix as it appeared in the export, including the
    /// trailing `" - "` separator.
    pub timestamp: String,
    /// The body between this timestamp and the next, trailing newlines
    /// stripped.
    pub body: String,
}

/// Three-way sentiment label.
///
/// Derived from a polarity score in `[-1, 1]`; only the sign matters.
/// `group_notification` rows are always [`Neutral`](Sentiment::Neutral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sentiment {
    /// Polarity score > 0
    Positive,
    /// Polarity score < 0
    Negative,
    /// Polarity score == 0, and every notification row
    #[default]
    Neutral,
}

impl Sentiment {
    /// Maps a polarity score to its label.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscope::record::Sentiment;
    ///
    /// assert_eq!(Sentiment::from_polarity(0.4), Sentiment::Positive);
    /// assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Negative);
    /// assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
    /// ```
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Returns the label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Returns all three labels.
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the hour-bucket label for an hour of day.
///
/// The rule is exact:
/// - hour 23 → `"23-00"`
/// - hour 0 → `"00-1"`
/// - otherwise → `"{hour}-{hour+1}"` with no zero-padding
///
/// # Example
///
/// ```rust
/// use chatscope::record::period_label;
///
/// assert_eq!(period_label(23), "23-00");
/// assert_eq!(period_label(0), "00-1");
/// assert_eq!(period_label(9), "9-10");
/// ```
pub fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// The core output record: one parsed chat message or notification.
///
/// Every field downstream consumers key off is a named, typed struct field.
/// The set is stable: `user`, `message`, `sentiment`, `date`, `only_date`,
/// `year`, `month_num`, `month`, `day`, `day_name`, `hour`, `minute`,
/// `period`.
///
/// # Construction
///
/// Records come out of [`ChatParser`](crate::parser::ChatParser); use
/// [`from_parts`](Self::from_parts) to build one directly, deriving every
/// calendar field from the timestamp:
///
/// ```
/// use chatscope::record::{ParsedMessage, Sentiment};
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2024, 6, 15, 23, 5, 0).unwrap();
/// let msg = ParsedMessage::from_parts("Bob", "Good night", Sentiment::Positive, date);
///
/// assert_eq!(msg.year, 2024);
/// assert_eq!(msg.month_num, 6);
/// assert_eq!(msg.period, "23-00");
/// ```
///
/// # Serialization
///
/// Implements `Serialize` and `Deserialize`; timestamps use RFC 3339 and
/// `only_date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Author name, or [`GROUP_NOTIFICATION`] for system lines.
    pub user: String,

    /// Message body with the `"Name: "` prefix stripped for authored
    /// messages; the full notification text otherwise.
    pub message: String,

    /// Sentiment label; never absent.
    pub sentiment: Sentiment,

    /// Full timestamp the entry carried.
    pub date: DateTime<Utc>,

    /// Calendar date component of `date`.
    pub only_date: NaiveDate,

    /// Year component.
    pub year: i32,

    /// Month number, 1-12.
    pub month_num: u32,

    /// English month name ("January", ...).
    pub month: String,

    /// Day of month, 1-31.
    pub day: u32,

    /// English weekday name ("Monday", ...).
    pub day_name: String,

    /// Hour of day, 0-23.
    pub hour: u32,

    /// Minute, 0-59.
    pub minute: u32,

    /// Hour-bucket label, consistent with `hour` (see [`period_label`]).
    pub period: String,
}

impl ParsedMessage {
    /// Builds a record from the classified parts, deriving all calendar
    /// fields from `date`.
    pub fn from_parts(
        user: impl Into<String>,
        message: impl Into<String>,
        sentiment: Sentiment,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            user: user.into(),
            message: message.into(),
            sentiment,
            date,
            only_date: date.date_naive(),
            year: date.year(),
            month_num: date.month(),
            month: date.format("%B").to_string(),
            day: date.day(),
            day_name: date.format("%A").to_string(),
            hour: date.hour(),
            minute: date.minute(),
            period: period_label(date.hour()),
        }
    }

    /// Returns `true` if this record is a system/group notification.
    pub fn is_notification(&self) -> bool {
        self.user == GROUP_NOTIFICATION
    }

    /// Returns `true` if this record is a stripped media attachment.
    pub fn is_media(&self) -> bool {
        self.message == MEDIA_OMITTED
    }
}

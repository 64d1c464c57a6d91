//! WhatsApp TXT export parsing pipeline.
//!
//! The pipeline has three stages:
//!
//! 1. **Split**: locate every line-leading timestamp prefix and cut the
//!    export into `(timestamp, body)` entries. A body runs to the next
//!    timestamp, so multi-line messages stay whole.
//! 2. **Classify**: split each body at the first `": "` into author and
//!    message; bodies without one become `group_notification` records.
//! 3. **Build**: parse the timestamp, score sentiment, and derive the
//!    calendar fields into a [`ParsedMessage`].
//!
//! The timestamp layout is auto-detected unless pinned via
//! [`ParserConfig`](crate::config::ParserConfig).
//!
//! # Example
//!
//! ```rust
//! use chatscope::parser::ChatParser;
//!
//! let parser = ChatParser::new();
//! let records = parser.parse_str("1/2/23, 10:15 - Alice: Hello there!\n")?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].user, "Alice");
//! assert_eq!(records[0].message, "Hello there!");
//! # Ok::<(), chatscope::ChatscopeError>(())
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::{ParserConfig, TimestampFormat};
use crate::error::{ChatscopeError, Result};
use crate::record::{GROUP_NOTIFICATION, ParsedMessage, RawEntry, Sentiment};
use crate::sentiment::SentimentScorer;

/// Splits a body at the first colon-plus-whitespace into author and
/// message. `(?s)` lets the message half span newlines.
const AUTHOR_PATTERN: &str = r"(?s)^(.+?):\s(.*)";

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatscope::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let records = parser.parse_file("whatsapp_chat.txt")?;
/// println!("{} records", records.len());
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub struct ChatParser {
    config: ParserConfig,
    scorer: SentimentScorer,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
            scorer: SentimentScorer::new(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            scorer: SentimentScorer::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the timestamp format this parser would use for `content`:
    /// the pinned one if configured, the auto-detected one otherwise.
    ///
    /// `None` means the content contains no recognizable timestamp.
    pub fn resolve_format(&self, content: &str) -> Option<TimestampFormat> {
        self.config
            .timestamp_format
            .or_else(|| TimestampFormat::detect(content, self.config.detect_sample))
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, or under the same
    /// conditions as [`parse_str`](Self::parse_str).
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ParsedMessage>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses export content into records.
    ///
    /// Content with no recognizable timestamp yields an empty Vec. Text
    /// before the first timestamp (export preamble) is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::InvalidTimestamp`] when a prefix matches
    /// the timestamp pattern but is not a real date/time. The whole parse
    /// fails; no partial record set is returned.
    pub fn parse_str(&self, content: &str) -> Result<Vec<ParsedMessage>> {
        let Some(format) = self.resolve_format(content) else {
            return Ok(vec![]);
        };

        let timestamp_regex =
            Regex::new(format.pattern()).map_err(|e| ChatscopeError::pattern(e.to_string()))?;
        let author_regex =
            Regex::new(AUTHOR_PATTERN).map_err(|e| ChatscopeError::pattern(e.to_string()))?;

        let entries = split_with_regex(content, &timestamp_regex);
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            let naive = format.parse_timestamp(&entry.timestamp).ok_or_else(|| {
                ChatscopeError::invalid_timestamp(entry.timestamp.clone(), format.layout_hint())
            })?;
            let date = naive.and_utc();

            let (user, message, sentiment) = match classify(&entry.body, &author_regex) {
                Some((user, message)) => {
                    let sentiment = self.scorer.classify(&message);
                    (user, message, sentiment)
                }
                None => (GROUP_NOTIFICATION.to_string(), entry.body, Sentiment::Neutral),
            };

            records.push(ParsedMessage::from_parts(user, message, sentiment, date));
        }

        Ok(records)
    }

    /// Splits export content into raw `(timestamp, body)` entries without
    /// classifying or date-parsing them.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::Pattern`] when the timestamp regex fails
    /// to build.
    pub fn split_entries(&self, content: &str) -> Result<Vec<RawEntry>> {
        let Some(format) = self.resolve_format(content) else {
            return Ok(vec![]);
        };
        let timestamp_regex =
            Regex::new(format.pattern()).map_err(|e| ChatscopeError::pattern(e.to_string()))?;
        Ok(split_with_regex(content, &timestamp_regex))
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Cuts content into entries at every timestamp match. Each body runs from
/// the end of its timestamp to the start of the next one (or end of input),
/// with trailing newlines stripped.
fn split_with_regex(content: &str, timestamp: &Regex) -> Vec<RawEntry> {
    let matches: Vec<_> = timestamp.find_iter(content).collect();
    let mut entries = Vec::with_capacity(matches.len());

    for (i, m) in matches.iter().enumerate() {
        let body_end = matches.get(i + 1).map_or(content.len(), |next| next.start());
        let body = content[m.end()..body_end].trim_end_matches(['\n', '\r']);

        entries.push(RawEntry {
            timestamp: m.as_str().to_string(),
            body: body.to_string(),
        });
    }

    entries
}

/// Splits a body into `(author, message)` at the first colon followed by
/// whitespace. Returns `None` for bodies without one (group notifications).
fn classify(body: &str, author: &Regex) -> Option<(String, String)> {
    let caps = author.captures(body)?;
    let user = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let message = caps.get(2).map_or("", |m| m.as_str()).to_string();
    Some((user, message))
}

//! Aggregate report summary for export.
//!
//! [`ReportSummary`] bundles the top-line numbers a downstream dashboard or
//! PDF layer needs, as plain values with no formatting logic.

use serde::{Deserialize, Serialize};

use crate::record::ParsedMessage;
use crate::stats::{Overview, SentimentTally, emoji_counts, overview, sentiment_counts};

/// Aggregate numbers for one chat (or one user's slice of it).
///
/// # Example
///
/// ```rust
/// use chatscope::parser::ChatParser;
/// use chatscope::report::ReportSummary;
///
/// let records = ChatParser::new()
///     .parse_str("1/2/23, 10:15 - Alice: party 🎉\n")?;
///
/// let summary = ReportSummary::build(&records, None, 10);
/// assert_eq!(summary.overview.messages, 1);
/// assert_eq!(summary.top_emojis[0].0, "🎉");
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// The user the numbers are restricted to; `None` means the whole chat.
    pub user: Option<String>,
    /// Message/word/media/link totals.
    pub overview: Overview,
    /// Sentiment label tally.
    pub sentiment: SentimentTally,
    /// Emoji tallies, most used first.
    pub top_emojis: Vec<(String, usize)>,
}

impl ReportSummary {
    /// Builds the summary, keeping the `top` most used emoji.
    pub fn build(records: &[ParsedMessage], user: Option<&str>, top: usize) -> Self {
        Self {
            user: user.map(String::from),
            overview: overview(records, user),
            sentiment: sentiment_counts(records, user),
            top_emojis: emoji_counts(records, user, top),
        }
    }

    /// Serializes the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::Json`](crate::ChatscopeError::Json) when
    /// serialization fails.
    #[cfg(feature = "json-output")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

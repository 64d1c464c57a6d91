//! Descriptive statistics over parsed records.
//!
//! Every collector takes the full record slice plus an optional user
//! filter; `None` means the whole chat, `Some(name)` restricts the numbers
//! to that author's records (exact match). Collectors never mutate or
//! consume the records, so one parse can feed any number of them.
//!
//! | Collector | Module | Output |
//! |-----------|--------|--------|
//! | [`overview`] | [`mod@overview`] | message/word/media/link totals |
//! | [`monthly_timeline`], [`daily_timeline`] | [`mod@timeline`] | chronological counts |
//! | [`week_activity`], [`month_activity`], [`activity_heatmap`] | [`mod@activity`] | busiest days, months, weekday-by-hour grid |
//! | [`busiest_users`] | [`mod@users`] | per-author counts with share |
//! | [`most_common_words`] | [`mod@words`] | stop-word-filtered top words |
//! | [`emoji_counts`] | [`mod@emoji`] | per-emoji tallies |
//! | [`sentiment_counts`], [`sentiment_by_user`] | [`mod@sentiment`] | label tallies |
//!
//! # Example
//!
//! ```rust
//! use chatscope::parser::ChatParser;
//! use chatscope::stats;
//!
//! let records = ChatParser::new()
//!     .parse_str("1/2/23, 10:15 - Alice: hello world\n1/2/23, 10:16 - Bob: hi\n")?;
//!
//! let all = stats::overview(&records, None);
//! assert_eq!(all.messages, 2);
//!
//! let alice = stats::overview(&records, Some("Alice"));
//! assert_eq!(alice.messages, 1);
//! assert_eq!(alice.words, 2);
//! # Ok::<(), chatscope::ChatscopeError>(())
//! ```

pub mod activity;
pub mod emoji;
pub mod overview;
pub mod sentiment;
pub mod timeline;
pub mod users;
pub mod words;

pub use activity::{ActivityGrid, activity_heatmap, month_activity, week_activity};
pub use emoji::emoji_counts;
pub use overview::{Overview, overview};
pub use sentiment::{SentimentTally, sentiment_by_user, sentiment_counts};
pub use timeline::{DayBucket, MonthBucket, daily_timeline, monthly_timeline};
pub use users::{UserActivity, busiest_users};
pub use words::most_common_words;

use crate::record::ParsedMessage;

/// Applies the optional user filter, borrowing the matching records.
pub(crate) fn select<'a>(
    records: &'a [ParsedMessage],
    user: Option<&str>,
) -> Vec<&'a ParsedMessage> {
    match user {
        Some(name) => records.iter().filter(|r| r.user == name).collect(),
        None => records.iter().collect(),
    }
}

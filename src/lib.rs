//! # Chatscope
//!
//! A Rust library for parsing WhatsApp chat exports into typed records and
//! computing descriptive statistics over them.
//!
//! ## Overview
//!
//! WhatsApp's "Export chat" feature produces a plain text file whose
//! timestamp layout depends on the phone's locale. Chatscope detects that
//! layout (or takes a pinned one), splits the file into entries including
//! multi-line messages, separates real messages from system notifications,
//! scores each message with a lexicon-based sentiment pass, and derives the
//! calendar fields that the statistics layer aggregates over.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatscope::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = ChatParser::new().parse_file("chat.txt")?;
//!
//!     let totals = overview(&records, None);
//!     println!("{} messages, {} words", totals.messages, totals.words);
//!
//!     for entry in busiest_users(&records, 5) {
//!         println!("{}: {} messages ({}%)", entry.user, entry.count, entry.share);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — Export parsing
//!   - [`ChatParser`](parser::ChatParser) — splits, classifies, and scores entries
//! - [`config`] — [`ParserConfig`](config::ParserConfig) and [`TimestampFormat`](config::TimestampFormat)
//! - [`record`] — [`ParsedMessage`], [`Sentiment`], sentinel constants
//! - [`sentiment`] — [`SentimentScorer`](sentiment::SentimentScorer) lexicon scoring
//! - [`stats`] — Aggregations ([`overview`](stats::overview), [`busiest_users`](stats::busiest_users), ...)
//! - [`report`] — [`ReportSummary`](report::ReportSummary) for JSON summaries
//! - [`format`] — [`OutputFormat`](format::OutputFormat) and writer dispatch
//! - [`output`] — CSV / JSON / JSONL writers (feature-gated)
//! - [`cli`] — clap argument types (behind the `cli` feature)
//! - [`error`] — Unified error types ([`ChatscopeError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod record;
pub mod report;
pub mod sentiment;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use config::{ParserConfig, TimestampFormat};
pub use error::{ChatscopeError, Result};
pub use parser::ChatParser;
pub use record::{GROUP_NOTIFICATION, MEDIA_OMITTED, ParsedMessage, RawEntry, Sentiment};
pub use sentiment::SentimentScorer;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscope::prelude::*;
/// ```
pub mod prelude {
    // Core record types
    pub use crate::record::{GROUP_NOTIFICATION, MEDIA_OMITTED, ParsedMessage, Sentiment};

    // Error types
    pub use crate::error::{ChatscopeError, Result};

    // Parsing
    pub use crate::config::{ParserConfig, TimestampFormat};
    pub use crate::parser::ChatParser;
    pub use crate::sentiment::SentimentScorer;

    // Statistics
    pub use crate::stats::{
        ActivityGrid, DayBucket, MonthBucket, Overview, SentimentTally, UserActivity,
        activity_heatmap, busiest_users, daily_timeline, emoji_counts, month_activity,
        monthly_timeline, most_common_words, overview, sentiment_by_user, sentiment_counts,
        week_activity,
    };

    // Summary report
    pub use crate::report::ReportSummary;

    // Output format dispatch
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    // Writers (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};

    // CLI types
    #[cfg(feature = "cli")]
    pub use crate::cli::Args;
}

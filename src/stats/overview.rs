//! Top-line totals: messages, words, media, links.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::ParsedMessage;
use crate::stats::select;

/// Matches `http://`, `https://`, and bare `www.` URLs.
const LINK_PATTERN: &str = r"(?i)\b(?:https?://|www\.)\S+";

static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn link_regex() -> &'static Regex {
    LINK_REGEX.get_or_init(|| Regex::new(LINK_PATTERN).unwrap())
}

/// Top-line chat totals.
///
/// `words` counts whitespace-separated tokens across every selected record,
/// notifications included. `media` counts exact `<Media omitted>` records.
/// `links` counts URL occurrences, so one message can contribute several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overview {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-separated token count over all record bodies.
    pub words: usize,
    /// Number of media placeholder records.
    pub media: usize,
    /// Number of URL occurrences.
    pub links: usize,
}

/// Computes the top-line totals, optionally for one user.
///
/// # Example
///
/// ```rust
/// use chatscope::parser::ChatParser;
/// use chatscope::stats::overview;
///
/// let records = ChatParser::new()
///     .parse_str("1/2/23, 10:15 - Alice: see https://example.com\n")?;
///
/// let totals = overview(&records, None);
/// assert_eq!(totals.messages, 1);
/// assert_eq!(totals.words, 2);
/// assert_eq!(totals.links, 1);
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn overview(records: &[ParsedMessage], user: Option<&str>) -> Overview {
    let selected = select(records, user);
    let links_re = link_regex();

    let mut totals = Overview {
        messages: selected.len(),
        ..Overview::default()
    };

    for record in selected {
        totals.words += record.message.split_whitespace().count();
        totals.links += links_re.find_iter(&record.message).count();
        if record.is_media() {
            totals.media += 1;
        }
    }

    totals
}

//! Most common words, stop-word filtered.

use std::collections::{HashMap, HashSet};

use crate::record::ParsedMessage;
use crate::stats::select;

/// Common English words excluded from the ranking.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "get", "got", "had",
    "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in",
    "into", "is", "it", "its", "just", "like", "me", "more", "most", "my", "no", "not", "now",
    "of", "off", "ok", "okay", "on", "once", "only", "or", "other", "our", "out", "over", "own",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "u", "under", "until", "up", "ur",
    "us", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "ya", "yeah", "yes", "you", "your", "yours",
];

/// Ranks the most frequent words, keeping the top `top`.
///
/// Tokens are lowercased whitespace splits, punctuation untouched, so
/// `"hello!"` and `"hello"` count separately. Group notifications, media
/// placeholders, and stop words are skipped. Equal counts order by word.
pub fn most_common_words(
    records: &[ParsedMessage],
    user: Option<&str>,
    top: usize,
) -> Vec<(String, usize)> {
    let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in select(records, user) {
        if record.is_notification() || record.is_media() {
            continue;
        }
        for token in record.message.to_lowercase().split_whitespace() {
            if stop_words.contains(token) {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(top);
    sorted
}

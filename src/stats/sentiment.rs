//! Sentiment label tallies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{ParsedMessage, Sentiment};
use crate::stats::select;

/// Count of records per sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentTally {
    /// Records labeled Positive.
    pub positive: usize,
    /// Records labeled Negative.
    pub negative: usize,
    /// Records labeled Neutral, including every notification.
    pub neutral: usize,
}

impl SentimentTally {
    /// Returns the total across all three labels.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Returns the count for one label.
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Tallies sentiment labels, optionally for one user.
pub fn sentiment_counts(records: &[ParsedMessage], user: Option<&str>) -> SentimentTally {
    let mut tally = SentimentTally::default();

    for record in select(records, user) {
        match record.sentiment {
            Sentiment::Positive => tally.positive += 1,
            Sentiment::Negative => tally.negative += 1,
            Sentiment::Neutral => tally.neutral += 1,
        }
    }

    tally
}

/// Ranks authors by how many of their records carry the given label,
/// most first. Authors with none do not appear; equal counts order by
/// name.
pub fn sentiment_by_user(records: &[ParsedMessage], sentiment: Sentiment) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if record.sentiment == sentiment {
            *counts.entry(record.user.as_str()).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<_> = counts
        .into_iter()
        .map(|(user, count)| (user.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

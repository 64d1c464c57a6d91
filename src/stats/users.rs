//! Per-author activity ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::ParsedMessage;

/// One author's share of the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    /// Author name (the `group_notification` sentinel ranks like any
    /// other author).
    pub user: String,
    /// Records by this author.
    pub count: usize,
    /// Percentage of all records, rounded to 2 decimals.
    pub share: f64,
}

/// Ranks authors by record count, busiest first, keeping the top `top`.
///
/// Shares are percentages of the whole record set, so the returned slice's
/// shares do not sum to 100 when authors are cut off. Equal counts order
/// by name.
pub fn busiest_users(records: &[ParsedMessage], top: usize) -> Vec<UserActivity> {
    let total = records.len();
    if total == 0 {
        return vec![];
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.user.as_str()).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted.truncate(top);

    sorted
        .into_iter()
        .map(|(user, count)| UserActivity {
            user: user.to_string(),
            count,
            share: round2(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

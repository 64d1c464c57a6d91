//! Per-emoji usage tallies.

use std::collections::HashMap;

use crate::record::ParsedMessage;
use crate::stats::select;

/// Ranks emoji by occurrence count, keeping the top `top`.
///
/// Counting is per Unicode scalar: every character that is an emoji by
/// itself counts once per occurrence. Multi-codepoint sequences (ZWJ
/// families, flag pairs) therefore tally as their visible components
/// rather than as one glyph. Equal counts order by the emoji's scalar
/// value.
pub fn emoji_counts(
    records: &[ParsedMessage],
    user: Option<&str>,
    top: usize,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut buf = [0u8; 4];

    for record in select(records, user) {
        for ch in record.message.chars() {
            if emojis::get(ch.encode_utf8(&mut buf)).is_some() {
                *counts.entry(ch.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(top);
    sorted
}

//! Busiest days, months, and the weekday-by-hour heatmap.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{ParsedMessage, period_label};
use crate::stats::select;

/// Weekday row order for the heatmap.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Counts records per weekday name, busiest first.
///
/// Days with no records do not appear. Equal counts are ordered by name so
/// the output is stable.
pub fn week_activity(records: &[ParsedMessage], user: Option<&str>) -> Vec<(String, usize)> {
    value_counts(select(records, user).iter().map(|r| r.day_name.clone()))
}

/// Counts records per month name, busiest first.
///
/// Months with no records do not appear; all years pool together (January
/// 2022 and January 2023 are one bucket).
pub fn month_activity(records: &[ParsedMessage], user: Option<&str>) -> Vec<(String, usize)> {
    value_counts(select(records, user).iter().map(|r| r.month.clone()))
}

fn value_counts(values: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Fixed 7x24 weekday-by-hour activity grid.
///
/// Rows are always Monday through Sunday and columns are always the 24
/// hour-bucket labels in hour order, regardless of which slots have
/// records. Empty slots hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityGrid {
    /// Column labels: the 24 period labels from `"00-1"` to `"23-00"`.
    pub periods: Vec<String>,
    /// One `(weekday, counts)` row per weekday, Monday first. Each counts
    /// vector is parallel to `periods`.
    pub rows: Vec<(String, Vec<usize>)>,
}

impl ActivityGrid {
    /// Returns the busiest `(weekday, period, count)` slot, or `None` when
    /// the grid is empty. Ties resolve to the earliest slot in row order.
    pub fn busiest_slot(&self) -> Option<(&str, &str, usize)> {
        let mut best: Option<(&str, &str, usize)> = None;

        for (day, counts) in &self.rows {
            for (hour, &count) in counts.iter().enumerate() {
                if count > best.map_or(0, |(_, _, c)| c) {
                    best = Some((day, &self.periods[hour], count));
                }
            }
        }

        best
    }

    /// Returns the sum over all slots.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, counts)| counts.iter().sum::<usize>()).sum()
    }
}

/// Builds the weekday-by-hour heatmap grid.
pub fn activity_heatmap(records: &[ParsedMessage], user: Option<&str>) -> ActivityGrid {
    let periods: Vec<String> = (0..24).map(period_label).collect();
    let mut rows: Vec<(String, Vec<usize>)> = WEEKDAYS
        .iter()
        .map(|day| ((*day).to_string(), vec![0usize; 24]))
        .collect();

    for record in select(records, user) {
        if let Some(row) = WEEKDAYS.iter().position(|day| *day == record.day_name) {
            rows[row].1[record.hour as usize] += 1;
        }
    }

    ActivityGrid { periods, rows }
}

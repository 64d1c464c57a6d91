//! Chronological message-count timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::ParsedMessage;
use crate::stats::select;

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Year of the bucket.
    pub year: i32,
    /// Month number, 1-12.
    pub month_num: u32,
    /// English month name.
    pub month: String,
    /// Records in this month.
    pub count: usize,
}

impl MonthBucket {
    /// Returns the axis label, e.g. `"January-2023"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.month, self.year)
    }
}

/// Message count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// The day.
    pub date: NaiveDate,
    /// Records on this day.
    pub count: usize,
}

/// Counts records per calendar month, in chronological order.
///
/// Months with no records do not appear.
pub fn monthly_timeline(records: &[ParsedMessage], user: Option<&str>) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();

    for record in select(records, user) {
        let entry = buckets
            .entry((record.year, record.month_num))
            .or_insert_with(|| (record.month.clone(), 0));
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month_num), (month, count))| MonthBucket {
            year,
            month_num,
            month,
            count,
        })
        .collect()
}

/// Counts records per calendar day, in chronological order.
///
/// Days with no records do not appear.
pub fn daily_timeline(records: &[ParsedMessage], user: Option<&str>) -> Vec<DayBucket> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in select(records, user) {
        *buckets.entry(record.only_date).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DayBucket { date, count })
        .collect()
}

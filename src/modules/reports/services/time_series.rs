// Day-bucketing helpers shared by every report builder.
//
// Records group by the calendar-day portion of their timestamp (UTC); the
// time-of-day component is discarded. Records whose timestamp accessor yields
// `None` are skipped silently. Days with no qualifying record are absent from
// the map rather than present with zero.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::modules::reports::models::{DailyAmounts, DailyCounts};

/// "YYYY-MM-DD" bucket key for a timestamp
pub fn day_key(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Count records per calendar day
pub fn count_by_day<T, F>(rows: &[T], timestamp: F) -> DailyCounts
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    let mut buckets = BTreeMap::new();
    for row in rows {
        if let Some(ts) = timestamp(row) {
            *buckets.entry(day_key(ts)).or_insert(0) += 1;
        }
    }
    buckets
}

/// Accumulate an amount per calendar day
///
/// The amount accessor is expected to already apply the zero-on-malformed
/// coercion policy, so a present record always contributes (possibly zero).
pub fn sum_by_day<T, F, A>(rows: &[T], timestamp: F, amount: A) -> DailyAmounts
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
    A: Fn(&T) -> Decimal,
{
    let mut buckets = BTreeMap::new();
    for row in rows {
        if let Some(ts) = timestamp(row) {
            *buckets.entry(day_key(ts)).or_insert(Decimal::ZERO) += amount(row);
        }
    }
    buckets
}

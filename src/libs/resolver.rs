//! Centralized duration and effective-date resolution.
//!
//! Every screen and report derives elapsed time and calendar placement from
//! the same two precedence chains defined here. Dashboard highlights, entry
//! lists, and aggregation all call these functions, so their totals can
//! never drift apart.

use crate::libs::entry::TimeEntry;
use chrono::{DateTime, NaiveDate, Utc};

/// Resolves an entry's elapsed time in seconds.
///
/// Precedence, first applicable rule wins:
///
/// 1. An explicit `duration_minutes` value, converted to seconds.
/// 2. A `start_time`/`end_time` pair; a negative span is malformed data and
///    is clamped to zero rather than propagated.
/// 3. A `start_time` alone (timer still running): elapsed up to `now`, when
///    the caller supplies a live instant. Closed-period reports pass `None`
///    and such entries contribute zero.
/// 4. Zero.
///
/// The result is never negative.
pub fn resolve_duration_seconds(entry: &TimeEntry, now: Option<DateTime<Utc>>) -> i64 {
    if let Some(minutes) = entry.duration_minutes {
        return (minutes * 60.0).round() as i64;
    }
    match (entry.start_time, entry.end_time) {
        (Some(start), Some(end)) => (end - start).num_seconds().max(0),
        (Some(start), None) => now.map(|n| (n - start).num_seconds().max(0)).unwrap_or(0),
        _ => 0,
    }
}

/// Resolves the date used to place an entry within a calendar bucket or
/// range filter.
///
/// Precedence: the user-declared `date`, else the calendar date of
/// `start_time`, else the calendar date of `created_at`. Total, since
/// `created_at` is always present.
pub fn resolve_effective_date(entry: &TimeEntry) -> NaiveDate {
    entry
        .date
        .or_else(|| entry.start_time.map(|t| t.date_naive()))
        .unwrap_or_else(|| entry.created_at.date_naive())
}

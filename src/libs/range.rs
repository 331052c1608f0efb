//! Calendar windows and period bucketing.
//!
//! Defines the named date ranges the report screens offer (today, this
//! week, this month, last month, this quarter) and the period labels used
//! for summary bucketing. Weeks start on Monday, always - this overrides
//! the "week starts Sunday" convention on purpose and must not follow the
//! host locale.
//!
//! All window computations take the reference instant as an explicit
//! argument, never read the wall clock, so the same input always produces
//! the same range.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar date range; a `None` bound means unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Membership at day granularity: `from` covers from the start of its
    /// day, `to` covers the entire day, so both bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.from {
            Some(from) => in_range(date, from, self.to),
            None => self.to.map(|to| date <= to).unwrap_or(true),
        }
    }
}

/// Inclusive range test: a date equal to `start` or `end` is inside.
/// When `end` is omitted the range is open-ended forward.
pub fn in_range(date: NaiveDate, start: NaiveDate, end: Option<NaiveDate>) -> bool {
    match end {
        Some(end) => date >= start && date <= end,
        None => date >= start,
    }
}

/// The single day containing `now`.
pub fn today(now: DateTime<Utc>) -> DateRange {
    let d = now.date_naive();
    DateRange::new(Some(d), Some(d))
}

/// Monday through Sunday of the week containing `now`.
pub fn this_week(now: DateTime<Utc>) -> DateRange {
    let d = now.date_naive();
    let monday = d - Duration::days(d.weekday().num_days_from_monday() as i64);
    DateRange::new(Some(monday), Some(monday + Duration::days(6)))
}

/// First through last day of the month containing `now`.
pub fn this_month(now: DateTime<Utc>) -> DateRange {
    let d = now.date_naive();
    let first = d.with_day(1).unwrap_or(d);
    DateRange::new(Some(first), Some(end_of_month(first)))
}

/// First through last day of the month before the one containing `now`.
pub fn last_month(now: DateTime<Utc>) -> DateRange {
    let d = now.date_naive();
    let first_of_current = d.with_day(1).unwrap_or(d);
    let last_of_previous = first_of_current - Duration::days(1);
    let first = last_of_previous.with_day(1).unwrap_or(last_of_previous);
    DateRange::new(Some(first), Some(last_of_previous))
}

/// First through last day of the quarter containing `now`.
pub fn this_quarter(now: DateTime<Utc>) -> DateRange {
    let d = now.date_naive();
    let start_month = (d.month0() / 3) * 3 + 1;
    let first = d
        .with_day(1)
        .and_then(|x| x.with_month(start_month))
        .unwrap_or(d);
    let last = first
        .with_month(start_month + 2)
        .map(end_of_month)
        .unwrap_or(first);
    DateRange::new(Some(first), Some(last))
}

fn end_of_month(first: NaiveDate) -> NaiveDate {
    let next = if first.month() == 12 {
        first
            .with_year(first.year() + 1)
            .and_then(|d| d.with_month(1))
    } else {
        first.with_month(first.month() + 1)
    };
    next.map(|d| d - Duration::days(1)).unwrap_or(first)
}

/// ISO week label, e.g. `2024-W02`. Uses the ISO week-numbering year so the
/// label stays sortable across year boundaries.
pub fn week_label(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Calendar month label, e.g. `2024-01`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Quarter label, e.g. `2024-Q1`.
pub fn quarter_label(date: NaiveDate) -> String {
    format!("{}-Q{}", date.year(), date.month0() / 3 + 1)
}

/// Granularity for period summaries, independent of the primary grouping
/// dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Quarter,
}

impl Period {
    /// The zero-padded, lexicographically sortable bucket label for `date`.
    pub fn label(&self, date: NaiveDate) -> String {
        match self {
            Period::Week => week_label(date),
            Period::Month => month_label(date),
            Period::Quarter => quarter_label(date),
        }
    }
}

/// Named calendar windows selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum NamedRange {
    Today,
    Week,
    Month,
    LastMonth,
    Quarter,
}

impl NamedRange {
    pub fn resolve(self, now: DateTime<Utc>) -> DateRange {
        match self {
            NamedRange::Today => today(now),
            NamedRange::Week => this_week(now),
            NamedRange::Month => this_month(now),
            NamedRange::LastMonth => last_month(now),
            NamedRange::Quarter => this_quarter(now),
        }
    }
}

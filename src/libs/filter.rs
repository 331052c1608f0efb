//! Report filter configuration and the entry filtering pass.
//!
//! The filter is a single explicit struct with named, typed options rather
//! than an ad hoc bag of optional fields: date range, customer, billable
//! flag, and grouping dimension. Predicates are applied in that order, each
//! on the entry's effective date as resolved by
//! [`crate::libs::resolver::resolve_effective_date`], so filtering and
//! bucketing always agree on where an entry falls.

use crate::libs::entry::TimeEntry;
use crate::libs::range::DateRange;
use crate::libs::resolver::resolve_effective_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for inputs the core considers truly invalid.
///
/// A reversed range is reported here for callers that validate up front;
/// [`filter_entries`] itself tolerates it and simply matches nothing, since
/// the inclusive range test can never hold.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid date range: {from} is after {to}")]
    ReversedDateRange { from: NaiveDate, to: NaiveDate },
}

/// The primary grouping dimension of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Customer,
    Task,
    Day,
}

/// Filter and grouping configuration for one report request.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Effective-date window; unbounded sides admit everything.
    pub date_range: DateRange,
    /// When set, only entries assigned to this customer id.
    pub customer_id: Option<String>,
    /// When set, only billable entries.
    pub billable_only: bool,
    /// Dimension the primary report groups by.
    pub group_by: GroupBy,
}

impl ReportFilter {
    /// Rejects a range whose lower bound lies after its upper bound.
    pub fn validate(&self) -> Result<(), ReportError> {
        if let (Some(from), Some(to)) = (self.date_range.from, self.date_range.to) {
            if from > to {
                return Err(ReportError::ReversedDateRange { from, to });
            }
        }
        Ok(())
    }
}

/// Applies the filter's predicates to a snapshot of entries.
///
/// Entries missing a field only fail to match when a predicate actually
/// needs it; an inactive filter never rejects anything.
pub fn filter_entries(entries: &[TimeEntry], filter: &ReportFilter) -> Vec<TimeEntry> {
    entries
        .iter()
        .filter(|entry| {
            let date = resolve_effective_date(entry);
            if let Some(from) = filter.date_range.from {
                if date < from {
                    return false;
                }
            }
            if let Some(to) = filter.date_range.to {
                if date > to {
                    return false;
                }
            }
            if let Some(customer_id) = &filter.customer_id {
                if entry.customer_id.as_deref() != Some(customer_id.as_str()) {
                    return false;
                }
            }
            if filter.billable_only && !entry.billable {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

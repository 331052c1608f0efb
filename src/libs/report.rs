//! Report assembly: filter, aggregate, format.
//!
//! [`Report::build`] is the one entry point the screens and exporters call.
//! It runs the filter pass, the three reduction passes, and the final
//! formatting step, and returns plain serializable rows that downstream
//! consumers (tables, CSV, Excel, charts) can render without reaching back
//! into raw entries.

use crate::libs::aggregate::{client_totals, group_totals, period_totals};
use crate::libs::entry::Dataset;
use crate::libs::filter::{filter_entries, ReportFilter};
use crate::libs::formatter::{billable_percentage, round_hours, TABLE_DECIMALS};
use crate::libs::range::Period;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the primary grouped report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub group_key: String,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub total_seconds: i64,
}

/// Aggregate totals for one calendar bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub period_label: String,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub billable_percentage: u8,
}

/// Per-client totals and billing amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub customer_id: String,
    pub customer_name: String,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub billable_amount: f64,
}

/// A complete computed report: grouped rows, period summaries, and the
/// client overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub periods: Vec<PeriodSummary>,
    pub clients: Vec<ClientSummary>,
}

impl Report {
    /// Computes a report from a dataset snapshot.
    ///
    /// `now` enables elapsed-so-far durations for still-running entries;
    /// closed-period reports pass `None` and running entries count as zero.
    /// Passing the instant in explicitly keeps the whole computation
    /// deterministic for a fixed input.
    ///
    /// The client overview is a global view: it always covers the full
    /// entry set, not the filtered one, no matter which customer or date
    /// filter is active elsewhere.
    pub fn build(dataset: &Dataset, filter: &ReportFilter, period: Period, now: Option<DateTime<Utc>>) -> Report {
        let filtered = filter_entries(&dataset.entries, filter);

        let rows = group_totals(&filtered, filter.group_by, &dataset.customers, &dataset.tasks, now)
            .into_iter()
            .map(|g| ReportRow {
                group_key: g.key,
                total_hours: round_hours(g.total_seconds, TABLE_DECIMALS),
                billable_hours: round_hours(g.billable_seconds, TABLE_DECIMALS),
                non_billable_hours: round_hours(g.non_billable_seconds, TABLE_DECIMALS),
                total_seconds: g.total_seconds,
            })
            .collect();

        let periods = period_totals(&filtered, period, now)
            .into_iter()
            .map(|p| PeriodSummary {
                period_label: p.label,
                total_hours: round_hours(p.total_seconds, TABLE_DECIMALS),
                billable_hours: round_hours(p.billable_seconds, TABLE_DECIMALS),
                non_billable_hours: round_hours(p.non_billable_seconds, TABLE_DECIMALS),
                billable_percentage: billable_percentage(p.billable_seconds, p.total_seconds),
            })
            .collect();

        let clients = client_totals(&dataset.entries, &dataset.customers, now)
            .into_iter()
            .map(|c| ClientSummary {
                customer_id: c.customer_id,
                customer_name: c.customer_name,
                total_hours: round_hours(c.total_seconds, TABLE_DECIMALS),
                billable_hours: round_hours(c.billable_seconds, TABLE_DECIMALS),
                non_billable_hours: round_hours(c.non_billable_seconds, TABLE_DECIMALS),
                billable_amount: c.billable_amount,
            })
            .collect();

        Report { rows, periods, clients }
    }

    /// Sum of raw seconds across the grouped rows, for headline totals.
    pub fn total_seconds(&self) -> i64 {
        self.rows.iter().map(|r| r.total_seconds).sum()
    }
}

//! The three reduction passes behind every report.
//!
//! Each pass builds a fresh accumulator map per call, reduces the given
//! entries into per-group second totals, and returns a sorted vector. None
//! of them mutate the input or share state between calls, and all of them
//! derive elapsed time through [`resolve_duration_seconds`] so their totals
//! agree with every other screen.
//!
//! Sort orders are part of the contract:
//!
//! - customer/task grouping is a ranking: descending by total seconds, with
//!   a deterministic key tie-break;
//! - day grouping is a timeline: ascending chronologically;
//! - period summaries ascend by their zero-padded labels;
//! - client summaries descend by total hours.

use crate::libs::entry::{Customer, Task, TimeEntry};
use crate::libs::filter::GroupBy;
use crate::libs::range::Period;
use crate::libs::resolver::{resolve_duration_seconds, resolve_effective_date};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Group label for entries without a resolvable customer.
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";
/// Group label for entries without a resolvable task.
pub const UNKNOWN_TASK: &str = "Unknown Task";

/// Format of the group key when grouping by day.
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default)]
struct SecondsAccum {
    total: i64,
    billable: i64,
    non_billable: i64,
}

impl SecondsAccum {
    fn add(&mut self, entry: &TimeEntry, now: Option<DateTime<Utc>>) {
        let seconds = resolve_duration_seconds(entry, now);
        self.total += seconds;
        if entry.billable {
            self.billable += seconds;
        } else {
            self.non_billable += seconds;
        }
    }
}

/// Raw second totals for one value of the grouping dimension.
#[derive(Debug, Clone)]
pub struct GroupTotals {
    pub key: String,
    pub total_seconds: i64,
    pub billable_seconds: i64,
    pub non_billable_seconds: i64,
}

/// Raw second totals for one calendar period bucket.
#[derive(Debug, Clone)]
pub struct PeriodTotals {
    pub label: String,
    pub total_seconds: i64,
    pub billable_seconds: i64,
    pub non_billable_seconds: i64,
}

/// Raw totals and billing amount for one customer.
#[derive(Debug, Clone)]
pub struct ClientTotals {
    pub customer_id: String,
    pub customer_name: String,
    pub total_seconds: i64,
    pub billable_seconds: i64,
    pub non_billable_seconds: i64,
    pub billable_amount: f64,
}

/// Groups entries by the chosen dimension and reduces each group to
/// total/billable/non-billable seconds.
///
/// Entries without a customer or task land under the sentinel labels so
/// every entry stays accounted for. Day keys use `yyyy-MM-dd`, which makes
/// the chronological sort a plain string sort.
pub fn group_totals(
    entries: &[TimeEntry],
    group_by: GroupBy,
    customers: &[Customer],
    tasks: &[Task],
    now: Option<DateTime<Utc>>,
) -> Vec<GroupTotals> {
    let customer_names: HashMap<&str, &str> = customers.iter().map(|c| (c.id.as_str(), c.name.as_str())).collect();
    let task_names: HashMap<&str, &str> = tasks.iter().map(|t| (t.id.as_str(), t.name.as_str())).collect();

    let mut groups: HashMap<String, SecondsAccum> = HashMap::new();
    for entry in entries {
        let key = match group_by {
            GroupBy::Customer => entry
                .customer_id
                .as_deref()
                .and_then(|id| customer_names.get(id).copied())
                .unwrap_or(UNKNOWN_CUSTOMER)
                .to_string(),
            GroupBy::Task => entry
                .task_id
                .as_deref()
                .and_then(|id| task_names.get(id).copied())
                .unwrap_or(UNKNOWN_TASK)
                .to_string(),
            GroupBy::Day => resolve_effective_date(entry).format(DAY_KEY_FORMAT).to_string(),
        };
        groups.entry(key).or_default().add(entry, now);
    }

    let mut rows: Vec<GroupTotals> = groups
        .into_iter()
        .map(|(key, acc)| GroupTotals {
            key,
            total_seconds: acc.total,
            billable_seconds: acc.billable,
            non_billable_seconds: acc.non_billable,
        })
        .collect();

    match group_by {
        // A day report reads as a timeline, not a ranking.
        GroupBy::Day => rows.sort_by(|a, b| a.key.cmp(&b.key)),
        _ => rows.sort_by(|a, b| b.total_seconds.cmp(&a.total_seconds).then_with(|| a.key.cmp(&b.key))),
    }
    rows
}

/// Buckets entries by calendar period and reduces each bucket to second
/// totals, sorted ascending by label.
pub fn period_totals(entries: &[TimeEntry], period: Period, now: Option<DateTime<Utc>>) -> Vec<PeriodTotals> {
    let mut buckets: HashMap<String, SecondsAccum> = HashMap::new();
    for entry in entries {
        let label = period.label(resolve_effective_date(entry));
        buckets.entry(label).or_default().add(entry, now);
    }

    let mut periods: Vec<PeriodTotals> = buckets
        .into_iter()
        .map(|(label, acc)| PeriodTotals {
            label,
            total_seconds: acc.total,
            billable_seconds: acc.billable,
            non_billable_seconds: acc.non_billable,
        })
        .collect();

    // Labels are zero-padded ISO-like, so lexicographic order is
    // chronological order.
    periods.sort_by(|a, b| a.label.cmp(&b.label));
    periods
}

/// Reduces entries into per-customer totals and billing amounts.
///
/// The billing amount sums `(seconds / 3600) * rate` over billable entries,
/// using each entry's own rate; a missing or zero rate contributes nothing
/// to the amount while its hours still count. Customers with zero total
/// hours are dropped from the result. Entries without a customer have no
/// client to bill and are skipped here; they remain visible in the grouped
/// and day reports.
pub fn client_totals(entries: &[TimeEntry], customers: &[Customer], now: Option<DateTime<Utc>>) -> Vec<ClientTotals> {
    let customer_names: HashMap<&str, &str> = customers.iter().map(|c| (c.id.as_str(), c.name.as_str())).collect();

    #[derive(Default)]
    struct ClientAccum {
        seconds: SecondsAccum,
        amount: f64,
    }

    let mut clients: HashMap<String, ClientAccum> = HashMap::new();
    for entry in entries {
        let Some(customer_id) = entry.customer_id.as_deref() else {
            continue;
        };
        let accum = clients.entry(customer_id.to_string()).or_default();
        accum.seconds.add(entry, now);
        if entry.billable {
            let hours = resolve_duration_seconds(entry, now) as f64 / 3600.0;
            accum.amount += hours * entry.rate.unwrap_or(0.0);
        }
    }

    let mut totals: Vec<ClientTotals> = clients
        .into_iter()
        .filter(|(_, accum)| accum.seconds.total > 0)
        .map(|(customer_id, accum)| {
            let customer_name = customer_names
                .get(customer_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_CUSTOMER)
                .to_string();
            ClientTotals {
                customer_id,
                customer_name,
                total_seconds: accum.seconds.total,
                billable_seconds: accum.seconds.billable,
                non_billable_seconds: accum.seconds.non_billable,
                billable_amount: accum.amount,
            }
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total_seconds
            .cmp(&a.total_seconds)
            .then_with(|| a.customer_name.cmp(&b.customer_name))
    });
    totals
}

//! Domain records consumed by the reporting core.
//!
//! These structures mirror the wire contract of the external store: field
//! names are camelCase JSON, timestamps are timezone-aware instants, and
//! every field that the store may omit is optional. The core never mutates
//! a dataset it is given; every report is computed fresh from a snapshot.
//!
//! ## Duration representations
//!
//! A [`TimeEntry`] can describe its length three ways: an explicit
//! `durationMinutes` value, a `startTime`/`endTime` timestamp pair, or a
//! `startTime` without an end (timer still running). The precedence between
//! them lives in [`crate::libs::resolver`]; nothing else in the crate is
//! allowed to interpret these fields directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single record of time spent, billable or not, optionally associated
/// with a customer and a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// Opaque unique identifier assigned by the store.
    pub id: String,

    /// Reference to a [`Customer`], when the entry is assigned to one.
    #[serde(default)]
    pub customer_id: Option<String>,

    /// Reference to a [`Task`], when the entry is assigned to one.
    #[serde(default)]
    pub task_id: Option<String>,

    /// User-declared work date, without a time component.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Timer start instant.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// Timer stop instant. Absent means the timer is still running.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,

    /// Explicit duration in minutes, independent of the timestamps.
    ///
    /// The store has historically held this as either a JSON number or a
    /// numeric string; malformed or negative values are treated as absent
    /// rather than rejected, so one bad record cannot poison a report.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub duration_minutes: Option<f64>,

    /// Whether the time is billed to the customer. Defaults to true.
    #[serde(default = "default_billable")]
    pub billable: bool,

    /// Hourly rate in currency units, specific to this entry.
    #[serde(default)]
    pub rate: Option<f64>,

    /// Record creation instant. Always present; the fallback date source.
    pub created_at: DateTime<Utc>,
}

/// A customer; `name` is the display key for grouping and billing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

/// A task; `name` is the display key when grouping by task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
}

/// In-memory snapshot of one user's data, as handed over by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

fn default_billable() -> bool {
    true
}

/// Accepts a number or a numeric string; anything else, and any negative
/// value, deserializes to `None`.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|m| m.is_finite() && *m >= 0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|m| m.is_finite() && *m >= 0.0),
        _ => None,
    })
}

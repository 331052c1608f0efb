//! # Worktally - Time Tracking Reports
//!
//! A command-line utility for turning raw time-tracking entries into
//! grouped hour reports, billable/non-billable splits, period summaries,
//! and per-client billing overviews.
//!
//! ## Features
//!
//! - **Duration Resolution**: Consistent elapsed time from explicit durations,
//!   timestamp pairs, or running timers
//! - **Calendar Windows**: Today, Monday-anchored weeks, months, quarters
//! - **Grouped Reports**: Hours by customer, task, or day
//! - **Period Summaries**: Week/month/quarter buckets with billable percentages
//! - **Client Overview**: Per-client totals and billing amounts
//! - **Data Export**: CSV, JSON, and Excel output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktally::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;

//! Core library modules for the worktally application.
//!
//! Serves as the main entry point for all worktally library components.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, dataset loading, messaging
//! - **Time Resolution**: Duration and effective-date precedence chains
//! - **Calendar Windows**: Named date ranges and period bucketing
//! - **Aggregation**: Grouped totals, period summaries, client summaries
//! - **User Interface**: Console rendering, data export, formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktally::libs::filter::ReportFilter;
//! use worktally::libs::range::Period;
//! use worktally::libs::report::Report;
//! use worktally::libs::storage;
//!
//! let dataset = storage::load_dataset("entries.json".as_ref())?;
//! let report = Report::build(&dataset, &ReportFilter::default(), Period::Week, None);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod entry;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod range;
pub mod report;
pub mod resolver;
pub mod storage;
pub mod view;

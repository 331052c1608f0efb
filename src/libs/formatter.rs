//! Numeric formatting for report display.
//!
//! This module is the single authority for converting accumulated seconds
//! into display-ready hours and percentage splits. All aggregation keeps
//! raw seconds; rounding happens exactly once, here, at the presentation
//! step, so intermediate accumulations never compound rounding error.
//!
//! ## Format Specifications
//!
//! - Hours are `seconds / 3600` rounded half-up to a fixed number of
//!   decimals: one decimal for highlight widgets, two for report tables.
//! - Billable percentage is an integer 0-100; a zero total yields 0%
//!   rather than a division error.
//!
//! ## Examples
//!
//! ```rust
//! use worktally::libs::formatter::{billable_percentage, round_hours, TABLE_DECIMALS};
//!
//! assert_eq!(round_hours(5400, TABLE_DECIMALS), 1.5);
//! assert_eq!(billable_percentage(5400, 10800), 50);
//! assert_eq!(billable_percentage(0, 0), 0);
//! ```

/// Decimal places for dashboard highlight widgets.
pub const HIGHLIGHT_DECIMALS: u32 = 1;
/// Decimal places for report tables and exports.
pub const TABLE_DECIMALS: u32 = 2;

/// Converts seconds to hours, rounded half-up to `decimals` places.
///
/// Inputs are never negative (the duration resolver clamps), so
/// half-away-from-zero rounding is half-up here.
pub fn round_hours(seconds: i64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (seconds as f64 / 3600.0 * factor).round() / factor
}

/// Integer percentage of billable time, guarding a zero total.
pub fn billable_percentage(billable_seconds: i64, total_seconds: i64) -> u8 {
    if total_seconds <= 0 {
        return 0;
    }
    let pct = billable_seconds as f64 / total_seconds as f64 * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}

/// Renders an hours value with a fixed number of decimals, e.g. `1.50`.
pub fn format_hours(hours: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, hours)
}

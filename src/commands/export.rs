//! Report export command.
//!
//! Computes a report with the same filter flags the `report` command takes
//! and writes the selected section to CSV, JSON, or Excel. The exported
//! numbers are exactly what the console tables display.

use crate::{
    commands::FilterArgs,
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        filter::GroupBy,
        messages::Message,
        range::Period,
        report::Report,
    },
    msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Report section to export
    #[arg(value_enum, default_value = "rows")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; a timestamped default name is generated
    /// when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,

    #[arg(long, value_enum, help = "Grouping dimension")]
    group_by: Option<GroupBy>,

    #[arg(long, value_enum, help = "Period granularity")]
    period: Option<Period>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let now = Utc::now();
    let config = Config::read()?;
    let dataset = export_args.filter.load_dataset(&config)?;

    let group_by = export_args.group_by.or(config.group_by).unwrap_or_default();
    let period = export_args.period.or(config.period).unwrap_or(Period::Month);
    let filter = export_args.filter.to_filter(group_by, now);
    if let Err(e) = filter.validate() {
        msg_warning!(Message::InvalidDateRange(e.to_string()));
    }

    let report = Report::build(&dataset, &filter, period, None);

    let exporter = Exporter::new(export_args.format, export_args.output);
    exporter.export(&report, export_args.data)
}

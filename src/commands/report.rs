use crate::{
    commands::FilterArgs,
    libs::{
        config::Config,
        filter::GroupBy,
        formatter::{format_hours, round_hours, HIGHLIGHT_DECIMALS},
        messages::Message,
        range::Period,
        report::Report,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    filter: FilterArgs,

    #[arg(long, value_enum, help = "Grouping dimension")]
    group_by: Option<GroupBy>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let now = Utc::now();
    let config = Config::read()?;
    let dataset = report_args.filter.load_dataset(&config)?;

    let group_by = report_args.group_by.or(config.group_by).unwrap_or_default();
    let filter = report_args.filter.to_filter(group_by, now);
    if let Err(e) = filter.validate() {
        // A reversed range is tolerated downstream; it just matches nothing.
        msg_warning!(Message::InvalidDateRange(e.to_string()));
    }

    let report = Report::build(&dataset, &filter, config.period.unwrap_or(Period::Week), None);

    msg_print!(Message::ReportHeader(now.format("%B %-d, %Y").to_string()), true);
    if report.rows.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    View::rows(&report.rows)?;
    let headline = round_hours(report.total_seconds(), HIGHLIGHT_DECIMALS);
    msg_print!(Message::TotalHours(format_hours(headline, HIGHLIGHT_DECIMALS)), true);

    Ok(())
}

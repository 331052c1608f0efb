use crate::{
    commands::FilterArgs,
    libs::{config::Config, filter::GroupBy, messages::Message, range::Period, report::Report, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[command(flatten)]
    filter: FilterArgs,

    #[arg(long, value_enum, help = "Period granularity")]
    period: Option<Period>,
}

pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let now = Utc::now();
    let config = Config::read()?;
    let dataset = sum_args.filter.load_dataset(&config)?;

    let period = sum_args.period.or(config.period).unwrap_or(Period::Month);
    let filter = sum_args.filter.to_filter(GroupBy::default(), now);
    if let Err(e) = filter.validate() {
        msg_warning!(Message::InvalidDateRange(e.to_string()));
    }

    let report = Report::build(&dataset, &filter, period, None);

    let period_name = match period {
        Period::Week => "week",
        Period::Month => "month",
        Period::Quarter => "quarter",
    };
    msg_print!(Message::PeriodSummaryHeader(period_name.to_string()), true);
    if report.periods.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    View::periods(&report.periods)?;

    Ok(())
}

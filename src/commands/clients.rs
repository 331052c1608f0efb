use crate::{
    commands::load_dataset,
    libs::{config::Config, filter::ReportFilter, messages::Message, range::Period, report::Report, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ClientsArgs {
    #[arg(long, help = "Dataset snapshot file (JSON)")]
    input: Option<PathBuf>,
}

pub fn cmd(clients_args: ClientsArgs) -> Result<()> {
    let config = Config::read()?;
    let dataset = load_dataset(clients_args.input.as_ref(), &config)?;

    // The client overview is a global view over the whole dataset; it takes
    // no range or customer narrowing on purpose.
    let report = Report::build(&dataset, &ReportFilter::default(), Period::Month, None);

    msg_print!(Message::ClientOverviewHeader, true);
    if report.clients.is_empty() {
        msg_info!(Message::NoClientsFound);
        return Ok(());
    }

    View::clients(&report.clients)?;

    Ok(())
}

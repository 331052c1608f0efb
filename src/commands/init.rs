use crate::{
    libs::{config::Config, filter::GroupBy, messages::Message, range::Period},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, help = "Default dataset snapshot file (JSON)")]
    data_file: Option<PathBuf>,

    #[arg(long, value_enum, help = "Default grouping dimension")]
    group_by: Option<GroupBy>,

    #[arg(long, value_enum, help = "Default period granularity")]
    period: Option<Period>,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = Config {
        data_file: init_args.data_file,
        group_by: init_args.group_by,
        period: init_args.period,
    };
    config.save()?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}

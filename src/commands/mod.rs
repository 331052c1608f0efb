pub mod clients;
pub mod export;
pub mod init;
pub mod report;
pub mod sum;

use crate::libs::config::Config;
use crate::libs::entry::Dataset;
use crate::libs::filter::{GroupBy, ReportFilter};
use crate::libs::messages::{macros::is_debug_mode, Message};
use crate::libs::range::{DateRange, NamedRange};
use crate::libs::storage;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Save default settings")]
    Init(init::InitArgs),
    #[command(about = "Prepare a grouped hours report")]
    Report(report::ReportArgs),
    #[command(about = "Summarize hours by week, month, or quarter")]
    Sum(sum::SumArgs),
    #[command(about = "Show the per-client billing overview")]
    Clients(clients::ClientsArgs),
    #[command(about = "Export report data to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Clients(args) => clients::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Dataset and filter flags shared by the report-producing commands.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    #[arg(long, help = "Dataset snapshot file (JSON)")]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, help = "Named calendar range", conflicts_with_all = ["from", "to"])]
    pub range: Option<NamedRange>,

    #[arg(long, help = "Range start date (YYYY-MM-DD)")]
    pub from: Option<NaiveDate>,

    #[arg(long, help = "Range end date (YYYY-MM-DD)")]
    pub to: Option<NaiveDate>,

    #[arg(long, help = "Only entries for this customer id")]
    pub customer: Option<String>,

    #[arg(long, help = "Only billable entries")]
    pub billable_only: bool,
}

impl FilterArgs {
    pub fn date_range(&self, now: DateTime<Utc>) -> DateRange {
        match self.range {
            Some(named) => named.resolve(now),
            None => DateRange::new(self.from, self.to),
        }
    }

    pub fn to_filter(&self, group_by: GroupBy, now: DateTime<Utc>) -> ReportFilter {
        ReportFilter {
            date_range: self.date_range(now),
            customer_id: self.customer.clone(),
            billable_only: self.billable_only,
            group_by,
        }
    }

    /// Loads the snapshot from `--input`, falling back to the configured
    /// default dataset file.
    pub fn load_dataset(&self, config: &Config) -> Result<Dataset> {
        load_dataset(self.input.as_ref(), config)
    }
}

/// Resolves the dataset path (explicit argument, else configured default)
/// and loads the snapshot.
pub fn load_dataset(input: Option<&PathBuf>, config: &Config) -> Result<Dataset> {
    let path = input
        .cloned()
        .or_else(|| config.data_file.clone())
        .ok_or_else(|| msg_error_anyhow!(Message::NoDatasetConfigured))?;
    storage::load_dataset(&path)
}

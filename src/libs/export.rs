//! Report export for external analysis and invoicing.
//!
//! Serializes computed report structures to CSV, JSON, or Excel. The
//! exporter consumes [`Report`] output only - it never reaches back into
//! raw entries, so every format renders exactly the numbers the console
//! tables show.
//!
//! ## Export Formats
//!
//! - **CSV**: header, one line per row, and a trailing `Total` line
//! - **JSON**: pretty-printed structures for programmatic processing
//! - **Excel**: formatted worksheets with bold headers and auto-sized columns
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktally::libs::export::{ExportData, ExportFormat, Exporter};
//! # let report = worktally::libs::report::Report { rows: vec![], periods: vec![], clients: vec![] };
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&report, ExportData::Rows)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::{format_hours, TABLE_DECIMALS};
use crate::libs::messages::Message;
use crate::libs::report::{ClientSummary, PeriodSummary, Report, ReportRow};
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with formatting and auto-sizing.
    Excel,
}

/// Which part of the report to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// The primary grouped report rows.
    Rows,
    /// Week/month/quarter period summaries.
    Periods,
    /// The per-client billing overview.
    Clients,
    /// Everything: one combined JSON file, or one file per section for
    /// CSV and Excel.
    All,
}

/// Orchestrates export of a computed report to a file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a timestamped
    /// default name like `worktally_export_20250115_143022.csv`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("worktally_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Exports the selected report section in the configured format.
    pub fn export(&self, report: &Report, data: ExportData) -> Result<()> {
        match data {
            ExportData::Rows => self.export_rows(&report.rows)?,
            ExportData::Periods => self.export_periods(&report.periods)?,
            ExportData::Clients => self.export_clients(&report.clients)?,
            ExportData::All => return self.export_all(report),
        }
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_rows(&self, rows: &[ReportRow]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_rows_csv(rows),
            ExportFormat::Json => self.write_json(rows),
            ExportFormat::Excel => self.export_rows_excel(rows),
        }
    }

    fn export_periods(&self, periods: &[PeriodSummary]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_periods_csv(periods),
            ExportFormat::Json => self.write_json(periods),
            ExportFormat::Excel => self.export_periods_excel(periods),
        }
    }

    fn export_clients(&self, clients: &[ClientSummary]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_clients_csv(clients),
            ExportFormat::Json => self.write_json(clients),
            ExportFormat::Excel => self.export_clients_excel(clients),
        }
    }

    /// Exports every section. JSON produces a single combined file with
    /// export metadata; CSV and Excel produce one file per section with
    /// descriptive suffixes.
    fn export_all(&self, report: &Report) -> Result<()> {
        msg_info!(Message::ExportingAllData);

        if let ExportFormat::Json = self.format {
            let all_data = serde_json::json!({
                "export_date": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "rows": report.rows,
                "periods": report.periods,
                "clients": report.clients,
            });
            let json = serde_json::to_string_pretty(&all_data)?;
            File::create(&self.output_path)?.write_all(json.as_bytes())?;
        } else {
            let base = self
                .output_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "worktally_export".to_string());
            let ext = self
                .output_path
                .extension()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "csv".to_string());

            let rows_path = self.output_path.with_file_name(format!("{}_rows.{}", base, ext));
            let periods_path = self.output_path.with_file_name(format!("{}_periods.{}", base, ext));
            let clients_path = self.output_path.with_file_name(format!("{}_clients.{}", base, ext));

            Exporter::new(self.format, Some(rows_path)).export(report, ExportData::Rows)?;
            Exporter::new(self.format, Some(periods_path)).export(report, ExportData::Periods)?;
            Exporter::new(self.format, Some(clients_path)).export(report, ExportData::Clients)?;

            return Ok(());
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Header, one line per group, trailing Total line.
    fn export_rows_csv(&self, rows: &[ReportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Group", "Total Hours", "Billable Hours", "Non-Billable Hours"])?;
        let mut total = 0.0;
        let mut billable = 0.0;
        let mut non_billable = 0.0;
        for row in rows {
            total += row.total_hours;
            billable += row.billable_hours;
            non_billable += row.non_billable_hours;
            wtr.write_record([
                row.group_key.clone(),
                format_hours(row.total_hours, TABLE_DECIMALS),
                format_hours(row.billable_hours, TABLE_DECIMALS),
                format_hours(row.non_billable_hours, TABLE_DECIMALS),
            ])?;
        }
        wtr.write_record([
            "Total".to_string(),
            format_hours(total, TABLE_DECIMALS),
            format_hours(billable, TABLE_DECIMALS),
            format_hours(non_billable, TABLE_DECIMALS),
        ])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_periods_csv(&self, periods: &[PeriodSummary]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Period", "Total Hours", "Billable Hours", "Non-Billable Hours", "Billable %"])?;
        let mut total = 0.0;
        let mut billable = 0.0;
        let mut non_billable = 0.0;
        for period in periods {
            total += period.total_hours;
            billable += period.billable_hours;
            non_billable += period.non_billable_hours;
            wtr.write_record([
                period.period_label.clone(),
                format_hours(period.total_hours, TABLE_DECIMALS),
                format_hours(period.billable_hours, TABLE_DECIMALS),
                format_hours(period.non_billable_hours, TABLE_DECIMALS),
                format!("{}%", period.billable_percentage),
            ])?;
        }
        wtr.write_record([
            "Total".to_string(),
            format_hours(total, TABLE_DECIMALS),
            format_hours(billable, TABLE_DECIMALS),
            format_hours(non_billable, TABLE_DECIMALS),
            String::new(),
        ])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_clients_csv(&self, clients: &[ClientSummary]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record([
            "Customer",
            "Total Hours",
            "Billable Hours",
            "Non-Billable Hours",
            "Billable Amount",
        ])?;
        let mut total = 0.0;
        let mut billable = 0.0;
        let mut non_billable = 0.0;
        let mut amount = 0.0;
        for client in clients {
            total += client.total_hours;
            billable += client.billable_hours;
            non_billable += client.non_billable_hours;
            amount += client.billable_amount;
            wtr.write_record([
                client.customer_name.clone(),
                format_hours(client.total_hours, TABLE_DECIMALS),
                format_hours(client.billable_hours, TABLE_DECIMALS),
                format_hours(client.non_billable_hours, TABLE_DECIMALS),
                format!("{:.2}", client.billable_amount),
            ])?;
        }
        wtr.write_record([
            "Total".to_string(),
            format_hours(total, TABLE_DECIMALS),
            format_hours(billable, TABLE_DECIMALS),
            format_hours(non_billable, TABLE_DECIMALS),
            format!("{:.2}", amount),
        ])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_rows_excel(&self, rows: &[ReportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Group", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Total Hours", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Billable Hours", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Non-Billable Hours", &header_format)?;

        for (i, report_row) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &report_row.group_key)?;
            worksheet.write_number(row, 1, report_row.total_hours)?;
            worksheet.write_number(row, 2, report_row.billable_hours)?;
            worksheet.write_number(row, 3, report_row.non_billable_hours)?;
        }

        let total_row = rows.len() as u32 + 1;
        worksheet.write_string_with_format(total_row, 0, "Total", &header_format)?;
        worksheet.write_number(total_row, 1, rows.iter().map(|r| r.total_hours).sum::<f64>())?;
        worksheet.write_number(total_row, 2, rows.iter().map(|r| r.billable_hours).sum::<f64>())?;
        worksheet.write_number(total_row, 3, rows.iter().map(|r| r.non_billable_hours).sum::<f64>())?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_periods_excel(&self, periods: &[PeriodSummary]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Period", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Total Hours", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Billable Hours", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Non-Billable Hours", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Billable %", &header_format)?;

        for (i, period) in periods.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &period.period_label)?;
            worksheet.write_number(row, 1, period.total_hours)?;
            worksheet.write_number(row, 2, period.billable_hours)?;
            worksheet.write_number(row, 3, period.non_billable_hours)?;
            worksheet.write_number(row, 4, period.billable_percentage as f64)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_clients_excel(&self, clients: &[ClientSummary]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Customer", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Total Hours", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Billable Hours", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Non-Billable Hours", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Billable Amount", &header_format)?;

        for (i, client) in clients.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &client.customer_name)?;
            worksheet.write_number(row, 1, client.total_hours)?;
            worksheet.write_number(row, 2, client.billable_hours)?;
            worksheet.write_number(row, 3, client.non_billable_hours)?;
            worksheet.write_number(row, 4, client.billable_amount)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

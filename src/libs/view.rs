use crate::libs::formatter::{format_hours, TABLE_DECIMALS};
use crate::libs::report::{ClientSummary, PeriodSummary, ReportRow};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn rows(rows: &[ReportRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["GROUP", "TOTAL H", "BILLABLE H", "NON-BILLABLE H"]);
        for r in rows {
            table.add_row(row![
                r.group_key,
                format_hours(r.total_hours, TABLE_DECIMALS),
                format_hours(r.billable_hours, TABLE_DECIMALS),
                format_hours(r.non_billable_hours, TABLE_DECIMALS)
            ]);
        }
        table.add_row(row![
            "TOTAL",
            format_hours(rows.iter().map(|r| r.total_hours).sum::<f64>(), TABLE_DECIMALS),
            format_hours(rows.iter().map(|r| r.billable_hours).sum::<f64>(), TABLE_DECIMALS),
            format_hours(rows.iter().map(|r| r.non_billable_hours).sum::<f64>(), TABLE_DECIMALS)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn periods(periods: &[PeriodSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PERIOD", "TOTAL H", "BILLABLE H", "NON-BILLABLE H", "BILLABLE %"]);
        for p in periods {
            table.add_row(row![
                p.period_label,
                format_hours(p.total_hours, TABLE_DECIMALS),
                format_hours(p.billable_hours, TABLE_DECIMALS),
                format_hours(p.non_billable_hours, TABLE_DECIMALS),
                format!("{}%", p.billable_percentage)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn clients(clients: &[ClientSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CUSTOMER", "TOTAL H", "BILLABLE H", "NON-BILLABLE H", "AMOUNT"]);
        for c in clients {
            table.add_row(row![
                c.customer_name,
                format_hours(c.total_hours, TABLE_DECIMALS),
                format_hours(c.billable_hours, TABLE_DECIMALS),
                format_hours(c.non_billable_hours, TABLE_DECIMALS),
                format!("{:.2}", c.billable_amount)
            ]);
        }
        table.add_row(row![
            "TOTAL",
            format_hours(clients.iter().map(|c| c.total_hours).sum::<f64>(), TABLE_DECIMALS),
            format_hours(clients.iter().map(|c| c.billable_hours).sum::<f64>(), TABLE_DECIMALS),
            format_hours(clients.iter().map(|c| c.non_billable_hours).sum::<f64>(), TABLE_DECIMALS),
            format!("{:.2}", clients.iter().map(|c| c.billable_amount).sum::<f64>())
        ]);
        table.printstd();

        Ok(())
    }
}

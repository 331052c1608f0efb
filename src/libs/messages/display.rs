use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ReportHeader(label) => write!(f, "Report for {}", label),
            Message::PeriodSummaryHeader(period) => write!(f, "Hours by {}", period),
            Message::ClientOverviewHeader => write!(f, "Client overview"),
            Message::TotalHours(hours) => write!(f, "Total: {} h", hours),
            Message::NoEntriesFound => write!(f, "No entries match the current filter"),
            Message::NoClientsFound => write!(f, "No clients with recorded hours"),
            Message::InvalidDateRange(reason) => write!(f, "{}", reason),

            Message::DatasetNotFound(path) => write!(f, "Dataset file not found: {}", path),
            Message::DatasetParseError(reason) => write!(f, "Failed to parse dataset: {}", reason),
            Message::NoDatasetConfigured => {
                write!(f, "No dataset file given; pass --input or set data_file in the configuration")
            }

            Message::ConfigSaved => write!(f, "Configuration saved successfully"),
            Message::ConfigParseError(reason) => write!(f, "Failed to parse configuration: {}", reason),

            Message::ExportCompleted(path) => write!(f, "Data exported successfully to: {}", path),
            Message::ExportingAllData => write!(f, "Exporting all report sections..."),
        }
    }
}

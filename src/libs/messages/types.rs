#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    ReportHeader(String),        // date or range label
    PeriodSummaryHeader(String), // period granularity
    ClientOverviewHeader,
    TotalHours(String), // formatted hours
    NoEntriesFound,
    NoClientsFound,
    InvalidDateRange(String), // reason

    // === DATASET MESSAGES ===
    DatasetNotFound(String),   // path
    DatasetParseError(String), // reason
    NoDatasetConfigured,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String), // reason

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportingAllData,
}

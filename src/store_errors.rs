//! # Store Error Types Module
//!
//! Error types for reading the product spreadsheet. Every variant is
//! recoverable: the store logs it and serves an empty catalog instead.

/// Custom error types for catalog loading
#[derive(Debug, Clone)]
pub enum StoreError {
    /// File system errors (missing file, permissions, metadata)
    Io(String),
    /// Spreadsheet parsing errors reported by calamine
    Workbook(String),
    /// CSV parsing errors
    Csv(String),
    /// The sheet has no header row
    EmptySheet(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "I/O error: {msg}"),
            StoreError::Workbook(msg) => write!(f, "Workbook error: {msg}"),
            StoreError::Csv(msg) => write!(f, "CSV error: {msg}"),
            StoreError::EmptySheet(msg) => write!(f, "Empty sheet: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<calamine::Error> for StoreError {
    fn from(err: calamine::Error) -> Self {
        StoreError::Workbook(err.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Csv(err.to_string())
    }
}

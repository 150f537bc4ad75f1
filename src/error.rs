use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type covering the different failure cases that can occur while the
/// tool selects a root directory, reads workbooks, and emits CSV files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Wrapper for IO failures such as reading directories or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the workbook reader implementation.
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// Errors bubbled up from the CSV writer implementation.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a requested worksheet does not exist in the workbook.
    #[error("worksheet '{0}' not found")]
    MissingSheet(String),

    /// Raised when the resolved root directory does not exist.
    #[error("input directory not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the interactive menu is closed without a selection.
    #[error("menu closed without a selection")]
    MenuAborted,

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

//! Report error types.

use std::path::PathBuf;

use thiserror::Error;
use timesheet_core::CoreError;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The configured template workbook does not exist.
    #[error("Report template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// The file exists but could not be read as a report workbook.
    #[error("Failed to load report {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// The worksheet name records a different month than the file name.
    #[error("Report {} holds sheet '{sheet}' but its file name says '{expected}'", path.display())]
    IdentityMismatch {
        path: PathBuf,
        sheet: String,
        expected: String,
    },

    /// The configured date format contains an unknown specifier.
    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),

    /// File name or month could not be turned into a report identity.
    #[error(transparent)]
    Identity(#[from] CoreError),

    /// Workbook serialization failed.
    #[error("Workbook write failed: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

//! Errors that abort an updater run.

use std::path::PathBuf;

use thiserror::Error;
use timesheet_core::CoreError;
use timesheet_mail::MailError;
use timesheet_report::ReportError;

#[derive(Debug, Error)]
pub enum UpdaterError {
    /// Checked before any file or network activity.
    #[error("Base directory does not exist: {}", .0.display())]
    MissingBaseDirectory(PathBuf),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Mail(#[from] MailError),
}

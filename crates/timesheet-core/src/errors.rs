//! Error types for calendar and identity rules.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A report file name does not follow `TotalTimeSheet-MM-Month-YYYY.xlsx`.
    #[error("Invalid report file name '{name}': {reason}")]
    InvalidReportFileName { name: String, reason: String },

    /// Month/year pair outside the representable calendar.
    #[error("Invalid report month {month:02}/{year}")]
    InvalidMonth { month: u32, year: i32 },
}

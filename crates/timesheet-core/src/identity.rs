//! Report identity: the (month, year) a report file covers.
//!
//! File name format: `TotalTimeSheet-<MM>-<MonthFullName>-<YYYY>.xlsx`, with a
//! `-temp` variant used as the staging file during save. The worksheet inside
//! carries the same identity as `MM-YYYY`.

use std::fmt;
use std::path::Path;

use chrono::{Datelike, Month, Months, NaiveDate};

use crate::errors::CoreError;

pub const REPORT_PREFIX: &str = "TotalTimeSheet";
pub const REPORT_EXTENSION: &str = "xlsx";
const TEMP_MARKER: &str = "temp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportIdentity {
    month: Month,
    year: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl ReportIdentity {
    /// Build an identity for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMonth`] when the month is out of range or the
    /// month's bounds cannot be represented.
    pub fn new(month: u32, year: i32) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidMonth { month, year };

        let chrono_month = u8::try_from(month)
            .ok()
            .and_then(|value| Month::try_from(value).ok())
            .ok_or_else(invalid)?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            month: chrono_month,
            year,
            first_day,
            last_day,
        })
    }

    /// The month containing `today`.
    ///
    /// # Errors
    ///
    /// Only fails at the edge of chrono's representable range.
    pub fn current(today: NaiveDate) -> Result<Self, CoreError> {
        Self::new(today.month(), today.year())
    }

    /// The month preceding the first day of the month containing `today`.
    ///
    /// # Errors
    ///
    /// Only fails at the edge of chrono's representable range.
    pub fn previous(today: NaiveDate) -> Result<Self, CoreError> {
        let last_of_previous = today
            .with_day(1)
            .and_then(|first| first.pred_opt())
            .ok_or(CoreError::InvalidMonth {
                month: today.month(),
                year: today.year(),
            })?;
        Self::new(last_of_previous.month(), last_of_previous.year())
    }

    /// Recover the identity from a report file name.
    ///
    /// The month name must agree with the month number; the `-temp` staging
    /// variant is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidReportFileName`] describing the first field
    /// that does not parse.
    pub fn from_file_name(name: &str) -> Result<Self, CoreError> {
        let invalid = |reason: String| CoreError::InvalidReportFileName {
            name: name.to_string(),
            reason,
        };

        let stem = name
            .strip_suffix(&format!(".{REPORT_EXTENSION}"))
            .ok_or_else(|| invalid(format!("missing .{REPORT_EXTENSION} extension")))?;
        let fields: Vec<&str> = stem.split('-').collect();
        let [prefix, month, month_name, year] = fields.as_slice() else {
            return Err(invalid(format!(
                "expected 4 '-' separated fields, found {}",
                fields.len()
            )));
        };

        if *prefix != REPORT_PREFIX {
            return Err(invalid(format!("prefix must be '{REPORT_PREFIX}'")));
        }
        let month: u32 = month
            .parse()
            .map_err(|_| invalid(format!("month '{month}' is not a number")))?;
        let year: i32 = year
            .parse()
            .map_err(|_| invalid(format!("year '{year}' is not a number")))?;

        let identity = Self::new(month, year).map_err(|error| invalid(error.to_string()))?;
        if !identity.month_name().eq_ignore_ascii_case(month_name) {
            return Err(invalid(format!(
                "month name '{month_name}' does not match month {month:02}"
            )));
        }
        Ok(identity)
    }

    /// Recover the identity from the final component of `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_file_name`]; a path without a UTF-8 file name is
    /// also rejected.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CoreError::InvalidReportFileName {
                name: path.display().to_string(),
                reason: "path has no file name".to_string(),
            })?;
        Self::from_file_name(name)
    }

    /// Parse a `MM-YYYY` worksheet name into `(month, year)`.
    pub fn parse_sheet_name(name: &str) -> Option<(u32, i32)> {
        let (month, year) = name.split_once('-')?;
        if month.len() != 2 || year.is_empty() {
            return None;
        }
        Some((month.parse().ok()?, year.parse().ok()?))
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub fn month_number(&self) -> u32 {
        self.month.number_from_month()
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last day of the month, inclusive.
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn file_name(&self) -> String {
        format!(
            "{REPORT_PREFIX}-{:02}-{}-{}.{REPORT_EXTENSION}",
            self.month_number(),
            self.month_name(),
            self.year
        )
    }

    pub fn temp_file_name(&self) -> String {
        format!(
            "{REPORT_PREFIX}-{:02}-{}-{}-{TEMP_MARKER}.{REPORT_EXTENSION}",
            self.month_number(),
            self.month_name(),
            self.year
        )
    }

    pub fn sheet_name(&self) -> String {
        format!("{:02}-{}", self.month_number(), self.year)
    }

    /// Human label such as `April 2026`.
    pub fn period_title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for ReportIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month_number(), self.year)
    }
}

//! Report lifecycle: open or seed, partition, fill, mark, save.
//!
//! Week entries are recomputed from the file name on every open; only their
//! cell values persist. Content and sent markers are scanned from the latest
//! week backwards and the scan stops at the first week already carrying the
//! marker, so both assume markers grow contiguously from the oldest week.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use timesheet_config::ReportConfig;
use timesheet_core::{ReportIdentity, WeekSpan, partition};

use crate::content::{self, ContentPicker};
use crate::entry::WeekEntry;
use crate::error::ReportError;
use crate::grid::CellGrid;
use crate::layout::{self, WeekField};
use crate::template::TemplateSource;
use crate::workbook;

pub const SENT_MARKER: &str = "SENT";
pub const NOT_APPLICABLE: &str = "N/A";
pub const END_OF_MONTH_NOTICE: &str = "END OF MONTH, NO CONTENT HERE";
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// How reports are seeded and how dates are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub template: TemplateSource,
    date_format: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            template: TemplateSource::Bundled,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ReportOptions {
    /// # Errors
    ///
    /// [`ReportError::InvalidDateFormat`] when `date_format` has an unknown
    /// specifier.
    pub fn new(template: TemplateSource, date_format: &str) -> Result<Self, ReportError> {
        if date_format.is_empty()
            || StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(ReportError::InvalidDateFormat(date_format.to_string()));
        }
        Ok(Self {
            template,
            date_format: date_format.to_string(),
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &ReportConfig) -> Result<Self, ReportError> {
        Self::new(TemplateSource::from_config(config), &config.date_format)
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

/// One month's timesheet, held in memory while open.
#[derive(Debug)]
pub struct Report {
    path: PathBuf,
    identity: ReportIdentity,
    grid: CellGrid,
    weeks: Vec<WeekSpan>,
    sentinel: WeekSpan,
    date_format: String,
    created: bool,
}

impl Report {
    /// Open the report at `path`, seeding it from the template when absent.
    ///
    /// # Errors
    ///
    /// - [`ReportError::Identity`] when the file name is not a report name
    /// - [`ReportError::TemplateNotFound`] when seeding from a missing template
    /// - [`ReportError::Load`] when an existing file is not a readable workbook
    /// - [`ReportError::IdentityMismatch`] when the sheet name records another month
    pub fn open(path: impl AsRef<Path>, options: &ReportOptions) -> Result<Self, ReportError> {
        let path = path.as_ref().to_path_buf();
        let identity = ReportIdentity::from_path(&path)?;

        let created = !path.exists();
        let grid = if created {
            tracing::debug!(report = %path.display(), "seeding report from template");
            options.template.load()?
        } else {
            let grid = workbook::read_grid(&path)?;
            check_sheet_identity(&path, &identity, &grid)?;
            grid
        };

        let mut spans = partition(identity.first_day(), identity.last_day());
        let sentinel = spans.pop().ok_or_else(|| ReportError::Load {
            path: path.clone(),
            reason: "month produced no week spans".to_string(),
        })?;

        let mut report = Self {
            path,
            identity,
            grid,
            weeks: spans,
            sentinel,
            date_format: options.date_format.clone(),
            created,
        };
        report.stamp_sentinel();

        tracing::debug!(
            report = %report.path.display(),
            identity = %report.identity,
            weeks = report.weeks.len(),
            created,
            "opened report"
        );
        Ok(report)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn identity(&self) -> &ReportIdentity {
        &self.identity
    }

    /// Whether this handle seeded the report from the template.
    pub const fn was_created(&self) -> bool {
        self.created
    }

    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub const fn start_of_month(&self) -> NaiveDate {
        self.identity.first_day()
    }

    pub const fn end_of_month(&self) -> NaiveDate {
        self.identity.last_day()
    }

    /// Content weeks in calendar order, sentinel excluded.
    pub fn week_entries(&self) -> impl Iterator<Item = WeekEntry<'_>> {
        self.weeks
            .iter()
            .map(|span| WeekEntry::new(span, &self.grid))
    }

    pub fn week(&self, index: usize) -> Option<WeekEntry<'_>> {
        self.weeks
            .get(index)
            .map(|span| WeekEntry::new(span, &self.grid))
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// The trailing end-of-month entry.
    pub const fn sentinel(&self) -> WeekEntry<'_> {
        WeekEntry::new(&self.sentinel, &self.grid)
    }

    pub fn update_period_title(&mut self) -> &mut Self {
        self.grid
            .set(layout::PERIOD_TITLE, self.identity.period_title());
        self
    }

    pub fn update_start_of_month(&mut self) -> &mut Self {
        let value = self.format_date(self.identity.first_day());
        self.grid.set(layout::START_OF_MONTH, value);
        self
    }

    pub fn update_end_of_month(&mut self) -> &mut Self {
        let value = self.format_date(self.identity.last_day());
        self.grid.set(layout::END_OF_MONTH, value);
        self
    }

    /// Write each week's label and date range.
    pub fn update_week_periods(&mut self) -> &mut Self {
        for index in 0..self.weeks.len() {
            let span = self.weeks[index];
            let from = self.format_date(span.start());
            let to = self.format_date(span.end());
            self.grid.set(
                WeekField::Period.cell(index),
                format!("Week {}", span.presentable_index()),
            );
            self.grid.set(WeekField::From.cell(index), from);
            self.grid.set(WeekField::To.cell(index), to);
        }
        self
    }

    /// Fill placeholder content into every empty, non-future week after the
    /// latest week that already has content.
    pub fn update_content(
        &mut self,
        today: NaiveDate,
        picker: &mut impl ContentPicker,
    ) -> &mut Self {
        for index in (0..self.weeks.len()).rev() {
            let entry = WeekEntry::new(&self.weeks[index], &self.grid);
            if entry.has_content() {
                break;
            }
            if entry.is_future(today) {
                continue;
            }

            let placeholder = content::choose(picker);
            self.grid.set(WeekField::BeginAt.cell(index), content::BEGIN_AT);
            self.grid.set(WeekField::EndAt.cell(index), content::END_AT);
            self.grid
                .set(WeekField::TotalTime.cell(index), content::TOTAL_TIME);
            self.grid.set(
                WeekField::TaskDescription.cell(index),
                placeholder.task_description,
            );
            self.grid.set(WeekField::Note.cell(index), placeholder.note);
            self.grid.set(
                WeekField::TotalTimeCalculated.cell(index),
                content::TOTAL_TIME_CALCULATED,
            );
            tracing::debug!(
                report = %self.path.display(),
                week = index + 1,
                "filled placeholder content"
            );
        }
        self
    }

    /// Mark every past week after the latest already-sent week as sent.
    pub fn mark_all_as_sent(&mut self, today: NaiveDate) -> &mut Self {
        for index in (0..self.weeks.len()).rev() {
            let entry = WeekEntry::new(&self.weeks[index], &self.grid);
            if entry.has_been_sent() {
                break;
            }
            if entry.is_current(today) || entry.is_future(today) {
                continue;
            }
            self.grid.set(WeekField::Sent.cell(index), SENT_MARKER);
        }
        self
    }

    pub fn has_unsent_content(&self, today: NaiveDate) -> bool {
        self.week_entries()
            .any(|entry| is_unsent(&entry, today))
    }

    /// One-based numbers of past weeks with content that has not been sent.
    pub fn unsent_weeks(&self, today: NaiveDate) -> Vec<usize> {
        self.week_entries()
            .filter(|entry| is_unsent(entry, today))
            .map(|entry| entry.presentable_index())
            .collect()
    }

    /// Label such as `April Week 1, 2`, or `None` when nothing is unsent.
    pub fn unsent_label(&self, today: NaiveDate) -> Option<String> {
        let weeks = self.unsent_weeks(today);
        if weeks.is_empty() {
            return None;
        }
        let numbers: Vec<String> = weeks.iter().map(ToString::to_string).collect();
        Some(format!(
            "{} Week {}",
            self.identity.month_name(),
            numbers.join(", ")
        ))
    }

    /// Write to the `-temp` sibling, then rename it over the report.
    ///
    /// `rename` replaces the destination in one step on Unix and Windows. A
    /// failed write can leave the temp file behind; it is overwritten by the
    /// next save.
    ///
    /// # Errors
    ///
    /// Propagates workbook serialization and file-system failures.
    pub fn save(&self) -> Result<PathBuf, ReportError> {
        let temp_path = self.path.with_file_name(self.identity.temp_file_name());
        workbook::write_grid(&self.grid, &self.identity.sheet_name(), &temp_path)?;
        std::fs::rename(&temp_path, &self.path)?;

        tracing::debug!(report = %self.path.display(), "saved report");
        Ok(self.path.clone())
    }

    /// Release the report.
    pub fn close(self) {
        tracing::debug!(report = %self.path.display(), "closed report");
    }

    fn stamp_sentinel(&mut self) {
        let index = self.sentinel.index();
        for field in WeekField::ALL {
            self.grid.set(field.cell(index), NOT_APPLICABLE);
        }
        self.grid
            .set(layout::conclude_label(index), END_OF_MONTH_NOTICE);
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

fn is_unsent(entry: &WeekEntry<'_>, today: NaiveDate) -> bool {
    entry.is_past(today) && entry.has_content() && !entry.has_been_sent()
}

fn check_sheet_identity(
    path: &Path,
    identity: &ReportIdentity,
    grid: &CellGrid,
) -> Result<(), ReportError> {
    let Some((month, year)) = ReportIdentity::parse_sheet_name(grid.sheet_name()) else {
        return Ok(());
    };
    if month == identity.month_number() && year == identity.year() {
        return Ok(());
    }
    Err(ReportError::IdentityMismatch {
        path: path.to_path_buf(),
        sheet: grid.sheet_name().to_string(),
        expected: identity.sheet_name(),
    })
}

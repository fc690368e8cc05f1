//! Read-only view of one week's row pair.

use chrono::NaiveDate;
use timesheet_core::WeekSpan;

use crate::grid::CellGrid;
use crate::layout::WeekField;

#[derive(Debug, Clone, Copy)]
pub struct WeekEntry<'a> {
    span: &'a WeekSpan,
    grid: &'a CellGrid,
}

/// Owned copy of every timesheet field of a week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekFields {
    pub period: String,
    pub from: String,
    pub to: String,
    pub begin_at: String,
    pub end_at: String,
    pub total_time: String,
    pub task_description: String,
    pub note: String,
    pub total_time_calculated: String,
    pub sent: String,
}

impl<'a> WeekEntry<'a> {
    pub(crate) const fn new(span: &'a WeekSpan, grid: &'a CellGrid) -> Self {
        Self { span, grid }
    }

    pub const fn span(&self) -> &'a WeekSpan {
        self.span
    }

    pub const fn index(&self) -> usize {
        self.span.index()
    }

    pub const fn presentable_index(&self) -> usize {
        self.span.presentable_index()
    }

    pub const fn start_of_week(&self) -> NaiveDate {
        self.span.start()
    }

    pub const fn end_of_week(&self) -> NaiveDate {
        self.span.end()
    }

    pub const fn number_of_days(&self) -> u32 {
        self.span.number_of_days()
    }

    pub fn field(&self, field: WeekField) -> &'a str {
        self.grid.get(field.cell(self.index()))
    }

    /// Content is recorded once the calculated total is filled in.
    pub fn has_content(&self) -> bool {
        !self.field(WeekField::TotalTimeCalculated).trim().is_empty()
    }

    pub fn has_been_sent(&self) -> bool {
        !self.field(WeekField::Sent).trim().is_empty()
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.span.is_past(today)
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.span.is_current(today)
    }

    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.span.is_future(today)
    }

    pub fn fields(&self) -> WeekFields {
        WeekFields {
            period: self.field(WeekField::Period).to_string(),
            from: self.field(WeekField::From).to_string(),
            to: self.field(WeekField::To).to_string(),
            begin_at: self.field(WeekField::BeginAt).to_string(),
            end_at: self.field(WeekField::EndAt).to_string(),
            total_time: self.field(WeekField::TotalTime).to_string(),
            task_description: self.field(WeekField::TaskDescription).to_string(),
            note: self.field(WeekField::Note).to_string(),
            total_time_calculated: self.field(WeekField::TotalTimeCalculated).to_string(),
            sent: self.field(WeekField::Sent).to_string(),
        }
    }
}

//! Fixed cell coordinates of the report worksheet.
//!
//! Week `i` owns a content row at `6 + 2i` and a conclude row at `7 + 2i`.

use crate::grid::CellRef;

pub const BANNER: CellRef = CellRef::new(0, 0);
pub const PERIOD_TITLE: CellRef = CellRef::new(1, 0);
pub const START_OF_MONTH_LABEL: CellRef = CellRef::new(3, 4);
pub const START_OF_MONTH: CellRef = CellRef::new(3, 5);
pub const END_OF_MONTH_LABEL: CellRef = CellRef::new(4, 4);
pub const END_OF_MONTH: CellRef = CellRef::new(4, 5);
pub const HEADER_ROW: u32 = 5;

const FIRST_CONTENT_ROW: u32 = 6;
const CONCLUDE_LABEL_COL: u16 = 0;

pub fn content_row(week: usize) -> u32 {
    let week = u32::try_from(week).unwrap_or(u32::MAX);
    FIRST_CONTENT_ROW.saturating_add(week.saturating_mul(2))
}

pub fn conclude_row(week: usize) -> u32 {
    content_row(week).saturating_add(1)
}

/// Column 0 of the conclude row, used for the end-of-month notice.
pub fn conclude_label(week: usize) -> CellRef {
    CellRef::new(conclude_row(week), CONCLUDE_LABEL_COL)
}

/// Rows rendered in bold.
pub const fn is_heading_row(row: u32) -> bool {
    row == BANNER.row || row == PERIOD_TITLE.row || row == HEADER_ROW
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekField {
    Period,
    From,
    To,
    BeginAt,
    EndAt,
    TotalTime,
    TaskDescription,
    Note,
    TotalTimeCalculated,
    Sent,
}

impl WeekField {
    pub const ALL: [Self; 10] = [
        Self::Period,
        Self::From,
        Self::To,
        Self::BeginAt,
        Self::EndAt,
        Self::TotalTime,
        Self::TaskDescription,
        Self::Note,
        Self::TotalTimeCalculated,
        Self::Sent,
    ];

    /// Where this field lives for week `week`.
    pub fn cell(self, week: usize) -> CellRef {
        match self {
            Self::Period => CellRef::new(content_row(week), 0),
            Self::From => CellRef::new(content_row(week), 1),
            Self::To => CellRef::new(content_row(week), 2),
            Self::BeginAt => CellRef::new(content_row(week), 3),
            Self::EndAt => CellRef::new(content_row(week), 4),
            Self::TotalTime => CellRef::new(content_row(week), 5),
            Self::TaskDescription => CellRef::new(content_row(week), 6),
            Self::Note => CellRef::new(content_row(week), 7),
            Self::TotalTimeCalculated => CellRef::new(conclude_row(week), 5),
            Self::Sent => CellRef::new(conclude_row(week), 6),
        }
    }

    /// Column header text in the bundled template.
    pub const fn header(self) -> Option<&'static str> {
        match self {
            Self::Period => Some("Period"),
            Self::From => Some("From"),
            Self::To => Some("To"),
            Self::BeginAt => Some("Begin at"),
            Self::EndAt => Some("End at"),
            Self::TotalTime => Some("Total time"),
            Self::TaskDescription => Some("Task description"),
            Self::Note => Some("Note"),
            Self::TotalTimeCalculated | Self::Sent => None,
        }
    }
}

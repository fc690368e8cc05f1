//! Seed workbooks for new reports.

use std::path::PathBuf;

use timesheet_config::ReportConfig;

use crate::error::ReportError;
use crate::grid::{CellGrid, CellRef};
use crate::layout::{self, WeekField};
use crate::workbook;

const BUNDLED_SHEET_NAME: &str = "Timesheet";
const BANNER_TEXT: &str = "TIMESHEET";

/// Where a brand-new report's cells come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Labels compiled into the binary.
    #[default]
    Bundled,
    /// An existing workbook on disk.
    File(PathBuf),
}

impl TemplateSource {
    pub fn from_config(config: &ReportConfig) -> Self {
        config.template_path().map_or(Self::Bundled, Self::File)
    }

    /// Produce the starting cells of a new report.
    ///
    /// A file template only contributes its heading rows; week rows left over
    /// from another month are dropped.
    ///
    /// # Errors
    ///
    /// [`ReportError::TemplateNotFound`] when a file template is missing, or a
    /// load error when it is not a readable workbook.
    pub fn load(&self) -> Result<CellGrid, ReportError> {
        match self {
            Self::Bundled => Ok(bundled()),
            Self::File(path) => {
                if !path.is_file() {
                    return Err(ReportError::TemplateNotFound(path.clone()));
                }
                let mut grid = workbook::read_grid(path)?;
                grid.clear_from_row(layout::content_row(0));
                Ok(grid)
            }
        }
    }
}

fn bundled() -> CellGrid {
    let mut grid = CellGrid::new(BUNDLED_SHEET_NAME);
    grid.set(layout::BANNER, BANNER_TEXT);
    grid.set(layout::START_OF_MONTH_LABEL, "Start of month");
    grid.set(layout::END_OF_MONTH_LABEL, "End of month");
    for field in WeekField::ALL {
        if let Some(header) = field.header() {
            let column = field.cell(0).col;
            grid.set(
                CellRef::new(layout::HEADER_ROW, column),
                header,
            );
        }
    }
    grid
}

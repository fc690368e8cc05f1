//! Workbook file I/O: calamine for reading, rust_xlsxwriter for writing.
//!
//! Only the first worksheet is read, and every non-empty cell becomes a
//! string. Writing produces a single worksheet.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::{Format, Workbook};

use crate::error::ReportError;
use crate::grid::{CellGrid, CellRef};
use crate::layout;

const COLUMN_WIDTHS: [(u16, f64); 8] = [
    (0, 14.0),
    (1, 12.0),
    (2, 12.0),
    (3, 10.0),
    (4, 10.0),
    (5, 20.0),
    (6, 60.0),
    (7, 36.0),
];

/// Read the first worksheet of `path` into a grid.
///
/// # Errors
///
/// [`ReportError::Load`] when the file is not a readable workbook.
pub fn read_grid(path: &Path) -> Result<CellGrid, ReportError> {
    let load_error = |reason: String| ReportError::Load {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| load_error(e.to_string()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| load_error("workbook has no worksheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| load_error(e.to_string()))?;

    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    let mut grid = CellGrid::new(sheet_name);

    for (row, col, value) in range.used_cells() {
        let text = cell_to_string(value);
        if text.is_empty() {
            continue;
        }
        let cell = absolute(row_offset, col_offset, row, col)
            .ok_or_else(|| load_error(format!("cell ({row}, {col}) is out of range")))?;
        grid.set(cell, text);
    }

    Ok(grid)
}

/// Write `grid` as a single worksheet named `sheet_name`.
///
/// # Errors
///
/// Propagates serialization and file-system failures.
pub fn write_grid(grid: &CellGrid, sheet_name: &str, path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let heading = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;
    for (col, width) in COLUMN_WIDTHS {
        worksheet.set_column_width(col, width)?;
    }

    for (cell, value) in grid.cells() {
        if layout::is_heading_row(cell.row) {
            worksheet.write_string_with_format(cell.row, cell.col, value, &heading)?;
        } else {
            worksheet.write_string(cell.row, cell.col, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn absolute(row_offset: u32, col_offset: u32, row: usize, col: usize) -> Option<CellRef> {
    let row = row_offset.checked_add(u32::try_from(row).ok()?)?;
    let col = col_offset.checked_add(u32::try_from(col).ok()?)?;
    Some(CellRef::new(row, u16::try_from(col).ok()?))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => format!("{f}"),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({e:?})"),
        Data::DateTime(dt) => format!("{dt}"),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grid_survives_write_then_read() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let path = dir.path().join("grid.xlsx");

        let mut grid = CellGrid::new("04-2026");
        grid.set(CellRef::new(0, 0), "TIMESHEET");
        grid.set(CellRef::new(3, 5), "01/04/2026");
        grid.set(CellRef::new(7, 6), "SENT");
        write_grid(&grid, "04-2026", &path).expect("write");

        let read = read_grid(&path).expect("read");
        assert_eq!(read, grid);
    }

    #[test]
    fn non_workbook_file_is_a_load_error() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").expect("write");

        assert!(matches!(read_grid(&path), Err(ReportError::Load { .. })));
    }

    #[test]
    fn absolute_adds_range_offset() {
        assert_eq!(absolute(1, 2, 3, 4), Some(CellRef::new(4, 6)));
        assert_eq!(absolute(0, 0, 0, 70_000), None);
    }
}

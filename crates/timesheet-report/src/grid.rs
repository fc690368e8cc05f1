//! In-memory cell store for one worksheet.

use std::collections::BTreeMap;

/// Zero-based worksheet coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }
}

/// String cells keyed by coordinate. Absent cells read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    sheet_name: String,
    cells: BTreeMap<CellRef, String>,
}

impl CellGrid {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn set_sheet_name(&mut self, name: impl Into<String>) {
        self.sheet_name = name.into();
    }

    pub fn get(&self, cell: CellRef) -> &str {
        self.cells.get(&cell).map_or("", String::as_str)
    }

    /// Store `value`; an empty value clears the cell.
    pub fn set(&mut self, cell: CellRef, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, value);
        }
    }

    /// Drop every cell on `row` or below it.
    pub fn clear_from_row(&mut self, row: u32) {
        self.cells.retain(|cell, _| cell.row < row);
    }

    /// Non-empty cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &str)> {
        self.cells.iter().map(|(cell, value)| (*cell, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clear_from_row_keeps_rows_above() {
        let mut grid = CellGrid::new("Sheet1");
        grid.set(CellRef::new(1, 0), "title");
        grid.set(CellRef::new(6, 3), "18:00");
        grid.set(CellRef::new(9, 6), "SENT");

        grid.clear_from_row(6);

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(CellRef::new(1, 0)), "title");
        assert_eq!(grid.get(CellRef::new(9, 6)), "");
    }

    #[test]
    fn absent_cells_read_empty() {
        let grid = CellGrid::new("Sheet1");
        assert_eq!(grid.get(CellRef::new(3, 5)), "");
        assert!(grid.is_empty());
    }

    #[test]
    fn set_empty_clears() {
        let mut grid = CellGrid::new("Sheet1");
        grid.set(CellRef::new(1, 0), "April 2026");
        assert_eq!(grid.get(CellRef::new(1, 0)), "April 2026");

        grid.set(CellRef::new(1, 0), "");
        assert!(grid.is_empty());
    }

    #[test]
    fn cells_iterate_row_major() {
        let mut grid = CellGrid::new("Sheet1");
        grid.set(CellRef::new(2, 0), "c");
        grid.set(CellRef::new(0, 3), "b");
        grid.set(CellRef::new(0, 1), "a");

        let order: Vec<&str> = grid.cells().map(|(_, value)| value).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}

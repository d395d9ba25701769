//! Dense cell grid over a sheet's used range.

use calamine::{Data, Range};

use super::cell::normalize_cell;

/// A rectangular, row-major grid of normalized cell strings covering
/// exactly the sheet's used range. Empty cells are empty strings,
/// never absent; every row has the same length.
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    pub cells: Vec<Vec<String>>,
    /// 0-based sheet row of the grid's top-left cell.
    pub origin_row: u32,
    /// 0-based sheet column of the grid's top-left cell.
    pub origin_col: u32,
}

impl SheetGrid {
    /// Grid anchored at the sheet origin — the common case in tests
    /// and for sheets whose used range starts at A1.
    pub fn from_rows(cells: Vec<Vec<String>>) -> Self {
        Self {
            cells,
            origin_row: 0,
            origin_col: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }
}

/// Read a used range into a dense grid of normalized strings.
/// A sheet with no cells yields an empty grid.
pub fn read_grid(range: &Range<Data>) -> SheetGrid {
    let Some((origin_row, origin_col)) = range.start() else {
        return SheetGrid::default();
    };

    let cells = range
        .rows()
        .map(|row| row.iter().map(normalize_cell).collect())
        .collect();

    SheetGrid {
        cells,
        origin_row,
        origin_col,
    }
}

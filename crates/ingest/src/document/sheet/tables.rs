//! Table region detection.
//!
//! Greedy row-major scan: at each unvisited non-empty cell, try to
//! grow a header-plus-data region downward and rightward. Claimed
//! cells go into a flat visited bitmap so no cell belongs to more
//! than one region. Scan order makes the result deterministic.

use serde::Serialize;

use super::grid::SheetGrid;

/// Coarse classification of a detected region's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    DataTable,
    SummaryTable,
    List,
    SingleValues,
}

impl TableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::DataTable => "data_table",
            TableType::SummaryTable => "summary_table",
            TableType::List => "list",
            TableType::SingleValues => "single_values",
        }
    }

    /// Humanized form used in rendered table titles.
    pub fn label(&self) -> &'static str {
        match self {
            TableType::DataTable => "Data Table",
            TableType::SummaryTable => "Summary Table",
            TableType::List => "List",
            TableType::SingleValues => "Single Values",
        }
    }
}

/// A contiguous header-plus-data block within a sheet.
///
/// Coordinates are 0-based and sheet-global (grid origin applied).
/// Regions from one sheet never overlap and always span at least the
/// configured minimum row count.
#[derive(Debug, Clone, Serialize)]
pub struct TableRegion {
    pub start_row: u32,
    pub end_row: u32,
    pub start_col: u32,
    pub end_col: u32,
    pub headers: Vec<String>,
    pub data_rows: Vec<Vec<String>>,
    pub table_type: TableType,
}

/// Scan a grid for table regions, in row-major discovery order.
pub fn detect_tables(grid: &SheetGrid, min_table_rows: usize) -> Vec<TableRegion> {
    if grid.is_empty() {
        return Vec::new();
    }
    let height = grid.height();
    let width = grid.width();
    let mut visited = vec![false; height * width];
    let mut regions = Vec::new();

    for row in 0..height {
        for col in 0..width {
            if visited[row * width + col] || grid.cells[row][col].is_empty() {
                continue;
            }
            let Some(region) = grow_region(grid, row, col, min_table_rows) else {
                continue;
            };
            // Claim every cell in the region, grid-local.
            let local_end_row = (region.end_row - grid.origin_row) as usize;
            let local_end_col = (region.end_col - grid.origin_col) as usize;
            for r in row..=local_end_row {
                for c in col..=local_end_col {
                    visited[r * width + c] = true;
                }
            }
            regions.push(region);
        }
    }
    regions
}

/// Try to grow a region whose header row starts at grid-local
/// `(start_row, start_col)`. Returns None when the spot fails the
/// header test or the region is below the minimum row count — the
/// scan then simply moves on.
fn grow_region(
    grid: &SheetGrid,
    start_row: usize,
    start_col: usize,
    min_table_rows: usize,
) -> Option<TableRegion> {
    let header_row = &grid.cells[start_row];
    if !is_potential_header(header_row, start_col) {
        return None;
    }

    let end_row = find_end_row(grid, start_row);
    let end_col = find_end_col(header_row, start_col);

    if end_row - start_row + 1 < min_table_rows {
        return None;
    }

    let headers: Vec<String> = header_row[start_col..=end_col].to_vec();
    let data_rows: Vec<Vec<String>> = (start_row + 1..=end_row)
        .map(|r| grid.cells[r][start_col..=end_col].to_vec())
        .collect();
    let table_type = classify(&headers, &data_rows);

    Some(TableRegion {
        start_row: start_row as u32 + grid.origin_row,
        end_row: end_row as u32 + grid.origin_row,
        start_col: start_col as u32 + grid.origin_col,
        end_col: end_col as u32 + grid.origin_col,
        headers,
        data_rows,
        table_type,
    })
}

/// A header row has at least two non-empty cells from the start
/// column onward.
fn is_potential_header(row: &[String], start_col: usize) -> bool {
    row[start_col..].iter().filter(|c| !c.is_empty()).count() >= 2
}

/// Last non-empty row before two consecutive fully empty rows (or the
/// grid's last row). A single blank row inside a table does not end it.
fn find_end_row(grid: &SheetGrid, start_row: usize) -> usize {
    let mut end_row = start_row;
    let mut consecutive_empty = 0;

    for next in start_row + 1..grid.height() {
        if grid.cells[next].iter().all(|c| c.is_empty()) {
            consecutive_empty += 1;
            if consecutive_empty >= 2 {
                break;
            }
        } else {
            consecutive_empty = 0;
            end_row = next;
        }
    }
    end_row
}

/// Last non-empty header cell at or after the start column.
fn find_end_col(header_row: &[String], start_col: usize) -> usize {
    let mut end_col = start_col;
    for (offset, cell) in header_row[start_col..].iter().enumerate() {
        if !cell.is_empty() {
            end_col = start_col + offset;
        }
    }
    end_col
}

/// Classify a region from its first five data rows: a column is
/// numeric when at least 70% of its sampled cells parse as numbers
/// (after stripping `,` `$` `%`); a region with at least 50% numeric
/// columns is a summary or data table by row count, otherwise single
/// values or a list.
fn classify(headers: &[String], data_rows: &[Vec<String>]) -> TableType {
    if headers.is_empty() || data_rows.is_empty() {
        return TableType::SingleValues;
    }

    let sample = &data_rows[..data_rows.len().min(5)];
    let mut numeric_cols = 0;
    for col in 0..headers.len() {
        let numeric = sample.iter().filter(|row| is_numeric(&row[col])).count();
        if numeric * 10 >= sample.len() * 7 {
            numeric_cols += 1;
        }
    }

    if numeric_cols * 2 >= headers.len() {
        if data_rows.len() <= 10 {
            TableType::SummaryTable
        } else {
            TableType::DataTable
        }
    } else if data_rows.len() <= 3 {
        TableType::SingleValues
    } else {
        TableType::List
    }
}

fn is_numeric(cell: &str) -> bool {
    let cleaned: String = cell
        .chars()
        .filter(|ch| !matches!(ch, ',' | '$' | '%'))
        .collect();
    let cleaned = cleaned.trim();
    !cleaned.is_empty() && cleaned.parse::<f64>().is_ok()
}

//! Table-aware spreadsheet extraction.
//!
//! Per sheet: read the used range into a normalized cell grid, detect
//! table regions, render the sheet as structured text, and (when the
//! text exceeds the chunk budget) split it without ever cutting a
//! table. Sheets are independent; a failure in one never aborts the
//! rest of the workbook.

mod cell;
mod grid;
mod render;
mod split;
mod tables;


pub use cell::normalize_cell;
pub use grid::{read_grid, SheetGrid};
pub use render::{render_sheet, table_title};
pub use split::split_rendered;
pub use tables::{detect_tables, TableRegion, TableType};

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use serde::Serialize;
use sheetsplit_core::SpreadsheetConfig;
use tracing::{info, warn};

use super::ExtractionError;

/// One sheet's extracted content. Immutable once built; sheets whose
/// rendered text falls below the configured minimum are dropped at
/// extraction and never reach chunking.
#[derive(Debug, Clone, Serialize)]
pub struct SheetContent {
    pub sheet_name: String,
    pub rendered_text: String,
    pub tables: Vec<TableRegion>,
}

/// A sheet that could not be read; recorded, not fatal.
#[derive(Debug, Clone, Serialize)]
pub struct SheetFailure {
    pub sheet_name: String,
    pub message: String,
}

/// All extractable content of one workbook, in sheet order.
#[derive(Debug, Clone, Serialize)]
pub struct WorkbookContent {
    pub filename: String,
    pub sheets: Vec<SheetContent>,
    pub failures: Vec<SheetFailure>,
}

/// Open workbook bytes and extract every sheet.
///
/// A workbook that cannot be opened at all is a decode failure; the
/// caller decides whether to fall back to another strategy. Per-sheet
/// read errors are collected in `failures` while the remaining sheets
/// proceed.
pub fn extract_workbook(
    bytes: &[u8],
    filename: &str,
    config: &SpreadsheetConfig,
) -> Result<WorkbookContent, ExtractionError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| ExtractionError::Decode(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::new();
    let mut failures = Vec::new();

    for sheet_name in sheet_names {
        match workbook.worksheet_range(&sheet_name) {
            Ok(range) => match process_sheet(&sheet_name, &range, config) {
                Some(content) => {
                    info!(
                        sheet = %sheet_name,
                        tables = content.tables.len(),
                        chars = content.rendered_text.len(),
                        "sheet extracted"
                    );
                    sheets.push(content);
                }
                None => {
                    warn!(sheet = %sheet_name, "sheet skipped: insufficient content");
                }
            },
            Err(e) => {
                warn!(sheet = %sheet_name, error = %e, "sheet skipped: range read failed");
                failures.push(SheetFailure {
                    sheet_name,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(WorkbookContent {
        filename: filename.to_string(),
        sheets,
        failures,
    })
}

/// Run the per-sheet pipeline: grid → regions → rendered text.
/// Returns None when the sheet holds too little content to index.
pub fn process_sheet(
    sheet_name: &str,
    range: &Range<Data>,
    config: &SpreadsheetConfig,
) -> Option<SheetContent> {
    let grid = read_grid(range);
    let tables = detect_tables(&grid, config.min_table_rows);
    let rendered_text = render_sheet(sheet_name, &grid, &tables, config.preview_rows);

    if rendered_text.trim().len() < config.min_sheet_content {
        return None;
    }

    Some(SheetContent {
        sheet_name: sheet_name.to_string(),
        rendered_text,
        tables,
    })
}

//! Table-aware document extraction and chunking.
//!
//! Turns office documents into bounded-size text chunks for embedding
//! and retrieval. Spreadsheets go through a table-preserving pipeline
//! (cell grid → table region detection → structured rendering → split
//! at table boundaries); plain text goes through an overlapping
//! window chunker. Both produce the same `ChunkRecord` shape.
//!
//! Everything here is pure and synchronous; callers parallelize per
//! document or per sheet however they like.

pub mod assembler;
pub mod document;

use sheetsplit_core::{ChunkRecord, Config, DocumentMetadata, SheetsplitError};
use tracing::info;

use document::sheet::{self, SheetContent};
use document::text;

/// Extract and chunk a spreadsheet workbook.
///
/// Sheets that decode but hold too little content are skipped; sheets
/// that fail to decode are logged and skipped without aborting the
/// rest. Chunk order is sheet order, then part order within a sheet.
pub fn process_workbook(
    bytes: &[u8],
    filename: &str,
    metadata: &DocumentMetadata,
    config: &Config,
) -> Result<Vec<ChunkRecord>, SheetsplitError> {
    Ok(chunk_workbook(bytes, filename, metadata, config)?)
}

pub(crate) fn chunk_workbook(
    bytes: &[u8],
    filename: &str,
    metadata: &DocumentMetadata,
    config: &Config,
) -> Result<Vec<ChunkRecord>, document::ExtractionError> {
    let workbook = sheet::extract_workbook(bytes, filename, &config.spreadsheet)?;
    let sheet_count = workbook.sheets.len();

    let mut records = Vec::new();
    for (sheet_index, content) in workbook.sheets.iter().enumerate() {
        records.extend(chunk_sheet(content, sheet_index, sheet_count, metadata, config));
    }

    info!(
        filename,
        sheets = sheet_count,
        failed_sheets = workbook.failures.len(),
        chunks = records.len(),
        "workbook chunked"
    );
    Ok(records)
}

/// Chunk one extracted sheet, splitting only when it exceeds the
/// chunk budget and never inside a table.
fn chunk_sheet(
    content: &SheetContent,
    sheet_index: usize,
    sheet_count: usize,
    metadata: &DocumentMetadata,
    config: &Config,
) -> Vec<ChunkRecord> {
    let max = config.spreadsheet.max_chunk_size;
    if content.rendered_text.len() <= max {
        return vec![assembler::sheet_chunk(
            content,
            sheet_index,
            sheet_count,
            metadata,
        )];
    }

    sheet::split_rendered(&content.rendered_text, &content.tables, max)
        .into_iter()
        .enumerate()
        .map(|(part_index, part)| {
            assembler::sheet_part_chunk(content, sheet_index, part_index, part, sheet_count, metadata)
        })
        .collect()
}

/// Chunk plain extracted text into overlapping windows.
pub fn process_text(
    content: &str,
    metadata: &DocumentMetadata,
    config: &Config,
) -> Vec<ChunkRecord> {
    let windows = text::chunk_text(content, &config.text);
    let records: Vec<ChunkRecord> = windows
        .into_iter()
        .enumerate()
        .map(|(index, window)| assembler::text_chunk(window, index, metadata))
        .collect();
    info!(
        document_id = %metadata.document_id,
        chunks = records.len(),
        "text chunked"
    );
    records
}

/// Route raw bytes by filename extension and chunk accordingly.
pub fn process_document(
    bytes: &[u8],
    filename: &str,
    metadata: &DocumentMetadata,
    config: &Config,
) -> Result<Vec<ChunkRecord>, SheetsplitError> {
    Ok(document::process(bytes, filename, metadata, config)?)
}

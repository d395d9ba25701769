//! Chunk record assembly.
//!
//! Pure merge of chunk text with document metadata and provenance
//! fields. Inputs are well-formed by the time they arrive here, so
//! nothing in this module can fail.

use chrono::Utc;
use sheetsplit_core::{ChunkIndex, ChunkRecord, ChunkType, DocumentMetadata};

use crate::document::sheet::SheetContent;

/// Record for a sheet that fit in one chunk.
pub fn sheet_chunk(
    sheet: &SheetContent,
    sheet_index: usize,
    sheet_count: usize,
    metadata: &DocumentMetadata,
) -> ChunkRecord {
    let content = sheet.rendered_text.trim().to_string();
    let mut record = base_record(
        format!("{}_{}", metadata.document_id, sheet_index),
        ChunkIndex::Sheet(sheet_index),
        ChunkType::ExcelSheet,
        content,
        metadata,
    );
    set_sheet_fields(&mut record, sheet, sheet_index, sheet_count);
    record.table_count = Some(sheet.tables.len());
    record.table_types = Some(
        sheet
            .tables
            .iter()
            .map(|t| t.table_type.as_str().to_string())
            .collect(),
    );
    record
}

/// Record for one part of a sheet that was split across chunks.
pub fn sheet_part_chunk(
    sheet: &SheetContent,
    sheet_index: usize,
    part_index: usize,
    part_text: String,
    sheet_count: usize,
    metadata: &DocumentMetadata,
) -> ChunkRecord {
    let mut record = base_record(
        format!(
            "{}_{}_part_{}",
            metadata.document_id, sheet_index, part_index
        ),
        ChunkIndex::SheetPart {
            sheet: sheet_index,
            part: part_index,
        },
        ChunkType::ExcelSheetPart,
        part_text.trim().to_string(),
        metadata,
    );
    set_sheet_fields(&mut record, sheet, sheet_index, sheet_count);
    record.part_index = Some(part_index);
    record
}

/// Record for one plain-text window.
pub fn text_chunk(window: String, index: usize, metadata: &DocumentMetadata) -> ChunkRecord {
    base_record(
        format!("{}_{}", metadata.document_id, index),
        ChunkIndex::Text(index),
        ChunkType::TextSemantic,
        window,
        metadata,
    )
}

fn base_record(
    chunk_id: String,
    chunk_index: ChunkIndex,
    chunk_type: ChunkType,
    content: String,
    metadata: &DocumentMetadata,
) -> ChunkRecord {
    ChunkRecord {
        chunk_id,
        parent_id: metadata.document_id.clone(),
        chunk_index,
        chunk_type,
        chunk_length: content.len(),
        word_count: content.split_whitespace().count(),
        processed_at: Utc::now(),
        sheet_name: None,
        sheet_index: None,
        part_index: None,
        table_count: None,
        table_types: None,
        sheet_count: None,
        content,
        metadata: metadata.clone(),
    }
}

fn set_sheet_fields(
    record: &mut ChunkRecord,
    sheet: &SheetContent,
    sheet_index: usize,
    sheet_count: usize,
) {
    record.sheet_name = Some(sheet.sheet_name.clone());
    record.sheet_index = Some(sheet_index);
    record.sheet_count = Some(sheet_count);
}

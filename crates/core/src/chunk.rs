use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::metadata::DocumentMetadata;

/// Position of a chunk within its document.
///
/// Spreadsheet chunks are addressed by sheet (and part, when a large
/// sheet was split); plain-text chunks by a running index. Serializes
/// as `"3"` or `"3.1"` so the search index sees one sortable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkIndex {
    Sheet(usize),
    SheetPart { sheet: usize, part: usize },
    Text(usize),
}

impl fmt::Display for ChunkIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkIndex::Sheet(i) | ChunkIndex::Text(i) => write!(f, "{i}"),
            ChunkIndex::SheetPart { sheet, part } => write!(f, "{sheet}.{part}"),
        }
    }
}

impl Serialize for ChunkIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChunkIndex {
    /// Parses the serialized string form. A flat index reads back as
    /// `Sheet`; the stored `chunk_type` disambiguates sheet vs text
    /// chunks, not this field.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.split_once('.') {
            Some((sheet, part)) => Ok(ChunkIndex::SheetPart {
                sheet: sheet.parse().map_err(de::Error::custom)?,
                part: part.parse().map_err(de::Error::custom)?,
            }),
            None => s
                .parse()
                .map(ChunkIndex::Sheet)
                .map_err(de::Error::custom),
        }
    }
}

/// What kind of content a chunk carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    /// A whole spreadsheet sheet that fit in one chunk.
    ExcelSheet,
    /// One part of a sheet too large for a single chunk.
    ExcelSheetPart,
    /// A window of plain extracted text.
    TextSemantic,
}

/// The final record handed to the embedding/indexing pipeline.
///
/// Created once, never mutated. `content` is always non-empty and for
/// spreadsheet chunks never contains a partial table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Unique within the document: `{document_id}_{sheet}`,
    /// `{document_id}_{sheet}_part_{part}` or `{document_id}_{index}`.
    pub chunk_id: String,
    /// The owning document's id.
    pub parent_id: String,
    pub chunk_index: ChunkIndex,
    pub chunk_type: ChunkType,
    /// The chunk text.
    pub content: String,
    pub chunk_length: usize,
    pub word_count: usize,
    pub processed_at: DateTime<Utc>,

    // Spreadsheet provenance, absent on text chunks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_types: Option<Vec<String>>,
    /// Total sheets kept from the workbook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_count: Option<usize>,

    #[serde(flatten)]
    pub metadata: DocumentMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_index_renders_flat_and_dotted() {
        assert_eq!(ChunkIndex::Sheet(3).to_string(), "3");
        assert_eq!(ChunkIndex::Text(0).to_string(), "0");
        assert_eq!(ChunkIndex::SheetPart { sheet: 3, part: 1 }.to_string(), "3.1");
    }

    #[test]
    fn chunk_index_serializes_as_string() {
        let v = serde_json::to_value(ChunkIndex::SheetPart { sheet: 2, part: 0 }).unwrap();
        assert_eq!(v, serde_json::json!("2.0"));
    }

    #[test]
    fn chunk_index_parses_back_from_string() {
        let dotted: ChunkIndex = serde_json::from_value(serde_json::json!("3.1")).unwrap();
        assert_eq!(dotted, ChunkIndex::SheetPart { sheet: 3, part: 1 });
        let flat: ChunkIndex = serde_json::from_value(serde_json::json!("7")).unwrap();
        assert_eq!(flat, ChunkIndex::Sheet(7));
        assert!(serde_json::from_value::<ChunkIndex>(serde_json::json!("x.y")).is_err());
    }

    #[test]
    fn chunk_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ChunkType::ExcelSheetPart).unwrap(),
            serde_json::json!("excel_sheet_part")
        );
        assert_eq!(
            serde_json::to_value(ChunkType::TextSemantic).unwrap(),
            serde_json::json!("text_semantic")
        );
    }

    #[test]
    fn record_flattens_metadata_into_top_level_fields() {
        let record = ChunkRecord {
            chunk_id: "doc-1_0".to_string(),
            parent_id: "doc-1".to_string(),
            chunk_index: ChunkIndex::Sheet(0),
            chunk_type: ChunkType::ExcelSheet,
            content: "Sheet: Q1".to_string(),
            chunk_length: 9,
            word_count: 2,
            processed_at: Utc::now(),
            sheet_name: Some("Q1".to_string()),
            sheet_index: Some(0),
            part_index: None,
            table_count: Some(1),
            table_types: Some(vec!["list".to_string()]),
            sheet_count: Some(1),
            metadata: DocumentMetadata::new("doc-1", "q1.xlsx"),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["chunk_id"], "doc-1_0");
        assert_eq!(json["filename"], "q1.xlsx");
        assert_eq!(json["chunk_index"], "0");
        assert!(json.get("part_index").is_none());
    }
}

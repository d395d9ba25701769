pub mod sheet;
pub mod text;

use sheetsplit_core::{ChunkRecord, Config, DocumentMetadata, SheetsplitError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("Workbook decode failed: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExtractionError> for SheetsplitError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::UnsupportedType(t) => SheetsplitError::UnsupportedType(t),
            ExtractionError::Decode(m) => SheetsplitError::Decode(m),
            ExtractionError::Io(e) => SheetsplitError::Io(e),
        }
    }
}

/// Spreadsheet extensions handled by the table-aware pipeline.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Extract and chunk file bytes based on filename extension.
///
/// Spreadsheets go through the table-aware pipeline; anything text-like
/// is decoded as UTF-8 (lossy on invalid bytes) and window-chunked.
pub fn process(
    bytes: &[u8],
    filename: &str,
    metadata: &DocumentMetadata,
    config: &Config,
) -> Result<Vec<ChunkRecord>, ExtractionError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        return crate::chunk_workbook(bytes, filename, metadata, config);
    }

    match ext.as_str() {
        "txt" | "text" | "md" | "markdown" | "csv" => {
            let content = String::from_utf8(bytes.to_vec())
                .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());
            Ok(crate::process_text(&content, metadata, config))
        }
        other => Err(ExtractionError::UnsupportedType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_extension_routes_to_text_chunker() {
        let meta = DocumentMetadata::new("doc-1", "notes.txt");
        let config = Config::default();
        let body = "word ".repeat(60);
        let records = process(body.as_bytes(), "notes.txt", &meta, &config).unwrap();
        assert!(!records.is_empty());
        assert!(records[0].chunk_id.starts_with("doc-1_"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let meta = DocumentMetadata::new("doc-1", "image.png");
        let config = Config::default();
        let err = process(b"\x89PNG", "image.png", &meta, &config).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(ext) if ext == "png"));
    }

    #[test]
    fn garbage_spreadsheet_bytes_report_decode_failure() {
        let meta = DocumentMetadata::new("doc-1", "broken.xlsx");
        let config = Config::default();
        let err = process(b"not a zip archive", "broken.xlsx", &meta, &config).unwrap_err();
        assert!(matches!(err, ExtractionError::Decode(_)));
    }
}

use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

/// Chunking parameters for both pipelines. `Default` gives the values
/// the service has always run with; `from_env` lets deployments tune
/// them via `SHEETSPLIT_*` variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub spreadsheet: SpreadsheetConfig,
    pub text: TextChunkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetConfig {
    /// Soft character budget per chunk. A table larger than this stays
    /// whole in one oversized chunk.
    pub max_chunk_size: usize,
    /// Minimum rows (header included) for a detected table region.
    pub min_table_rows: usize,
    /// Sheets whose rendered text is shorter than this are dropped.
    pub min_sheet_content: usize,
    /// Data rows rendered per table before the truncation summary.
    pub preview_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChunkConfig {
    /// Target characters per chunk.
    pub chunk_size: usize,
    /// Trailing characters repeated at the start of the next chunk.
    pub overlap: usize,
    /// Documents shorter than this produce no chunks.
    pub min_chunk_size: usize,
    /// Hard cap on chunks per document.
    pub max_chunks: usize,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 8000,
            min_table_rows: 2,
            min_sheet_content: 50,
            preview_rows: 20,
        }
    }
}

impl Default for TextChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 100,
            min_chunk_size: 100,
            max_chunks: 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet: SpreadsheetConfig::default(),
            text: TextChunkConfig::default(),
        }
    }
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        let d = Config::default();
        Self {
            spreadsheet: SpreadsheetConfig {
                max_chunk_size: env_usize(
                    "SHEETSPLIT_MAX_CHUNK_SIZE",
                    d.spreadsheet.max_chunk_size,
                ),
                min_table_rows: env_usize(
                    "SHEETSPLIT_MIN_TABLE_ROWS",
                    d.spreadsheet.min_table_rows,
                ),
                min_sheet_content: env_usize(
                    "SHEETSPLIT_MIN_SHEET_CONTENT",
                    d.spreadsheet.min_sheet_content,
                ),
                preview_rows: env_usize("SHEETSPLIT_PREVIEW_ROWS", d.spreadsheet.preview_rows),
            },
            text: TextChunkConfig {
                chunk_size: env_usize("SHEETSPLIT_TEXT_CHUNK_SIZE", d.text.chunk_size),
                overlap: env_usize("SHEETSPLIT_TEXT_OVERLAP", d.text.overlap),
                min_chunk_size: env_usize("SHEETSPLIT_TEXT_MIN_CHUNK_SIZE", d.text.min_chunk_size),
                max_chunks: env_usize("SHEETSPLIT_TEXT_MAX_CHUNKS", d.text.max_chunks),
            },
        }
    }
}

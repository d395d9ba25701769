pub mod chunk;
pub mod config;
pub mod error;
pub mod metadata;

pub use chunk::{ChunkIndex, ChunkRecord, ChunkType};
pub use config::{Config, SpreadsheetConfig, TextChunkConfig};
pub use error::SheetsplitError;
pub use metadata::DocumentMetadata;

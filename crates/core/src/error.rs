use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook decode failed: {0}")]
    Decode(String),

    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("{0}")]
    Other(String),
}

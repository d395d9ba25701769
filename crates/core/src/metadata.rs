use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document-level metadata merged into every chunk record.
///
/// Produced upstream by whatever metadata extractor the caller runs
/// (path tagging, client detection, …) — this crate only copies it
/// through. Known fields are explicit so required vs. optional stays
/// statically checkable; anything else travels in `extra` and is
/// flattened on serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub document_id: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_category: Option<String>,
    /// Caller-supplied tags with no dedicated field.
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl DocumentMetadata {
    pub fn new(document_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            filename: filename.into(),
            document_path: None,
            client_name: None,
            pm_name: None,
            document_category: None,
            extra: HashMap::new(),
        }
    }

    /// Metadata for a document the caller has not assigned an id to.
    pub fn with_generated_id(filename: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), filename)
    }
}

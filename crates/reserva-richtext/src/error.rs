//! Error types for rich-text ingestion.

/// Error while parsing rich-text nodes from external input.
///
/// Rendering itself never fails; only the JSON ingestion surface does.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RichTextError {
    /// JSON deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

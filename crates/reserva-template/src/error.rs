//! Error types for template value ingestion.

/// Error while building a [`crate::Value`] from external input.
///
/// Substitution itself never fails; only the JSON ingestion surface does.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// JSON deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

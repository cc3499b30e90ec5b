use thiserror::Error;

/// Application-level error type.
///
/// Every fallible operation is attempted exactly once per user action; there
/// is no retry layer anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable-storage read/write failed. Callers log this and keep going:
    /// the in-memory aggregate stays authoritative for the session.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted or imported JSON that does not describe the aggregate.
    /// Deserialization falls back to defaults; imports abort with prior
    /// state intact.
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// PDF construction or byte generation failed. No partial file exists.
    #[error("Export failed: {0}")]
    Export(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

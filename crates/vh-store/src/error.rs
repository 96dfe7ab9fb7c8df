//! Error types for the storage layer.

use thiserror::Error;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or saving data files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a data file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file contained malformed JSON.
    #[error("malformed data file: {0}")]
    Json(#[from] serde_json::Error),

    /// A template with this name already exists in the library.
    #[error("template already exists: \"{0}\"")]
    DuplicateTemplate(String),

    /// No template with this name exists in the library.
    #[error("template not found: \"{0}\"")]
    TemplateNotFound(String),
}

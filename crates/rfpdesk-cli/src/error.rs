//! Error types for the CLI application.

use rfpdesk_llm::LlmError;
use rfpdesk_router::AssistantError;
use rfpdesk_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model client could not be set up
    #[error("Model error: {0}")]
    Llm(#[from] LlmError),

    /// Persisted documents could not be read or written
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Upload or question failed
    #[error("{0}")]
    Assistant(#[from] AssistantError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No document with this id
    #[error("Document with ID {0} not found")]
    DocumentNotFound(u64),

    /// Some files in a batch upload failed
    #[error("{failed} of {total} upload(s) failed")]
    UploadsFailed {
        /// Number of failed files
        failed: usize,
        /// Number of files attempted
        total: usize,
    },
}

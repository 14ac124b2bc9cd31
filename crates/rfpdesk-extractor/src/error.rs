//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Any of these means the upload produced no document; nothing has been
/// stored.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error (network, auth, rate limit)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Nothing to extract from
    #[error("Text is empty")]
    EmptyText,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Model output does not have the document shape
    #[error("Invalid document format: {0}")]
    InvalidFormat(String),

    /// A required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::InvalidFormat(format!("JSON parse error: {}", e))
    }
}

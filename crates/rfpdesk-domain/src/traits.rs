//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::chat::{ChatRequest, ModelReply};
use crate::record::DocumentRecord;

/// Trait for language model providers
///
/// Implemented by the infrastructure layer (rfpdesk-llm). Calls are blocking;
/// timeouts belong to the transport.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Send one request and return the model's reply
    fn complete(&self, request: &ChatRequest) -> Result<ModelReply, Self::Error>;
}

/// Trait for reading and writing the persisted document list
///
/// Implemented by the infrastructure layer (rfpdesk-store). There is no
/// locking: a single writer per persisted location is assumed.
pub trait DocumentPersistence {
    /// Error type for persistence operations
    type Error;

    /// Read every persisted document
    ///
    /// Missing or unreadable state yields an empty list rather than an error.
    fn load(&self) -> Result<Vec<DocumentRecord>, Self::Error>;

    /// Replace the persisted state with `records`
    fn save(&self, records: &[DocumentRecord]) -> Result<(), Self::Error>;

    /// Delete the persisted state
    fn clear(&self) -> Result<(), Self::Error>;
}

//! RFP Desk Domain Layer
//!
//! Core types and trait boundaries for the RFP assistant. Like every domain
//! crate in this workspace it has no external dependencies: serialization,
//! HTTP and file I/O live in the infrastructure crates that implement the
//! traits declared here.
//!
//! ## Key Concepts
//!
//! - **DocumentRecord**: structured fields extracted from one RFP
//! - **DocumentStore**: ordered in-memory collection that assigns ids
//! - **ConversationHistory**: role-tagged turns of one chat session
//! - **ModelReply**: either a direct answer or a tool invocation
//!
//! ## Boundaries
//!
//! - [`traits::LlmProvider`] is implemented by `rfpdesk-llm`
//! - [`traits::DocumentPersistence`] is implemented by `rfpdesk-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod collection;
pub mod conversation;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use chat::{ChatRequest, ModelReply, ResponseConstraint, SchemaSpec, ToolInvocation, ToolSpec};
pub use collection::{DocumentStore, IdsExhausted};
pub use conversation::{ChatMessage, ConversationHistory, Role};
pub use record::{DocumentId, DocumentRecord};

//! RFP Desk Router
//!
//! Conversation routing and session handling.
//!
//! - [`ConversationRouter`] sends the history plus the full document
//!   snapshot to the model, and runs the tool it picks
//! - [`Session`] holds one user's history, documents and processed uploads
//! - [`Assistant`] drives a session: ingesting uploads and answering
//!   questions

#![warn(missing_docs)]

pub mod assistant;
pub mod conversation;
pub mod session;

pub use assistant::{Assistant, AssistantError};
pub use conversation::{ConversationRouter, RouterError, FALLBACK_REPLY};
pub use session::{IngestOutcome, Session, Upload};

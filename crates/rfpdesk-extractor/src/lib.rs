//! RFP Desk Extractor
//!
//! Turns the raw text of one RFP document into a [`DocumentRecord`] with a
//! single schema-constrained LLM call.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → LLM (rfp_document schema) → DocumentRecord → caller
//! ```
//!
//! The Extractor never writes to the store. Ids are assigned when the
//! caller appends the record.
//!
//! # Example Usage
//!
//! ```
//! use rfpdesk_extractor::{Extractor, ExtractorConfig};
//! use rfpdesk_llm::MockProvider;
//!
//! let llm = MockProvider::answering(r#"{"title": "Office Cleaning", "company": "Globex"}"#);
//! let extractor = Extractor::new(llm, ExtractorConfig::default()).unwrap();
//!
//! let record = extractor.extract("Globex invites bids for office cleaning.").unwrap();
//! assert_eq!(record.company, "Globex");
//! assert!(record.id().is_none());
//! ```
//!
//! [`DocumentRecord`]: rfpdesk_domain::DocumentRecord

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::parse_document;
pub use prompt::{document_schema, PromptBuilder, SCHEMA_NAME};

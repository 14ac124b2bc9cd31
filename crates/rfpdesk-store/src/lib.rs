//! RFP Desk Storage Layer
//!
//! Implements the `DocumentPersistence` trait from `rfpdesk-domain`.
//!
//! # Format
//!
//! The document list is kept as a pretty-printed JSON array. Every record is
//! written with all of its keys: absent optional fields (and an unassigned
//! id) appear as `null` rather than being omitted, so the file is easy to read
//! and edit by hand and re-loading it reproduces every field exactly.
//!
//! # Failure policy
//!
//! Loading is fail-soft. A missing file, or one that does not parse as a
//! document list, loads as an empty list and logs a warning; documents can
//! always be uploaded again. Other I/O errors are reported.
//!
//! # Examples
//!
//! ```no_run
//! use rfpdesk_domain::traits::DocumentPersistence;
//! use rfpdesk_store::JsonFileStore;
//!
//! let store = JsonFileStore::new("rfp_documents.json");
//! let documents = store.load().unwrap();
//! println!("{} documents", documents.len());
//! ```

#![warn(missing_docs)]

mod codec;
mod json_file;
mod memory;

use thiserror::Error;

pub use codec::{decode_documents, encode_documents, render_snapshot, StoredDocument};
pub use json_file::{JsonFileStore, DEFAULT_STORAGE_FILE};
pub use memory::MemoryStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing persisted state failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Documents could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Per-session state owned by the presentation layer.

use rfpdesk_domain::{ConversationHistory, DocumentRecord, DocumentStore};
use std::collections::HashSet;

/// One uploaded document, as raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// File name the text came from
    pub name: String,

    /// Document text
    pub content: String,
}

impl Upload {
    /// Create an upload
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Size of the content in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Key identifying this upload within a session: `{name}_{size}`
    pub fn dedupe_key(&self) -> String {
        format!("{}_{}", self.name, self.size())
    }
}

/// Result of ingesting one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A new record was extracted, stored and persisted
    Added(DocumentRecord),

    /// The same upload was already ingested in this session
    AlreadyProcessed,
}

/// Conversation history, documents and processed uploads of one session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) history: ConversationHistory,
    pub(crate) documents: DocumentStore,
    pub(crate) processed_uploads: HashSet<String>,
}

impl Session {
    /// Start a session over already-loaded documents
    pub fn new(documents: DocumentStore) -> Self {
        Self {
            history: ConversationHistory::new(),
            documents,
            processed_uploads: HashSet::new(),
        }
    }

    /// Conversation so far
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Documents known to this session
    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Whether `upload` has already been ingested
    pub fn is_processed(&self, upload: &Upload) -> bool {
        self.processed_uploads.contains(&upload.dedupe_key())
    }

    /// Number of uploads ingested in this session
    pub fn processed_count(&self) -> usize {
        self.processed_uploads.len()
    }
}

//! The assistant: upload ingestion and question answering over a session.

use crate::conversation::{ConversationRouter, RouterError};
use crate::session::{IngestOutcome, Session, Upload};
use rfpdesk_catalog::ToolRegistry;
use rfpdesk_domain::traits::{DocumentPersistence, LlmProvider};
use rfpdesk_domain::{DocumentStore, IdsExhausted};
use rfpdesk_extractor::{Extractor, ExtractorConfig, ExtractorError};
use rfpdesk_store::render_snapshot;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Assistant operation error
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Extraction failed; nothing was stored
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractorError),

    /// The conversational turn failed
    #[error(transparent)]
    Router(#[from] RouterError),

    /// The store has no id left for a new document
    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),

    /// Persisted state could not be read or written
    #[error("Storage error: {0}")]
    Store(String),
}

/// Wires extraction, routing and persistence together
pub struct Assistant<L, P>
where
    L: LlmProvider,
    P: DocumentPersistence,
{
    extractor: Extractor<L>,
    router: ConversationRouter<L, P>,
    persistence: Arc<P>,
}

impl<L, P> Assistant<L, P>
where
    L: LlmProvider,
    P: DocumentPersistence,
    L::Error: std::fmt::Display,
    P::Error: std::fmt::Display,
{
    /// Create an assistant sharing one model provider between extraction
    /// and conversation
    pub fn new(llm_provider: L, persistence: P, config: ExtractorConfig) -> Result<Self, AssistantError> {
        let llm_provider = Arc::new(llm_provider);
        let persistence = Arc::new(persistence);

        let extractor = Extractor::with_shared_provider(Arc::clone(&llm_provider), config)?;
        let router = ConversationRouter::new(llm_provider, Arc::clone(&persistence));

        Ok(Self {
            extractor,
            router,
            persistence,
        })
    }

    /// Replace the tools offered to the model
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.router = self.router.with_tools(tools);
        self
    }

    /// Start a session over the persisted documents
    pub fn open_session(&self) -> Result<Session, AssistantError> {
        let records = self.persistence.load().map_err(store_error)?;
        debug!("Opened session with {} documents", records.len());
        Ok(Session::new(DocumentStore::from_records(records)))
    }

    /// Extract, store and persist one upload
    ///
    /// An upload with the same name and size as one already ingested in
    /// this session is skipped without calling the model. On error the
    /// session and persisted state are unchanged.
    pub fn ingest(&self, session: &mut Session, upload: &Upload) -> Result<IngestOutcome, AssistantError> {
        if session.is_processed(upload) {
            debug!("Skipping '{}', already processed", upload.name);
            return Ok(IngestOutcome::AlreadyProcessed);
        }

        let record = self.extractor.extract(&upload.content)?;

        let mut staged = session.documents.clone();
        let stored = staged.append(record)?.clone();
        self.persistence.save(staged.records()).map_err(store_error)?;

        session.documents = staged;
        session.processed_uploads.insert(upload.dedupe_key());
        info!(
            "Ingested '{}' as document {}",
            upload.name,
            stored.id().map(|id| id.to_string()).unwrap_or_default()
        );

        Ok(IngestOutcome::Added(stored))
    }

    /// Answer `question` in the context of the session
    ///
    /// The question is recorded even when answering fails; the failure is
    /// then recorded as an apology turn and returned.
    pub fn ask(&self, session: &mut Session, question: &str) -> Result<String, AssistantError> {
        session.history.push_user(question);

        match self.answer(session) {
            Ok(reply) => {
                session.history.push_assistant(reply.clone());
                Ok(reply)
            }
            Err(e) => {
                session
                    .history
                    .push_assistant(format!("Sorry, I encountered an error: {}", e));
                Err(e)
            }
        }
    }

    fn answer(&self, session: &Session) -> Result<String, AssistantError> {
        let snapshot = render_snapshot(session.documents.records()).map_err(store_error)?;
        Ok(self.router.respond(&session.history, &snapshot)?)
    }

    /// Forget the conversation, keeping documents
    pub fn clear_chat(&self, session: &mut Session) {
        session.history.clear();
    }

    /// Delete every document, in the session and in persistence
    pub fn clear_documents(&self, session: &mut Session) -> Result<(), AssistantError> {
        self.persistence.clear().map_err(store_error)?;
        session.documents.clear();
        session.processed_uploads.clear();
        info!("Cleared all documents");
        Ok(())
    }
}

fn store_error(e: impl std::fmt::Display) -> AssistantError {
    AssistantError::Store(e.to_string())
}

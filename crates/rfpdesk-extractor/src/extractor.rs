//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_document;
use crate::prompt::PromptBuilder;
use rfpdesk_domain::traits::LlmProvider;
use rfpdesk_domain::{DocumentRecord, ModelReply};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The Extractor converts one document's raw text into a record
///
/// It makes exactly one model call per document and never touches the
/// store; the caller decides what to do with the result.
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        Self::with_shared_provider(Arc::new(llm_provider), config)
    }

    /// Create an Extractor using a provider shared with other components
    pub fn with_shared_provider(
        llm_provider: Arc<L>,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { llm_provider, config })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a record from `text`
    ///
    /// The returned record has no id. On any error nothing has been
    /// produced.
    pub fn extract(&self, text: &str) -> Result<DocumentRecord, ExtractorError> {
        if text.trim().is_empty() {
            return Err(ExtractorError::EmptyText);
        }

        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.config.max_text_length));
        }

        info!("Starting extraction, text length {}", length);

        let request = PromptBuilder::new(text).build();
        let reply = self
            .llm_provider
            .complete(&request)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        let content = match reply {
            ModelReply::Answer(content) => content,
            ModelReply::Empty => {
                warn!("Model returned no content for extraction");
                return Err(ExtractorError::InvalidFormat("Model returned no content".to_string()));
            }
            ModelReply::ToolCalls(calls) => {
                warn!("Model returned {} tool call(s) instead of a document", calls.len());
                return Err(ExtractorError::InvalidFormat(
                    "Model returned a tool call instead of a document".to_string(),
                ));
            }
        };

        debug!("Extraction response length: {} chars", content.len());

        let record = parse_document(&content)?;
        info!("Extracted document '{}' from '{}'", record.title, record.company);
        Ok(record)
    }
}

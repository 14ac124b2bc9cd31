//! Conversation routing: context injection, model call, tool dispatch.

use rfpdesk_catalog::ToolRegistry;
use rfpdesk_domain::traits::{DocumentPersistence, LlmProvider};
use rfpdesk_domain::{ChatMessage, ChatRequest, ConversationHistory, ModelReply, ToolInvocation};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reply used when the model returns neither text nor a tool call
pub const FALLBACK_REPLY: &str = "No response generated.";

/// Conversation routing error
#[derive(Debug, Error)]
pub enum RouterError {
    /// Model service failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Documents could not be reloaded for a tool call
    #[error("Storage error: {0}")]
    Store(String),
}

/// Routes one conversational turn through the model
///
/// Every turn carries the full document snapshot as context. When the model
/// chooses a tool, the documents are re-read from persistence so the tool
/// sees what is actually stored.
pub struct ConversationRouter<L, P>
where
    L: LlmProvider,
    P: DocumentPersistence,
{
    llm_provider: Arc<L>,
    persistence: Arc<P>,
    tools: ToolRegistry,
}

impl<L, P> ConversationRouter<L, P>
where
    L: LlmProvider,
    P: DocumentPersistence,
    L::Error: std::fmt::Display,
    P::Error: std::fmt::Display,
{
    /// Create a router offering the standard tools
    pub fn new(llm_provider: Arc<L>, persistence: Arc<P>) -> Self {
        Self {
            llm_provider,
            persistence,
            tools: ToolRegistry::standard(),
        }
    }

    /// Replace the tool registry
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Tools declared to the model
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Build the request for `history` with `snapshot` as context
    pub fn build_request(&self, history: &ConversationHistory, snapshot: &str) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(system_instruction(snapshot)));
        messages.extend(history.turns().iter().cloned());

        ChatRequest::new(messages).with_tools(self.tools.specs())
    }

    /// Produce the assistant's reply to the conversation so far
    ///
    /// `snapshot` is the serialized document list. Tool argument problems
    /// are reported in the reply text, not as errors.
    pub fn respond(&self, history: &ConversationHistory, snapshot: &str) -> Result<String, RouterError> {
        let request = self.build_request(history, snapshot);
        debug!(
            "Routing turn: {} messages, {} tools, context {} chars",
            request.messages.len(),
            self.tools.len(),
            snapshot.len()
        );

        let reply = self
            .llm_provider
            .complete(&request)
            .map_err(|e| RouterError::Llm(e.to_string()))?;

        match reply {
            ModelReply::Answer(text) => Ok(text),
            ModelReply::Empty => Ok(FALLBACK_REPLY.to_string()),
            ModelReply::ToolCalls(calls) => self.run_tool(&calls),
        }
    }

    fn run_tool(&self, calls: &[ToolInvocation]) -> Result<String, RouterError> {
        let Some(call) = calls.first() else {
            return Ok(FALLBACK_REPLY.to_string());
        };
        if calls.len() > 1 {
            warn!(
                "Model requested {} tool calls; running only '{}'",
                calls.len(),
                call.name
            );
        }

        let documents = self
            .persistence
            .load()
            .map_err(|e| RouterError::Store(e.to_string()))?;

        info!("Dispatching tool '{}'", call.name);
        match self.tools.dispatch(call, &documents) {
            Ok(output) => Ok(output),
            Err(e) => Ok(format!("Unable to run tool: {}", e)),
        }
    }
}

fn system_instruction(snapshot: &str) -> String {
    format!(
        "You are a helpful assistant for answering questions about RFP documents.\n\
         You have access to the following RFP documents:\n\n\
         {}\n\n\
         Use the provided tools to show document summaries or tables when requested.\n\
         Answer questions accurately based on the document information provided.",
        snapshot
    )
}

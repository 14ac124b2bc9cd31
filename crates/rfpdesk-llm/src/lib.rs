//! RFP Desk LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `rfpdesk-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: scripted replies for testing, records every request
//! - `AzureOpenAiProvider`: Azure OpenAI chat completions, with structured
//!   output and tool calling
//!
//! # Examples
//!
//! ```
//! use rfpdesk_domain::traits::LlmProvider;
//! use rfpdesk_domain::{ChatMessage, ChatRequest, ModelReply};
//! use rfpdesk_llm::MockProvider;
//!
//! let provider = MockProvider::answering("Hello from LLM!");
//! let request = ChatRequest::new(vec![ChatMessage::user("hi")]);
//! let reply = provider.complete(&request).unwrap();
//! assert_eq!(reply, ModelReply::Answer("Hello from LLM!".into()));
//! ```

#![warn(missing_docs)]

pub mod azure;

use rfpdesk_domain::traits::LlmProvider as LlmProviderTrait;
use rfpdesk_domain::{ChatRequest, ModelReply, ToolInvocation};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use azure::{AzureOpenAiConfig, AzureOpenAiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Credentials missing or rejected
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model or deployment not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// The request could not be built (e.g. a schema that is not JSON)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl LlmError {
    /// Whether repeating the same request might succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, LlmError::Communication(_) | LlmError::RateLimitExceeded)
    }
}

/// Mock LLM provider for deterministic testing
///
/// Replies are taken from a queue in the order they were pushed; once the
/// queue is empty the default reply is returned. Every request is recorded
/// so tests can inspect what the model was sent.
///
/// # Examples
///
/// ```
/// use rfpdesk_domain::traits::LlmProvider;
/// use rfpdesk_domain::{ChatRequest, ModelReply};
/// use rfpdesk_llm::MockProvider;
///
/// let provider = MockProvider::default();
/// provider.push_tool_call("show_document_table", r#"{"ids": []}"#);
///
/// let reply = provider.complete(&ChatRequest::new(vec![])).unwrap();
/// assert!(matches!(reply, ModelReply::ToolCalls(_)));
/// assert_eq!(provider.complete(&ChatRequest::new(vec![])).unwrap(), ModelReply::Empty);
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: ModelReply,
    script: Arc<Mutex<VecDeque<Result<ModelReply, LlmError>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    /// Create a MockProvider returning `reply` for every request
    pub fn new(reply: ModelReply) -> Self {
        Self {
            default_reply: reply,
            script: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider answering every request with `text`
    pub fn answering(text: impl Into<String>) -> Self {
        Self::new(ModelReply::Answer(text.into()))
    }

    /// Queue a reply for the next unanswered request
    pub fn push_reply(&self, reply: ModelReply) {
        lock(&self.script).push_back(Ok(reply));
    }

    /// Queue a direct text answer
    pub fn push_answer(&self, text: impl Into<String>) {
        self.push_reply(ModelReply::Answer(text.into()));
    }

    /// Queue a single tool call
    pub fn push_tool_call(&self, name: impl Into<String>, arguments: impl Into<String>) {
        self.push_reply(ModelReply::ToolCalls(vec![ToolInvocation::new(name, arguments)]));
    }

    /// Queue a failure for the next unanswered request
    pub fn push_error(&self, error: LlmError) {
        lock(&self.script).push_back(Err(error));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<ChatRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<ChatRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(ModelReply::Empty)
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn complete(&self, request: &ChatRequest) -> Result<ModelReply, Self::Error> {
        lock(&self.requests).push(request.clone());

        match lock(&self.script).pop_front() {
            Some(scripted) => scripted,
            None => Ok(self.default_reply.clone()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdesk_domain::ChatMessage;

    fn request(text: &str) -> ChatRequest {
        ChatRequest::new(vec![ChatMessage::user(text)])
    }

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::answering("Test response");
        let result = provider.complete(&request("any prompt"));
        assert_eq!(result.unwrap(), ModelReply::Answer("Test response".into()));
    }

    #[test]
    fn test_mock_provider_script_order() {
        let provider = MockProvider::answering("fallback");
        provider.push_answer("first");
        provider.push_tool_call("tool", "{}");

        assert_eq!(provider.complete(&request("a")).unwrap(), ModelReply::Answer("first".into()));
        assert!(matches!(provider.complete(&request("b")).unwrap(), ModelReply::ToolCalls(calls) if calls[0].name == "tool"));
        assert_eq!(provider.complete(&request("c")).unwrap(), ModelReply::Answer("fallback".into()));
    }

    #[test]
    fn test_mock_provider_records_requests() {
        let provider = MockProvider::default();
        provider.complete(&request("one")).unwrap();
        provider.complete(&request("two")).unwrap();

        assert_eq!(provider.call_count(), 2);
        let last = provider.last_request().unwrap();
        assert_eq!(last.messages[0].content, "two");
    }

    #[test]
    fn test_mock_provider_error() {
        let provider = MockProvider::default();
        provider.push_error(LlmError::RateLimitExceeded);

        let result = provider.complete(&request("bad prompt"));
        assert!(matches!(result.unwrap_err(), LlmError::RateLimitExceeded));
        // The failed call is still recorded
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_clone() {
        let provider1 = MockProvider::answering("test");
        let provider2 = provider1.clone();

        provider1.complete(&request("test")).unwrap();

        // Both should share the same request log due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_transient_errors() {
        assert!(LlmError::RateLimitExceeded.is_transient());
        assert!(LlmError::Communication("reset".into()).is_transient());
        assert!(!LlmError::Auth("bad key".into()).is_transient());
        assert!(!LlmError::InvalidResponse("x".into()).is_transient());
    }
}

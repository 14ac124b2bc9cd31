//! Model exchange types
//!
//! A [`ChatRequest`] is what the assistant sends to a language model; a
//! [`ModelReply`] is what comes back. Schemas and tool arguments travel as
//! raw JSON text so this crate stays free of a JSON dependency.

use crate::conversation::ChatMessage;

/// One request to the model service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Role-tagged turns, oldest first
    pub messages: Vec<ChatMessage>,

    /// Optional structural constraint on the reply
    pub constraint: Option<ResponseConstraint>,
}

impl ChatRequest {
    /// Plain request with no constraint
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages, constraint: None }
    }

    /// Require the reply to match a JSON schema
    pub fn with_schema(mut self, schema: SchemaSpec) -> Self {
        self.constraint = Some(ResponseConstraint::Schema(schema));
        self
    }

    /// Offer tools the model may call at its discretion
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.constraint = Some(ResponseConstraint::Tools(tools));
        self
    }

    /// Declared tools, if any
    pub fn tools(&self) -> &[ToolSpec] {
        match &self.constraint {
            Some(ResponseConstraint::Tools(tools)) => tools,
            _ => &[],
        }
    }
}

/// Structural constraint attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseConstraint {
    /// The reply text must be JSON conforming to this schema
    Schema(SchemaSpec),

    /// The model may answer directly or invoke one of these tools
    Tools(Vec<ToolSpec>),
}

/// Named JSON schema for structured output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSpec {
    /// Schema name reported to the model
    pub name: String,

    /// JSON schema document
    pub schema: String,
}

/// A callable tool as declared to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Tool name the model uses to call it
    pub name: String,

    /// What the tool does, for the model's benefit
    pub description: String,

    /// JSON schema of the arguments object
    pub parameters: String,
}

/// A tool call emitted by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Provider-assigned call id, when the provider sends one
    pub call_id: Option<String>,

    /// Name of the tool to run
    pub name: String,

    /// Arguments as raw JSON text, unvalidated
    pub arguments: String,
}

impl ToolInvocation {
    /// Create an invocation without a call id
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            call_id: None,
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// What one model call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// Direct text content
    Answer(String),

    /// Neither text nor tool calls
    Empty,

    /// One or more tool calls, in the order the model emitted them
    ToolCalls(Vec<ToolInvocation>),
}

impl ModelReply {
    /// Build a reply from optional content, treating blank text as empty
    pub fn from_content(content: Option<String>) -> Self {
        match content {
            Some(text) if !text.trim().is_empty() => ModelReply::Answer(text),
            _ => ModelReply::Empty,
        }
    }
}

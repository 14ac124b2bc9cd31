//! LLM prompt engineering for document extraction

use rfpdesk_domain::{ChatMessage, ChatRequest, SchemaSpec};

/// Name the structured-output schema is registered under
pub const SCHEMA_NAME: &str = "rfp_document";

/// Builds the two-turn extraction request for one document
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for the raw document text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the request: fixed instructions, then the text verbatim
    pub fn build(&self) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(EXTRACTION_INSTRUCTIONS),
            ChatMessage::user(self.text.clone()),
        ])
        .with_schema(document_schema())
    }
}

/// Schema the model's reply must conform to
///
/// Strict structured output requires every property to be listed as
/// required, so the optional fields are expressed as nullable instead.
pub fn document_schema() -> SchemaSpec {
    SchemaSpec {
        name: SCHEMA_NAME.to_string(),
        schema: DOCUMENT_SCHEMA.to_string(),
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You extract key information from RFP (Request for Proposal) documents.

Read the document and return these fields:
- title: the title of the RFP
- company: the company or organization issuing the RFP
- description: a brief description of the project
- requirements: the key requirements
- contact: contact information for questions or submissions
- deadline: the submission deadline
- budget: the budget or budget range

title and company are always required. If any other field is not stated in the document, set it to null rather than guessing."#;

const DOCUMENT_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "title": { "type": "string", "description": "Title of the RFP" },
    "company": { "type": "string", "description": "Issuing company or organization" },
    "description": { "type": ["string", "null"], "description": "Brief project description" },
    "requirements": { "type": ["string", "null"], "description": "Key requirements" },
    "contact": { "type": ["string", "null"], "description": "Contact information" },
    "deadline": { "type": ["string", "null"], "description": "Submission deadline" },
    "budget": { "type": ["string", "null"], "description": "Budget or budget range" }
  },
  "required": ["title", "company", "description", "requirements", "contact", "deadline", "budget"],
  "additionalProperties": false
}"#;

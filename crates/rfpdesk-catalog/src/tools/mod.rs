//! Tool implementations

mod summary;
mod table;

pub use summary::{summarize, SummaryTool};
pub use table::{tabulate, TableTool};

use crate::error::ToolArgumentError;
use rfpdesk_domain::{DocumentId, DocumentRecord, ToolSpec};
use serde::Deserialize;
use serde_json::Value;

/// A read-only query the model can invoke
///
/// Tools see the document list as it was loaded for this invocation and
/// return Markdown text that becomes the reply verbatim.
pub trait Tool {
    /// Name the model calls the tool by
    fn name(&self) -> &'static str;

    /// Description shown to the model
    fn description(&self) -> &'static str;

    /// JSON schema of the arguments object
    fn parameters(&self) -> Value;

    /// Run the tool against `documents`
    fn run(&self, arguments: &str, documents: &[DocumentRecord]) -> Result<String, ToolArgumentError>;

    /// Declaration sent to the model
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters().to_string(),
        }
    }
}

/// Arguments shared by the document tools: a list of document ids
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct IdsParams {
    /// Document ids, in the order the model listed them
    ///
    /// Any JSON integer is accepted. Values that can never name a document
    /// (negative ones) simply match nothing.
    pub ids: Vec<i64>,
}

impl IdsParams {
    /// Parse raw JSON arguments on behalf of `tool`
    pub fn parse(tool: &str, arguments: &str) -> Result<Self, ToolArgumentError> {
        serde_json::from_str(arguments).map_err(|e| ToolArgumentError::malformed(tool, e))
    }

    /// Whether `id` was requested
    pub fn contains(&self, id: DocumentId) -> bool {
        self.ids.iter().any(|&raw| document_id(raw) == Some(id))
    }
}

/// The document id a raw tool argument refers to, if it can refer to one
pub(crate) fn document_id(raw: i64) -> Option<DocumentId> {
    u64::try_from(raw).ok().map(DocumentId::from_value)
}

fn ids_schema(description: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "ids": {
                "type": "array",
                "items": {"type": "integer"},
                "description": description
            }
        },
        "required": ["ids"],
        "additionalProperties": false
    })
}

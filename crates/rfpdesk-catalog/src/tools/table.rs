//! Table tool - one Markdown row per document

use super::{document_id, ids_schema, IdsParams, Tool};
use crate::error::ToolArgumentError;
use rfpdesk_domain::DocumentRecord;
use serde_json::Value;

const EMPTY_TABLE: &str = "No documents available.";
const MISSING: &str = "N/A";

/// Lists documents as a table of id, title, company and deadline
#[derive(Debug, Default, Clone, Copy)]
pub struct TableTool;

impl Tool for TableTool {
    fn name(&self) -> &'static str {
        "show_document_table"
    }

    fn description(&self) -> &'static str {
        "Display a Markdown table showing multiple RFP documents with columns: ID, Title, Company, Deadline"
    }

    fn parameters(&self) -> Value {
        ids_schema("Array of document IDs to include in the table. If empty, show all documents.")
    }

    fn run(&self, arguments: &str, documents: &[DocumentRecord]) -> Result<String, ToolArgumentError> {
        let params = IdsParams::parse(self.name(), arguments)?;
        Ok(tabulate(&params.ids, documents))
    }
}

/// Render a table of the documents whose id is in `ids`, in store order
///
/// An empty `ids` selects every document. Ids with no matching document are
/// dropped without comment.
pub fn tabulate(ids: &[i64], documents: &[DocumentRecord]) -> String {
    let wanted: Vec<_> = ids.iter().filter_map(|&id| document_id(id)).collect();
    let selected: Vec<&DocumentRecord> = documents
        .iter()
        .filter(|doc| ids.is_empty() || doc.id().is_some_and(|id| wanted.contains(&id)))
        .collect();

    if selected.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let mut table = String::from("| ID | Title | Company | Deadline |\n|---|---|---|---|\n");
    for doc in selected {
        let id = doc.id().map(|id| id.to_string());
        table.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            id.as_deref().unwrap_or(MISSING),
            or_missing(&doc.title),
            or_missing(&doc.company),
            doc.deadline.as_deref().map_or_else(|| MISSING.to_string(), or_missing),
        ));
    }
    table
}

fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        escape_cell(value)
    }
}

/// Keep a value inside its cell: pipes are escaped and line breaks collapse
/// to spaces.
fn escape_cell(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

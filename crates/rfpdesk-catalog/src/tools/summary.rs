//! Summary tool - detailed Markdown blocks for selected documents

use super::{document_id, ids_schema, IdsParams, Tool};
use crate::error::ToolArgumentError;
use rfpdesk_domain::DocumentRecord;
use serde_json::Value;

/// Shows a detailed summary of each requested document
#[derive(Debug, Default, Clone, Copy)]
pub struct SummaryTool;

impl Tool for SummaryTool {
    fn name(&self) -> &'static str {
        "show_document_summary"
    }

    fn description(&self) -> &'static str {
        "Display a detailed Markdown summary of one or more RFP documents by their IDs"
    }

    fn parameters(&self) -> Value {
        ids_schema("Array of document IDs to display summaries for")
    }

    fn run(&self, arguments: &str, documents: &[DocumentRecord]) -> Result<String, ToolArgumentError> {
        let params = IdsParams::parse(self.name(), arguments)?;
        Ok(summarize(&params.ids, documents))
    }
}

/// Render a summary block per id, in the order given
///
/// Ids with no matching document produce a "not found" line instead of a
/// block, including ids that cannot name a document at all. An empty id
/// list yields an empty string.
pub fn summarize(ids: &[i64], documents: &[DocumentRecord]) -> String {
    let mut output = String::new();

    for &id in ids {
        let wanted = document_id(id);
        match documents.iter().find(|doc| wanted.is_some() && doc.id() == wanted) {
            Some(doc) => {
                output.push_str(&render_block(doc));
                output.push_str("\n---\n\n");
            }
            None => {
                output.push_str(&format!("Document with ID {} not found.\n\n", id));
            }
        }
    }

    output.trim().to_string()
}

fn render_block(doc: &DocumentRecord) -> String {
    let mut block = format!("### {}\n\n**Company:** {}\n\n", doc.title, doc.company);
    for (label, value) in doc.present_details() {
        block.push_str(&format!("**{}:** {}\n\n", label, value));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdesk_domain::DocumentStore;

    fn documents() -> Vec<DocumentRecord> {
        let mut store = DocumentStore::new();
        store.append(
            DocumentRecord::new("Data Center Migration", "Initech")
                .with_description("Move two racks")
                .with_budget("$250,000"),
        )
        .unwrap();
        store.append(DocumentRecord::new("Office Cleaning", "Globex")).unwrap();
        store.into_records()
    }

    #[test]
    fn test_single_block_layout() {
        let output = summarize(&[1], &documents());
        assert_eq!(
            output,
            "### Data Center Migration\n\n**Company:** Initech\n\n**Description:** Move two racks\n\n**Budget:** $250,000\n\n\n---"
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let output = summarize(&[2], &documents());
        assert!(!output.contains("**Description:**"));
        assert!(!output.contains("**Deadline:**"));
        assert!(output.starts_with("### Office Cleaning"));
    }

    #[test]
    fn test_missing_id_reported() {
        let output = summarize(&[9], &documents());
        assert_eq!(output, "Document with ID 9 not found.");
    }

    #[test]
    fn test_requested_order_is_kept() {
        let output = summarize(&[2, 1], &documents());
        let office = output.find("Office Cleaning").unwrap();
        let migration = output.find("Data Center Migration").unwrap();
        assert!(office < migration);
        assert!(output.contains("\n---\n\n### Data Center Migration"));
    }

    #[test]
    fn test_negative_id_reported_as_missing() {
        let output = summarize(&[-1, 2], &documents());
        assert!(output.starts_with("Document with ID -1 not found.\n\n### Office Cleaning"));
    }

    #[test]
    fn test_empty_ids() {
        assert_eq!(summarize(&[], &documents()), "");
    }
}

//! JSON representation of persisted documents

use crate::StoreError;
use rfpdesk_domain::{DocumentId, DocumentRecord};
use serde::{Deserialize, Serialize};

/// On-disk shape of one document
///
/// Field order is the order keys appear in the file. `Option` fields are
/// always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Assigned id, `null` if never stored through a `DocumentStore`
    #[serde(default)]
    pub id: Option<u64>,
    /// Title of the RFP
    pub title: String,
    /// Issuing company
    pub company: String,
    /// Project description
    #[serde(default)]
    pub description: Option<String>,
    /// Requirements or specifications
    #[serde(default)]
    pub requirements: Option<String>,
    /// Contact information
    #[serde(default)]
    pub contact: Option<String>,
    /// Submission deadline
    #[serde(default)]
    pub deadline: Option<String>,
    /// Budget information
    #[serde(default)]
    pub budget: Option<String>,
}

impl From<&DocumentRecord> for StoredDocument {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            id: record.id().map(|id| id.value()),
            title: record.title.clone(),
            company: record.company.clone(),
            description: record.description.clone(),
            requirements: record.requirements.clone(),
            contact: record.contact.clone(),
            deadline: record.deadline.clone(),
            budget: record.budget.clone(),
        }
    }
}

impl From<StoredDocument> for DocumentRecord {
    fn from(stored: StoredDocument) -> Self {
        let mut record = DocumentRecord::new(stored.title, stored.company)
            .with_persisted_id(stored.id.map(DocumentId::from_value));
        record.description = stored.description;
        record.requirements = stored.requirements;
        record.contact = stored.contact;
        record.deadline = stored.deadline;
        record.budget = stored.budget;
        record
    }
}

/// Serialize documents to the pretty-printed persisted form
pub fn encode_documents(records: &[DocumentRecord]) -> Result<String, StoreError> {
    let stored: Vec<StoredDocument> = records.iter().map(StoredDocument::from).collect();
    Ok(serde_json::to_string_pretty(&stored)?)
}

/// Parse the persisted form back into documents
pub fn decode_documents(text: &str) -> Result<Vec<DocumentRecord>, serde_json::Error> {
    let stored: Vec<StoredDocument> = serde_json::from_str(text)?;
    Ok(stored.into_iter().map(DocumentRecord::from).collect())
}

/// Serialize the full document list as model context
///
/// This is the same representation as the persisted file: every record and
/// every field, nothing filtered.
pub fn render_snapshot(records: &[DocumentRecord]) -> Result<String, StoreError> {
    encode_documents(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let mut record = DocumentRecord::new("Bridge Repair", "City of Springfield");
        let mut store = rfpdesk_domain::DocumentStore::new();
        record = store.append(record).unwrap().clone();

        let text = encode_documents(&[record]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let obj = value[0].as_object().unwrap();

        assert_eq!(obj.len(), 8);
        assert_eq!(obj["id"], 1);
        for key in ["description", "requirements", "contact", "deadline", "budget"] {
            assert!(obj.contains_key(key), "missing key {}", key);
            assert!(obj[key].is_null());
        }
    }

    #[test]
    fn test_unassigned_id_serializes_as_null() {
        let text = encode_documents(&[DocumentRecord::new("t", "c")]).unwrap();
        assert!(text.contains("\"id\": null"));
    }

    #[test]
    fn test_decode_tolerates_missing_optional_keys() {
        let records = decode_documents(r#"[{"id": 4, "title": "t", "company": "c"}]"#).unwrap();
        assert_eq!(records[0].id(), Some(DocumentId::from_value(4)));
        assert_eq!(records[0].deadline, None);
    }

    #[test]
    fn test_decode_rejects_missing_title() {
        assert!(decode_documents(r#"[{"id": 1, "company": "c"}]"#).is_err());
    }

    #[test]
    fn test_non_ascii_is_kept_verbatim() {
        let text = encode_documents(&[DocumentRecord::new("Ausschreibung Brücke", "Stadt Köln")]).unwrap();
        assert!(text.contains("Brücke"));
        assert!(text.contains("Köln"));
    }
}

//! Parse LLM output into a document record

use crate::error::ExtractorError;
use rfpdesk_domain::DocumentRecord;
use serde_json::{Map, Value};

/// Parse the model's JSON reply into a record without an id
///
/// `title` and `company` must be non-blank strings. Optional fields that are
/// missing, null or blank become `None`; other values are kept as returned.
/// Any `id` the model supplies is ignored; ids are assigned by the store.
pub fn parse_document(response: &str) -> Result<DocumentRecord, ExtractorError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let title = required_string(obj, "title")?;
    let company = required_string(obj, "company")?;

    let mut record = DocumentRecord::new(title, company);
    record.description = optional_string(obj, "description")?;
    record.requirements = optional_string(obj, "requirements")?;
    record.contact = optional_string(obj, "contact")?;
    record.deadline = optional_string(obj, "deadline")?;
    record.budget = optional_string(obj, "budget")?;

    Ok(record)
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence and, when present, the closing one
        let end = if lines[lines.len() - 1].trim() == "```" {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn required_string(obj: &Map<String, Value>, key: &str) -> Result<String, ExtractorError> {
    match optional_string(obj, key)? {
        Some(value) => Ok(value),
        None => Err(ExtractorError::MissingField(key.to_string())),
    }
}

fn optional_string(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, ExtractorError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ExtractorError::InvalidFormat(format!(
            "Field '{}' must be a string, got {}",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let response = r#"{
            "title": "Data Center Migration",
            "company": "Initech",
            "description": "Move two racks",
            "requirements": "ISO 27001",
            "contact": "procurement@initech.example",
            "deadline": "2025-03-31",
            "budget": "$250,000"
        }"#;

        let record = parse_document(response).unwrap();
        assert_eq!(record.title, "Data Center Migration");
        assert_eq!(record.company, "Initech");
        assert_eq!(record.budget.as_deref(), Some("$250,000"));
        assert!(record.id().is_none());
    }

    #[test]
    fn test_nulls_and_blanks_become_absent() {
        let response = r#"{"title": "T", "company": "C", "description": null, "deadline": "  "}"#;

        let record = parse_document(response).unwrap();
        assert_eq!(record.description, None);
        assert_eq!(record.deadline, None);
        assert_eq!(record.requirements, None);
    }

    #[test]
    fn test_values_kept_verbatim() {
        let response = r#"{"title": " Roads\nand Bridges ", "company": "C", "contact": "  Jane Doe"}"#;

        let record = parse_document(response).unwrap();
        assert_eq!(record.title, " Roads\nand Bridges ");
        assert_eq!(record.contact.as_deref(), Some("  Jane Doe"));
    }

    #[test]
    fn test_markdown_fence_is_stripped() {
        let response = "```json\n{\"title\": \"T\", \"company\": \"C\"}\n```";
        let record = parse_document(response).unwrap();
        assert_eq!(record.title, "T");
    }

    #[test]
    fn test_model_supplied_id_is_ignored() {
        let response = r#"{"id": 42, "title": "T", "company": "C"}"#;
        let record = parse_document(response).unwrap();
        assert!(record.id().is_none());
    }

    #[test]
    fn test_missing_required_field() {
        let result = parse_document(r#"{"title": "T"}"#);
        assert!(matches!(result, Err(ExtractorError::MissingField(f)) if f == "company"));

        let result = parse_document(r#"{"title": " ", "company": "C"}"#);
        assert!(matches!(result, Err(ExtractorError::MissingField(f)) if f == "title"));
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(parse_document("not json"), Err(ExtractorError::InvalidFormat(_))));
        assert!(matches!(parse_document("[]"), Err(ExtractorError::InvalidFormat(_))));
        assert!(matches!(
            parse_document(r#"{"title": 7, "company": "C"}"#),
            Err(ExtractorError::InvalidFormat(_))
        ));
    }
}

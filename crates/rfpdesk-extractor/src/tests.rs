//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{Extractor, ExtractorConfig, ExtractorError};
    use rfpdesk_domain::{ModelReply, ResponseConstraint, Role, ToolInvocation};
    use rfpdesk_llm::{LlmError, MockProvider};
    use std::sync::Arc;

    fn extractor(llm: MockProvider) -> Extractor<MockProvider> {
        Extractor::new(llm, ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_full_extraction_flow() {
        let llm = MockProvider::answering(
            r#"{
                "title": "Data Center Migration",
                "company": "Initech",
                "description": "Move two racks to a colocation facility",
                "requirements": "ISO 27001; weekend cutover",
                "contact": "procurement@initech.example",
                "deadline": "2025-03-31",
                "budget": "$250,000"
            }"#,
        );
        let observer = llm.clone();

        let record = extractor(llm).extract("Initech RFP: data center migration ...").unwrap();

        assert_eq!(record.title, "Data Center Migration");
        assert_eq!(record.deadline.as_deref(), Some("2025-03-31"));
        assert!(record.id().is_none());

        // One call, schema constrained, raw text as the user turn
        assert_eq!(observer.call_count(), 1);
        let request = observer.last_request().unwrap();
        assert!(matches!(request.constraint, Some(ResponseConstraint::Schema(ref s)) if s.name == "rfp_document"));
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "Initech RFP: data center migration ...");
    }

    #[test]
    fn test_title_and_company_only() {
        let llm = MockProvider::answering(
            r#"{"title": "Office Cleaning Services", "company": "Globex Inc",
                "description": null, "requirements": null, "contact": null,
                "deadline": null, "budget": null}"#,
        );

        let record = extractor(llm).extract("Globex wants its offices cleaned.").unwrap();

        assert_eq!(record.title, "Office Cleaning Services");
        assert_eq!(record.company, "Globex Inc");
        assert!(record.present_details().is_empty());
    }

    #[test]
    fn test_extraction_with_invalid_json() {
        let llm = MockProvider::answering("This is not JSON");
        let result = extractor(llm).extract("some text");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_empty_text_skips_model() {
        let llm = MockProvider::answering("{}");
        let observer = llm.clone();

        let result = extractor(llm).extract("   \n ");

        assert!(matches!(result, Err(ExtractorError::EmptyText)));
        assert_eq!(observer.call_count(), 0);
    }

    #[test]
    fn test_text_too_long() {
        let llm = MockProvider::answering("{}");
        let observer = llm.clone();
        let config = ExtractorConfig { max_text_length: 10 };
        let extractor = Extractor::new(llm, config).unwrap();

        let result = extractor.extract("eleven char");

        assert!(matches!(result, Err(ExtractorError::TextTooLong(11, 10))));
        assert_eq!(observer.call_count(), 0);
    }

    #[test]
    fn test_llm_failure_is_reported() {
        let llm = MockProvider::default();
        llm.push_error(LlmError::Communication("connection reset".into()));

        let result = extractor(llm).extract("text");

        match result {
            Err(ExtractorError::Llm(msg)) => assert!(msg.contains("connection reset")),
            other => panic!("expected LLM error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_reply_is_invalid() {
        let result = extractor(MockProvider::default()).extract("text");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_tool_call_reply_is_invalid() {
        let llm = MockProvider::new(ModelReply::ToolCalls(vec![ToolInvocation::new("x", "{}")]));
        let result = extractor(llm).extract("text");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_company() {
        let llm = MockProvider::answering(r#"{"title": "T", "company": null}"#);
        let result = extractor(llm).extract("text");
        assert!(matches!(result, Err(ExtractorError::MissingField(f)) if f == "company"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig { max_text_length: 0 };
        let result = Extractor::new(MockProvider::default(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_shared_provider() {
        let llm = Arc::new(MockProvider::answering(r#"{"title": "T", "company": "C"}"#));
        let extractor = Extractor::with_shared_provider(Arc::clone(&llm), ExtractorConfig::default()).unwrap();

        extractor.extract("text").unwrap();
        assert_eq!(llm.call_count(), 1);
    }
}

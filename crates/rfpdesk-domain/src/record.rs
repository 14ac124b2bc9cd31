//! Document record module - the structured form of one RFP

use std::fmt;

/// Identifier assigned to a document when it enters the store
///
/// Ids start at 1 and are derived from the store contents, so they are only
/// meaningful within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u64);

impl DocumentId {
    /// The id handed out to the first document of an empty store
    pub const FIRST: DocumentId = DocumentId(1);

    /// Create a DocumentId from a raw value
    ///
    /// This is primarily for storage layer deserialization and tool argument
    /// parsing.
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` if this is the largest id
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| format!("Invalid document id '{}': {}", s, e))
    }
}

/// A procurement document reduced to the fields the assistant works with
///
/// The id is private: a freshly extracted record has none, and only the
/// [`crate::DocumentStore`] (or the storage layer restoring persisted state)
/// may attach one. Absent optional fields mean "not extracted".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    id: Option<DocumentId>,

    /// Title or name of the RFP
    pub title: String,

    /// Company or organization issuing the RFP
    pub company: String,

    /// Short description of the requested project or service
    pub description: Option<String>,

    /// Key requirements or specifications
    pub requirements: Option<String>,

    /// Contact information (email, phone, or person)
    pub contact: Option<String>,

    /// Submission deadline, as written in the source
    pub deadline: Option<String>,

    /// Budget or cost information
    pub budget: Option<String>,
}

impl DocumentRecord {
    /// Create a record with only the required fields set
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            company: company.into(),
            description: None,
            requirements: None,
            contact: None,
            deadline: None,
            budget: None,
        }
    }

    /// The assigned id, if the record has been stored
    pub fn id(&self) -> Option<DocumentId> {
        self.id
    }

    /// Reattach an id read back from persisted state
    ///
    /// Only the storage layer should call this; new records get their id
    /// from [`crate::DocumentStore::append`].
    pub fn with_persisted_id(mut self, id: Option<DocumentId>) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn assign_id(&mut self, id: DocumentId) {
        debug_assert!(self.id.is_none(), "document id is immutable once assigned");
        self.id = Some(id);
    }

    /// Set the description
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    /// Set the requirements
    pub fn with_requirements(mut self, value: impl Into<String>) -> Self {
        self.requirements = Some(value.into());
        self
    }

    /// Set the contact information
    pub fn with_contact(mut self, value: impl Into<String>) -> Self {
        self.contact = Some(value.into());
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, value: impl Into<String>) -> Self {
        self.deadline = Some(value.into());
        self
    }

    /// Set the budget
    pub fn with_budget(mut self, value: impl Into<String>) -> Self {
        self.budget = Some(value.into());
        self
    }

    /// Labelled optional fields in display order, present ones only
    pub fn present_details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Description", &self.description),
            ("Requirements", &self.requirements),
            ("Contact", &self.contact),
            ("Deadline", &self.deadline),
            ("Budget", &self.budget),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

//! In-memory document collection and its id-assignment rule

use crate::record::{DocumentId, DocumentRecord};
use std::fmt;

/// Returned by [`DocumentStore::append`] when the largest held id has no
/// successor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdsExhausted {
    /// The largest id in the store
    pub last: DocumentId,
}

impl fmt::Display for IdsExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No document id left after {}", self.last)
    }
}

impl std::error::Error for IdsExhausted {}

/// Ordered collection of documents for one session
///
/// Insertion order is preserved. The next id is always one past the largest
/// id currently held (1 for an empty collection), so ids grow strictly while
/// documents are appended and numbering restarts after [`DocumentStore::clear`].
/// Persistence is not handled here; see [`crate::traits::DocumentPersistence`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStore {
    records: Vec<DocumentRecord>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records read back from persisted state
    pub fn from_records(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    /// The id the next appended document will receive
    pub fn next_id(&self) -> Result<DocumentId, IdsExhausted> {
        match self.records.iter().filter_map(DocumentRecord::id).max() {
            Some(last) => last.next().ok_or(IdsExhausted { last }),
            None => Ok(DocumentId::FIRST),
        }
    }

    /// Assign the next id to `record`, append it, and return the stored copy
    ///
    /// Any id already present on `record` is discarded. Fails, leaving the
    /// store unchanged, when the largest held id is `u64::MAX`.
    pub fn append(&mut self, record: DocumentRecord) -> Result<&DocumentRecord, IdsExhausted> {
        let id = self.next_id()?;
        let mut record = record.with_persisted_id(None);
        record.assign_id(id);
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Look up a document by id
    pub fn get(&self, id: DocumentId) -> Option<&DocumentRecord> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    /// All documents in insertion order
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// Iterate documents in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.records.iter()
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every document
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Consume the store, yielding its records
    pub fn into_records(self) -> Vec<DocumentRecord> {
        self.records
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Operations applied to a store: append a document or clear everything
    #[derive(Debug, Clone)]
    enum Op {
        Append,
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![4 => Just(Op::Append), 1 => Just(Op::Clear)]
    }

    proptest! {
        /// Property: ids assigned between clears are 1, 2, 3, ... and never repeat
        #[test]
        fn test_ids_strictly_increase(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut store = DocumentStore::new();
            let mut expected = 1u64;

            for op in ops {
                match op {
                    Op::Append => {
                        let id = store.append(DocumentRecord::new("t", "c")).unwrap().id();
                        prop_assert_eq!(id, Some(DocumentId::from_value(expected)));
                        expected += 1;
                    }
                    Op::Clear => {
                        store.clear();
                        expected = 1;
                    }
                }

                let ids: Vec<u64> = store.iter().filter_map(|r| r.id()).map(|id| id.value()).collect();
                prop_assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {:?}", ids);
            }
        }

        /// Property: next id is one past the largest persisted id
        #[test]
        fn test_next_id_after_max(ids in proptest::collection::vec(1u64..10_000, 0..32)) {
            let records = ids
                .iter()
                .map(|&v| DocumentRecord::new("t", "c").with_persisted_id(Some(DocumentId::from_value(v))))
                .collect();
            let store = DocumentStore::from_records(records);
            let expected = ids.iter().max().map(|m| m + 1).unwrap_or(1);
            prop_assert_eq!(store.next_id().map(|id| id.value()), Ok(expected));
        }
    }
}

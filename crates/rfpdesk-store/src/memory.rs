//! In-memory persistence for tests and ephemeral sessions

use crate::codec::{decode_documents, encode_documents};
use crate::StoreError;
use rfpdesk_domain::traits::DocumentPersistence;
use rfpdesk_domain::DocumentRecord;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

/// Persistence that keeps the serialized document list in memory
///
/// It stores the same JSON text a [`crate::JsonFileStore`] would write, so
/// load applies the same fail-soft rules. Clones share state, which lets a
/// test hand one clone to the code under test and inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    contents: Option<String>,
    fail_saves: bool,
    save_count: usize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `records`
    pub fn with_documents(records: &[DocumentRecord]) -> Result<Self, StoreError> {
        let store = Self::new();
        store.save(records)?;
        store.state().save_count = 0;
        Ok(store)
    }

    /// Create a store whose persisted text is `raw`, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.state().contents = Some(raw.into());
        store
    }

    /// The persisted text, if anything has been saved
    pub fn contents(&self) -> Option<String> {
        self.state().contents.clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.state().save_count
    }

    /// Make every subsequent save fail with an I/O error
    pub fn fail_saves(&self, fail: bool) {
        self.state().fail_saves = fail;
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DocumentPersistence for MemoryStore {
    type Error = StoreError;

    fn load(&self) -> Result<Vec<DocumentRecord>, Self::Error> {
        let state = self.state();
        let Some(contents) = state.contents.as_deref() else {
            return Ok(Vec::new());
        };

        match decode_documents(contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("In-memory document state is corrupt ({}), starting empty", e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[DocumentRecord]) -> Result<(), Self::Error> {
        let mut state = self.state();
        if state.fail_saves {
            return Err(StoreError::Io(std::io::Error::other("save disabled")));
        }
        state.contents = Some(encode_documents(records)?);
        state.save_count += 1;
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.state().contents = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let observer = store.clone();
        store.save(&[DocumentRecord::new("t", "c")]).unwrap();
        assert_eq!(observer.load().unwrap().len(), 1);
        assert_eq!(observer.save_count(), 1);
    }

    #[test]
    fn test_corrupt_raw_loads_empty() {
        let store = MemoryStore::with_raw("{not json");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_failing_save_keeps_previous_contents() {
        let store = MemoryStore::with_documents(&[DocumentRecord::new("t", "c")]).unwrap();
        let before = store.contents();
        store.fail_saves(true);
        assert!(store.save(&[]).is_err());
        assert_eq!(store.contents(), before);
    }
}

//! JSON file persistence

use crate::codec::{decode_documents, encode_documents};
use crate::StoreError;
use rfpdesk_domain::traits::DocumentPersistence;
use rfpdesk_domain::DocumentRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default file name used when no storage path is configured
pub const DEFAULT_STORAGE_FILE: &str = "rfp_documents.json";

/// Document list persisted as a single JSON file
///
/// Every save rewrites the whole file. There is no locking: two processes
/// sharing one file can overwrite each other's changes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`; the file need not exist yet
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_FILE)
    }
}

impl DocumentPersistence for JsonFileStore {
    type Error = StoreError;

    fn load(&self) -> Result<Vec<DocumentRecord>, Self::Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No document file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Document file {} is not valid UTF-8, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match decode_documents(&contents) {
            Ok(records) => {
                debug!("Loaded {} documents from {}", records.len(), self.path.display());
                Ok(records)
            }
            Err(e) => {
                warn!("Document file {} is corrupt ({}), starting empty", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[DocumentRecord]) -> Result<(), Self::Error> {
        let contents = encode_documents(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, contents)?;
        debug!("Saved {} documents to {}", records.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

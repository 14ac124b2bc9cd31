//! Upload command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rfpdesk_domain::traits::{DocumentPersistence, LlmProvider};
use rfpdesk_router::{Assistant, IngestOutcome, Session, Upload};
use std::fs;
use std::path::Path;

/// Execute the upload command.
///
/// Every file is attempted; failures are reported as they happen and
/// summarized in the returned error.
pub fn execute_upload<L, P>(
    files: &[impl AsRef<Path>],
    assistant: &Assistant<L, P>,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider,
    P: DocumentPersistence,
    L::Error: std::fmt::Display,
    P::Error: std::fmt::Display,
{
    let mut failed = 0;
    for path in files {
        if let Err(e) = upload_file(path.as_ref(), assistant, session, formatter) {
            eprintln!("{}", formatter.error(&format!("{}: {}", path.as_ref().display(), e)));
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CliError::UploadsFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

/// Ingest one file and print the outcome.
pub fn upload_file<L, P>(
    path: &Path,
    assistant: &Assistant<L, P>,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider,
    P: DocumentPersistence,
    L::Error: std::fmt::Display,
    P::Error: std::fmt::Display,
{
    let upload = read_upload(path)?;

    match assistant.ingest(session, &upload)? {
        IngestOutcome::Added(record) => {
            println!("{}", formatter.document_added(&upload.name, &record));
        }
        IngestOutcome::AlreadyProcessed => {
            println!("{}", formatter.info(&format!("{}: already processed", upload.name)));
        }
    }
    Ok(())
}

/// Read a text file as an upload named after the file.
pub fn read_upload(path: &Path) -> Result<Upload> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput(format!("Not a file: {}", path.display())))?;

    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|_| CliError::InvalidInput(format!("{} is not UTF-8 text", name)))?;

    Ok(Upload::new(name, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_upload() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "RFP: Office cleaning for Globex").unwrap();

        let upload = read_upload(file.path()).unwrap();
        assert_eq!(upload.content, "RFP: Office cleaning for Globex");
        assert_eq!(upload.name, file.path().file_name().unwrap().to_string_lossy());
    }

    #[test]
    fn test_read_upload_rejects_binary() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        assert!(matches!(read_upload(file.path()), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_read_upload_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(read_upload(&dir.path().join("nope.txt")), Err(CliError::Io(_))));
    }
}

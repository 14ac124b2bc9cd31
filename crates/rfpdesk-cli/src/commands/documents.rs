//! List and show command implementations.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rfpdesk_domain::{DocumentId, DocumentRecord};

/// Execute the list command.
pub fn execute_list(documents: &[DocumentRecord], formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_documents(documents)?);
    Ok(())
}

/// Execute the show command.
pub fn execute_show(id: u64, documents: &[DocumentRecord], formatter: &Formatter) -> Result<()> {
    let document = find_document(id, documents)?;
    println!("{}", formatter.format_document(document)?);
    Ok(())
}

/// Look up a document by numeric id.
pub fn find_document(id: u64, documents: &[DocumentRecord]) -> Result<&DocumentRecord> {
    let wanted = DocumentId::from_value(id);
    documents
        .iter()
        .find(|doc| doc.id() == Some(wanted))
        .ok_or(CliError::DocumentNotFound(id))
}

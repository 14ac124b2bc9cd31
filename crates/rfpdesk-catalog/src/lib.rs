//! RFP Desk Tool Catalog
//!
//! Read-only query tools the conversation model may call, plus the registry
//! that declares them and dispatches invocations.
//!
//! Standard tools:
//! - `show_document_summary` - Markdown summary block per requested id
//! - `show_document_table` - Markdown table of id, title, company, deadline
//!
//! # Example
//!
//! ```
//! use rfpdesk_catalog::ToolRegistry;
//! use rfpdesk_domain::{DocumentRecord, DocumentStore, ToolInvocation};
//!
//! let mut store = DocumentStore::new();
//! store.append(DocumentRecord::new("Office Cleaning", "Globex")).unwrap();
//!
//! let registry = ToolRegistry::standard();
//! let call = ToolInvocation::new("show_document_table", r#"{"ids": []}"#);
//! let output = registry.dispatch(&call, store.records()).unwrap();
//! assert!(output.contains("| 1 | Office Cleaning | Globex | N/A |"));
//! ```

#![warn(missing_docs)]

mod error;
mod registry;
mod tools;

pub use error::ToolArgumentError;
pub use registry::ToolRegistry;
pub use tools::{summarize, tabulate, IdsParams, SummaryTool, TableTool, Tool};

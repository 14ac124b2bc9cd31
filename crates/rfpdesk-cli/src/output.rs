//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use rfpdesk_domain::DocumentRecord;
use rfpdesk_store::{encode_documents, StoredDocument};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables and text
    Table,
    /// JSON in the storage layout
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a document list.
    pub fn format_documents(&self, documents: &[DocumentRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(encode_documents(documents)?),
            OutputFormat::Table => Ok(self.format_documents_table(documents)),
        }
    }

    /// Format a single document.
    pub fn format_document(&self, document: &DocumentRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&StoredDocument::from(document))?),
            OutputFormat::Table => Ok(self.format_document_detail(document)),
        }
    }

    fn format_documents_table(&self, documents: &[DocumentRecord]) -> String {
        if documents.is_empty() {
            return self.colorize("No documents available.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "Company", "Deadline"]);

        for doc in documents {
            let id = doc.id().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
            builder.push_record([
                id.as_str(),
                doc.title.as_str(),
                doc.company.as_str(),
                doc.deadline.as_deref().unwrap_or("N/A"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_document_detail(&self, doc: &DocumentRecord) -> String {
        let heading = match doc.id() {
            Some(id) => format!("[{}] {}", id, doc.title),
            None => doc.title.clone(),
        };

        let mut lines = vec![self.colorize(&heading, "cyan"), String::new()];
        lines.push(format!("{} {}", self.colorize("Company:", "magenta"), doc.company));
        for (label, value) in doc.present_details() {
            lines.push(format!("{} {}", self.colorize(&format!("{}:", label), "magenta"), value));
        }
        lines.join("\n")
    }

    /// Format a stored upload.
    pub fn document_added(&self, name: &str, document: &DocumentRecord) -> String {
        let id = document.id().map(|id| id.to_string()).unwrap_or_default();
        self.success(&format!(
            "{}: added document {} \"{}\" ({})",
            name, id, document.title, document.company
        ))
    }

    /// Format the assistant's reply.
    pub fn reply(&self, text: &str) -> String {
        text.trim_end().to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

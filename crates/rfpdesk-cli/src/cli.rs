//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RFP Desk - Extract RFP documents and ask questions about them.
#[derive(Debug, Parser)]
#[command(name = "rfpdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Document storage file (overrides the config file)
    #[arg(short, long, global = true, env = "RFPDESK_STORAGE")]
    pub storage: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print documents as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and store documents from text files
    Upload(UploadArgs),

    /// Ask a single question about the stored documents
    Ask(AskArgs),

    /// List stored documents
    List,

    /// Show one document in detail
    Show(ShowArgs),

    /// Delete all stored documents
    Clear(ClearArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Enter interactive chat mode
    Repl,
}

/// Arguments for the upload command.
#[derive(Debug, Parser)]
pub struct UploadArgs {
    /// Text files to extract
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// Question text
    #[arg(required = true, trailing_var_arg = true)]
    pub question: Vec<String>,
}

impl AskArgs {
    /// The question as a single line
    pub fn text(&self) -> String {
        self.question.join(" ")
    }
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Document ID
    pub id: u64,
}

/// Arguments for the clear command.
#[derive(Debug, Parser)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

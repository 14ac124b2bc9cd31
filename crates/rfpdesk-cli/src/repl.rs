//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Lines starting with `/` are commands; anything else is a question for
//! the assistant.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rfpdesk_domain::traits::{DocumentPersistence, LlmProvider};
use rfpdesk_router::{Assistant, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl<L, P>(assistant: &Assistant<L, P>, config: &Config, formatter: &Formatter) -> Result<()>
where
    L: LlmProvider,
    P: DocumentPersistence,
    L::Error: std::fmt::Display,
    P::Error: std::fmt::Display,
{
    let mut session = assistant.open_session()?;

    println!("{}", formatter.info("RFP Desk - Ask about your documents. Type /help for commands, /exit to quit"));
    println!(
        "{}",
        formatter.info(&format!("{} document(s) loaded", session.documents().len()))
    );
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("rfpdesk> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_line(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, assistant, &mut session, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use /exit to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Print the command list
    Help,
    /// Ingest text files
    Upload(Vec<PathBuf>),
    /// Table of documents in the session
    List,
    /// One document in detail
    Show(u64),
    /// Forget the conversation
    ClearChat,
    /// Delete every document
    ClearDocs,
    /// Question for the assistant
    Ask(String),
}

/// Parse a REPL input line.
pub fn parse_repl_line(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    if !line.starts_with('/') {
        return Ok(ReplCommand::Ask(line.to_string()));
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let args = &parts[1..];

    match parts[0] {
        "/exit" | "/quit" | "/q" => Ok(ReplCommand::Exit),
        "/help" | "/?" => Ok(ReplCommand::Help),
        "/upload" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: /upload <file> [file2] ...".to_string()));
            }
            Ok(ReplCommand::Upload(args.iter().map(|arg| PathBuf::from(*arg)).collect()))
        }
        "/list" => Ok(ReplCommand::List),
        "/show" => {
            let id = args
                .first()
                .ok_or_else(|| CliError::InvalidInput("Usage: /show <id>".to_string()))?;
            let id = id
                .parse()
                .map_err(|_| CliError::InvalidInput(format!("Invalid document ID: {}", id)))?;
            Ok(ReplCommand::Show(id))
        }
        "/clear-chat" => Ok(ReplCommand::ClearChat),
        "/clear-docs" => Ok(ReplCommand::ClearDocs),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type /help for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command against the session.
pub fn execute_repl_command<L, P>(
    cmd: ReplCommand,
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
    match cmd {
        ReplCommand::Upload(files) => {
            commands::execute_upload(&files, assistant, session, formatter)?;
        }
        ReplCommand::List => {
            commands::execute_list(session.documents().records(), formatter)?;
        }
        ReplCommand::Show(id) => {
            commands::execute_show(id, session.documents().records(), formatter)?;
        }
        ReplCommand::ClearChat => {
            assistant.clear_chat(session);
            println!("{}", formatter.success("Chat history cleared"));
        }
        ReplCommand::ClearDocs => {
            assistant.clear_documents(session)?;
            println!("{}", formatter.success("All documents deleted"));
        }
        ReplCommand::Ask(question) => {
            commands::execute_ask(&question, assistant, session, formatter)?;
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let path = Config::history_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(path)
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  /upload <file> [file2] ...  - Extract and store text files");
    println!("  /list                       - Table of stored documents");
    println!("  /show <id>                  - Show one document in detail");
    println!("  /clear-chat                 - Forget the conversation");
    println!("  /clear-docs                 - Delete all documents");
    println!("  /help, /?                   - Show this help");
    println!("  /exit, /quit, /q            - Exit REPL");
    println!();
    println!("  Anything else is sent to the assistant as a question.");
    println!();
}

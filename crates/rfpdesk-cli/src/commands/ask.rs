//! Ask command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rfpdesk_domain::traits::{DocumentPersistence, LlmProvider};
use rfpdesk_router::{Assistant, Session};

/// Execute the ask command.
pub fn execute_ask<L, P>(
    question: &str,
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
    let question = question.trim();
    if question.is_empty() {
        return Err(CliError::InvalidInput("Question is empty".to_string()));
    }

    let reply = assistant.ask(session, question)?;
    println!("{}", formatter.reply(&reply));
    Ok(())
}

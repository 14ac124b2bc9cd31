//! Error types for tool dispatch.

use thiserror::Error;

/// A tool invocation that could not be run
///
/// These never abort a conversation; the router turns them into reply text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToolArgumentError {
    /// No tool with this name is registered
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    /// Arguments are not valid JSON or do not match the tool's schema
    #[error("Invalid arguments for {tool}: {reason}")]
    Malformed {
        /// Tool the arguments were meant for
        tool: String,
        /// What was wrong with them
        reason: String,
    },
}

impl ToolArgumentError {
    pub(crate) fn malformed(tool: &str, err: serde_json::Error) -> Self {
        ToolArgumentError::Malformed {
            tool: tool.to_string(),
            reason: err.to_string(),
        }
    }
}

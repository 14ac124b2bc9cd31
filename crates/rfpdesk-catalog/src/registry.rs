//! Name-indexed collection of tools

use crate::error::ToolArgumentError;
use crate::tools::{SummaryTool, TableTool, Tool};
use rfpdesk_domain::{DocumentRecord, ToolInvocation, ToolSpec};
use tracing::{debug, info, warn};

/// Registry mapping tool names to handlers
///
/// Tools are declared to the model in registration order. Registering a
/// tool whose name is already taken replaces the earlier one.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the summary and table tools
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(SummaryTool);
        registry.register(TableTool);
        registry
    }

    /// Add a tool
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(index) => {
                debug!("Replacing tool '{}'", tool.name());
                self.tools[index] = Box::new(tool);
            }
            None => self.tools.push(Box::new(tool)),
        }
    }

    /// Declarations for every registered tool
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|tool| tool.spec()).collect()
    }

    /// Registered tool names, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|tool| tool.name() == name).map(|tool| tool.as_ref())
    }

    /// Run the tool named by `invocation` against `documents`
    pub fn dispatch(
        &self,
        invocation: &ToolInvocation,
        documents: &[DocumentRecord],
    ) -> Result<String, ToolArgumentError> {
        let tool = self
            .get(&invocation.name)
            .ok_or_else(|| ToolArgumentError::UnknownTool(invocation.name.clone()))?;

        match tool.run(&invocation.arguments, documents) {
            Ok(output) => {
                info!(
                    "Tool '{}' ran over {} documents ({} chars)",
                    invocation.name,
                    documents.len(),
                    output.len()
                );
                Ok(output)
            }
            Err(e) => {
                warn!("Tool '{}' rejected its arguments: {}", invocation.name, e);
                Err(e)
            }
        }
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry").field("tools", &self.names()).finish()
    }
}

//! Tool dispatcher - the fixed table of tools and the routing between them.
//!
//! Every call goes through the same three steps: look the tool up by name,
//! check the arguments against the descriptor's `required` list, then run
//! the tool's `execute()`.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::definitions::{AddNoteTool, AddNotesTool, GetModelTool, ListDecksTool, ListModelsTool};
use super::error::{ToolError, ToolResult};
use super::validation::check_required;
use crate::core::anki::AnkiBackend;

/// Routes tool invocations to their AnkiConnect-backed handlers.
pub struct ToolDispatcher {
    backend: Arc<dyn AnkiBackend>,
    tools: Vec<Tool>,
}

impl ToolDispatcher {
    /// Create a dispatcher with the full tool table.
    pub fn new(backend: Arc<dyn AnkiBackend>) -> Self {
        let tools = Self::all_tools();
        info!("Registered {} tools", tools.len());
        Self { backend, tools }
    }

    /// Descriptors of every tool this server offers.
    pub fn all_tools() -> Vec<Tool> {
        vec![
            ListDecksTool::to_tool(),
            ListModelsTool::to_tool(),
            GetModelTool::to_tool(),
            AddNoteTool::to_tool(),
            AddNotesTool::to_tool(),
        ]
    }

    /// The tool descriptors, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_ref()).collect()
    }

    fn descriptor(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name.as_ref() == name)
    }

    /// Invoke a tool by name.
    ///
    /// Unknown names and missing required arguments fail before anything is
    /// sent to AnkiConnect.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> ToolResult<CallToolResult> {
        let Some(tool) = self.descriptor(name) else {
            warn!(
                "Unknown tool requested: {} (available: {})",
                name,
                self.tool_names().join(", ")
            );
            return Err(ToolError::not_found(name));
        };

        let arguments = arguments.unwrap_or_default();
        check_required(tool, &arguments)?;

        let backend = self.backend.as_ref();
        let text = match name {
            ListDecksTool::NAME => ListDecksTool::execute(backend, arguments).await?,
            ListModelsTool::NAME => ListModelsTool::execute(backend, arguments).await?,
            GetModelTool::NAME => GetModelTool::execute(backend, arguments).await?,
            AddNoteTool::NAME => AddNoteTool::execute(backend, arguments).await?,
            AddNotesTool::NAME => AddNotesTool::execute(backend, arguments).await?,
            _ => return Err(ToolError::internal(format!("no handler for tool '{name}'"))),
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

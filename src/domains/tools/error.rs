//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use thiserror::Error;
use tracing::warn;

use crate::core::anki::BackendError;

/// Result type for tool execution.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// AnkiConnect failed while executing the tool.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into what the MCP layer returns for a failed `tools/call`.
    ///
    /// Routing and argument failures are protocol errors. Backend failures
    /// become an `isError` tool result so the model can read Anki's message.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        let message = self.to_string();
        match self {
            Self::NotFound(_) | Self::InvalidArguments(_) => {
                Err(McpError::invalid_params(message, None))
            }
            Self::Backend(e) => {
                if e.is_transport() {
                    warn!("Tool call failed before Anki answered: {}", e);
                }
                Ok(CallToolResult::error(vec![Content::text(message)]))
            }
            Self::Internal(_) => Err(McpError::internal_error(message, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_routing_and_argument_errors_are_protocol_errors() {
        let err = ToolError::not_found("unknownTool").into_call_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("unknownTool"));

        let err = ToolError::invalid_arguments("missing modelName")
            .into_call_result()
            .unwrap_err();
        assert!(err.message.contains("modelName"));
    }

    #[test]
    fn test_backend_error_is_tool_error_result() {
        let result = ToolError::from(BackendError::anki("addNote", "duplicate"))
            .into_call_result()
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_transport_failure_is_tool_error_result() {
        let err = BackendError::invalid_response("deckNames", "body is not JSON");
        assert!(err.is_transport());
        let result = ToolError::from(err).into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}

//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::core::anki::BackendError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The URI does not address anything this server exposes.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The URI addresses a known category but is malformed.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// AnkiConnect failed while listing or reading.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Encoding the resource content failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ResourceError> for McpError {
    fn from(err: ResourceError) -> Self {
        let message = err.to_string();
        match err {
            ResourceError::NotFound(_) => McpError::resource_not_found(message, None),
            ResourceError::InvalidUri(_) => McpError::invalid_params(message, None),
            ResourceError::Backend(_) | ResourceError::Internal(_) => {
                McpError::internal_error(message, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_mcp_error_codes() {
        let not_found: McpError = ResourceError::not_found("bogus://x").into();
        assert_eq!(not_found.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(not_found.message.contains("bogus://x"));

        let invalid: McpError = ResourceError::invalid_uri("anki://decks/abc").into();
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);

        let backend: McpError =
            ResourceError::from(BackendError::anki("findModelsById", "boom")).into();
        assert_eq!(backend.code, ErrorCode::INTERNAL_ERROR);
        assert!(backend.message.contains("boom"));
    }
}

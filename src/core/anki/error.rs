//! AnkiConnect gateway error types.

use thiserror::Error;

/// Result type for AnkiConnect calls.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while talking to AnkiConnect.
///
/// Transport-level failures and failures reported by Anki itself are kept
/// apart so callers (and clients) can tell "Anki is not running" from
/// "Anki rejected the request".
#[derive(Debug, Error)]
pub enum BackendError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build AnkiConnect HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// The HTTP request could not be completed (connection refused, reset, ...).
    #[error("Cannot reach AnkiConnect at {url} (is Anki running?): {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// AnkiConnect answered with a non-success HTTP status.
    #[error("AnkiConnect returned HTTP status {status} for '{action}'")]
    Status { action: String, status: u16 },

    /// The response body was not the `{result, error}` object we expect,
    /// or the result did not have the expected shape.
    #[error("Invalid response from AnkiConnect for '{action}': {reason}")]
    InvalidResponse { action: String, reason: String },

    /// AnkiConnect processed the request and reported an error.
    #[error("AnkiConnect '{action}' failed: {message}")]
    Anki { action: String, message: String },
}

impl BackendError {
    /// Create an "unreachable" error.
    pub fn unreachable(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Unreachable {
            url: url.into(),
            source,
        }
    }

    /// Create an "invalid response" error.
    pub fn invalid_response(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            action: action.into(),
            reason: reason.into(),
        }
    }

    /// Create an error reported by Anki itself.
    pub fn anki(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Anki {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Whether the failure happened before Anki could answer the request.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Anki { .. })
    }
}

//! HTTP client for the AnkiConnect API.
//!
//! Every call is a single POST of `{action, version, params}` to the
//! configured endpoint. AnkiConnect always answers with `{result, error}`;
//! a non-null `error` means the action failed inside Anki.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{BackendError, BackendResult};
use crate::core::config::AnkiConfig;

/// AnkiConnect API version this server speaks.
pub const API_VERSION: u8 = 6;

/// The channel to AnkiConnect.
///
/// The resource catalog and tool dispatcher only ever see this trait, which
/// keeps them testable without a running Anki instance.
#[async_trait]
pub trait AnkiBackend: Send + Sync {
    /// Invoke an AnkiConnect action and return its `result` payload.
    async fn invoke(&self, action: &str, params: Value) -> BackendResult<Value>;
}

/// Request envelope sent to AnkiConnect.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    action: &'a str,
    version: u8,
    params: &'a Value,
}

/// AnkiConnect client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http: Client,
    url: String,
}

impl AnkiClient {
    /// Create a client for the endpoint in `config`.
    ///
    /// No request timeout is set: a call waits until Anki answers or the
    /// connection fails. Proxies are bypassed since AnkiConnect is local.
    pub fn new(config: &AnkiConfig) -> BackendResult<Self> {
        let http = Client::builder()
            .no_proxy()
            .build()
            .map_err(BackendError::ClientInit)?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    /// The endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnkiBackend for AnkiClient {
    #[instrument(skip(self, params), fields(url = %self.url))]
    async fn invoke(&self, action: &str, params: Value) -> BackendResult<Value> {
        let envelope = Envelope {
            action,
            version: API_VERSION,
            params: &params,
        };

        debug!("Sending AnkiConnect request");

        let response = self
            .http
            .post(&self.url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                warn!("AnkiConnect unreachable: {}", e);
                BackendError::unreachable(&self.url, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                action: action.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::unreachable(&self.url, e))?;

        parse_reply(action, &body)
    }
}

/// Unwrap an AnkiConnect `{result, error}` reply body.
pub(crate) fn parse_reply(action: &str, body: &[u8]) -> BackendResult<Value> {
    let reply: Value = serde_json::from_slice(body)
        .map_err(|e| BackendError::invalid_response(action, format!("body is not JSON: {e}")))?;

    let Value::Object(mut reply) = reply else {
        return Err(BackendError::invalid_response(
            action,
            "expected a JSON object with 'result' and 'error'",
        ));
    };

    match reply.remove("error") {
        None | Some(Value::Null) => {}
        Some(Value::String(message)) if message.is_empty() => {}
        Some(Value::String(message)) => return Err(BackendError::anki(action, message)),
        Some(other) => return Err(BackendError::anki(action, other.to_string())),
    }

    reply
        .remove("result")
        .ok_or_else(|| BackendError::invalid_response(action, "missing 'result' field"))
}

/// Decode a backend result into a concrete type, reporting shape mismatches
/// as invalid responses for `action`.
pub(crate) fn decode<T>(action: &str, result: Value) -> BackendResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(result)
        .map_err(|e| BackendError::invalid_response(action, format!("unexpected result: {e}")))
}

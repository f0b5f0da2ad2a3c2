//! In-memory AnkiConnect stand-in for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::client::AnkiBackend;
use super::error::{BackendError, BackendResult};

/// Replays canned results per action and records every call it receives.
#[derive(Default)]
pub struct FakeBackend {
    replies: HashMap<String, Result<Value, String>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `action` with `result`.
    pub fn with_result(mut self, action: &str, result: Value) -> Self {
        self.replies.insert(action.to_string(), Ok(result));
        self
    }

    /// Answer `action` with an AnkiConnect error message.
    pub fn with_error(mut self, action: &str, message: &str) -> Self {
        self.replies
            .insert(action.to_string(), Err(message.to_string()));
        self
    }

    /// Every `(action, params)` pair received so far, in call order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// Names of the actions received so far, in call order.
    pub fn actions(&self) -> Vec<String> {
        self.calls().into_iter().map(|(action, _)| action).collect()
    }
}

#[async_trait]
impl AnkiBackend for FakeBackend {
    async fn invoke(&self, action: &str, params: Value) -> BackendResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((action.to_string(), params));

        match self.replies.get(action) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(message)) => Err(BackendError::anki(action, message.clone())),
            None => Err(BackendError::anki(action, "unsupported action")),
        }
    }
}

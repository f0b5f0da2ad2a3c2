//! Deck tools.

use rmcp::model::{JsonObject, Tool};
use tracing::{info, instrument};

use super::{Access, NoParams, build_tool, join_names};
use crate::core::anki::{AnkiBackend, actions, decode};
use crate::domains::tools::error::ToolResult;

/// Lists the names of every deck in the collection.
pub struct ListDecksTool;

impl ListDecksTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "listDecks";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the names of all decks in the Anki collection.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        build_tool::<NoParams>(Self::NAME, Self::DESCRIPTION, Access::ReadOnly)
    }

    #[instrument(skip_all)]
    pub async fn execute(backend: &dyn AnkiBackend, _arguments: JsonObject) -> ToolResult<String> {
        let result = backend
            .invoke(actions::DECK_NAMES, serde_json::json!({}))
            .await?;
        let names: Vec<String> = decode(actions::DECK_NAMES, result)?;

        info!("Found {} decks", names.len());
        Ok(format!("Available decks: {}", join_names(&names)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::anki::testing::FakeBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_decks_joins_names() {
        let backend = FakeBackend::new().with_result(actions::DECK_NAMES, json!(["Default", "Spanish"]));

        let text = ListDecksTool::execute(&backend, JsonObject::new()).await.unwrap();
        assert!(text.contains("Default, Spanish"));
        assert_eq!(backend.calls(), vec![("deckNames".to_string(), json!({}))]);
    }

    #[tokio::test]
    async fn test_list_decks_is_repeatable() {
        let backend = FakeBackend::new().with_result(actions::DECK_NAMES, json!(["Default"]));

        let first = ListDecksTool::execute(&backend, JsonObject::new()).await.unwrap();
        let second = ListDecksTool::execute(&backend, JsonObject::new()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(backend.actions(), vec!["deckNames", "deckNames"]);
    }
}

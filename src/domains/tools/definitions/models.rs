//! Note type (model) tools.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::{Access, NoParams, build_tool, join_names};
use crate::core::anki::{AnkiBackend, actions, decode};
use crate::domains::tools::error::{ToolError, ToolResult};

/// Lists the names of every note type.
pub struct ListModelsTool;

impl ListModelsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "listModels";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List the names of all note types (models) in the Anki collection.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        build_tool::<NoParams>(Self::NAME, Self::DESCRIPTION, Access::ReadOnly)
    }

    #[instrument(skip_all)]
    pub async fn execute(backend: &dyn AnkiBackend, _arguments: JsonObject) -> ToolResult<String> {
        let result = backend.invoke(actions::MODEL_NAMES, json!({})).await?;
        let names: Vec<String> = decode(actions::MODEL_NAMES, result)?;

        info!("Found {} models", names.len());
        Ok(format!("Available models: {}", join_names(&names)))
    }
}

/// Parameters for `getModel`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetModelParams {
    #[schemars(description = "Name of the note type, e.g. \"Basic\"")]
    pub model_name: String,
}

/// Fetches a full note type definition by name.
pub struct GetModelTool;

impl GetModelTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getModel";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the full definition of a note type (model) by name: its fields, card templates and styling.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        build_tool::<GetModelParams>(Self::NAME, Self::DESCRIPTION, Access::ReadOnly)
    }

    #[instrument(skip_all)]
    pub async fn execute(backend: &dyn AnkiBackend, arguments: JsonObject) -> ToolResult<String> {
        let params: GetModelParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", Self::NAME, e)))?;

        info!("Fetching model '{}'", params.model_name);

        let result = backend
            .invoke(
                actions::FIND_MODELS_BY_NAME,
                json!({ "modelNames": [params.model_name] }),
            )
            .await?;

        let definition = serde_json::to_string_pretty(&result)
            .map_err(|e| ToolError::internal(e.to_string()))?;

        Ok(format!(
            "Model definition for '{}':\n{}",
            params.model_name, definition
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::anki::testing::FakeBackend;
    use crate::domains::tools::validation::required_fields;

    #[tokio::test]
    async fn test_list_models() {
        let backend = FakeBackend::new().with_result(actions::MODEL_NAMES, json!(["Basic", "Cloze"]));

        let text = ListModelsTool::execute(&backend, JsonObject::new()).await.unwrap();
        assert_eq!(text, "Available models: Basic, Cloze");
    }

    #[test]
    fn test_get_model_requires_model_name() {
        let tool = GetModelTool::to_tool();
        assert_eq!(required_fields(&tool.input_schema), vec!["modelName"]);
    }

    #[tokio::test]
    async fn test_get_model_embeds_definition() {
        let backend = FakeBackend::new().with_result(
            actions::FIND_MODELS_BY_NAME,
            json!([{"id": 1, "name": "Basic", "flds": [{"name": "Front"}]}]),
        );
        let mut args = JsonObject::new();
        args.insert("modelName".into(), json!("Basic"));

        let text = GetModelTool::execute(&backend, args).await.unwrap();
        assert!(text.starts_with("Model definition for 'Basic':"));
        assert!(text.contains("\"Front\""));
        assert_eq!(
            backend.calls(),
            vec![("findModelsByName".to_string(), json!({"modelNames": ["Basic"]}))]
        );
    }

    #[tokio::test]
    async fn test_get_model_rejects_non_string_name() {
        let backend = FakeBackend::new();
        let mut args = JsonObject::new();
        args.insert("modelName".into(), json!(42));

        let err = GetModelTool::execute(&backend, args).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(backend.calls().is_empty());
    }
}

//! Note creation tools.
//!
//! Both tools forward the client's note objects to AnkiConnect untouched, so
//! anything AnkiConnect accepts on a note (audio, picture, ...) passes
//! through even though the schema only advertises the common fields.

use std::collections::HashMap;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::{Access, build_tool};
use crate::core::anki::{AnkiBackend, actions, decode};
use crate::domains::tools::error::ToolResult;

/// A note as AnkiConnect's `addNote` expects it.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteParams {
    #[schemars(description = "Name of the deck to add the note to")]
    pub deck_name: String,

    #[schemars(description = "Name of the note type (model), e.g. \"Basic\"")]
    pub model_name: String,

    #[schemars(description = "Field values keyed by field name, e.g. {\"Front\": \"...\", \"Back\": \"...\"}")]
    pub fields: HashMap<String, String>,

    #[schemars(description = "Tags to attach to the note")]
    #[serde(default)]
    pub tags: Vec<String>,

    #[schemars(description = "AnkiConnect note options such as duplicate handling")]
    #[serde(default)]
    pub options: Option<NoteOptions>,
}

/// Duplicate-handling options understood by AnkiConnect.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    #[schemars(description = "Allow creating a note whose first field duplicates an existing note")]
    #[serde(default)]
    pub allow_duplicate: Option<bool>,

    #[schemars(description = "Where to look for duplicates: \"deck\" or \"collection\"")]
    #[serde(default)]
    pub duplicate_scope: Option<String>,
}

/// Creates a single note.
pub struct AddNoteTool;

impl AddNoteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "addNote";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new note in an Anki deck. Requires the deck name, the note type (model) name and a value for its fields; tags are optional.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        build_tool::<NoteParams>(Self::NAME, Self::DESCRIPTION, Access::Writes)
    }

    #[instrument(skip_all)]
    pub async fn execute(backend: &dyn AnkiBackend, arguments: JsonObject) -> ToolResult<String> {
        let result = backend
            .invoke(actions::ADD_NOTE, json!({ "note": Value::Object(arguments) }))
            .await?;
        let id: u64 = decode(actions::ADD_NOTE, result)?;

        info!("Created note {}", id);
        Ok(format!("Note created with ID: {id}"))
    }
}

/// Parameters for `addNotes`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddNotesParams {
    #[schemars(description = "Notes to create, each shaped like the addNote arguments")]
    pub notes: Vec<NoteParams>,
}

/// Creates several notes in one AnkiConnect call.
pub struct AddNotesTool;

impl AddNotesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "addNotes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create several notes at once. Each note takes the same shape as the addNote arguments. Returns the new note IDs in order; a note Anki could not create is reported as failed.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        build_tool::<AddNotesParams>(Self::NAME, Self::DESCRIPTION, Access::Writes)
    }

    #[instrument(skip_all)]
    pub async fn execute(backend: &dyn AnkiBackend, mut arguments: JsonObject) -> ToolResult<String> {
        let notes = arguments.remove("notes").unwrap_or(Value::Null);

        let result = backend
            .invoke(actions::ADD_NOTES, json!({ "notes": notes }))
            .await?;
        let ids: Vec<Option<u64>> = decode(actions::ADD_NOTES, result)?;

        let failed = ids.iter().filter(|id| id.is_none()).count();
        if failed > 0 {
            warn!("{} of {} notes were not created", failed, ids.len());
        }
        info!("Created {} notes", ids.len() - failed);

        let ids: Vec<String> = ids
            .into_iter()
            .map(|id| id.map_or_else(|| "failed".to_string(), |id| id.to_string()))
            .collect();

        Ok(format!("Notes created with IDs: {}", ids.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::anki::testing::FakeBackend;
    use crate::domains::tools::validation::required_fields;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_add_note_required_fields() {
        let tool = AddNoteTool::to_tool();
        let mut required = required_fields(&tool.input_schema);
        required.sort();
        assert_eq!(required, vec!["deckName", "fields", "modelName"]);
    }

    #[test]
    fn test_add_notes_required_fields() {
        let tool = AddNotesTool::to_tool();
        assert_eq!(required_fields(&tool.input_schema), vec!["notes"]);
        assert_eq!(tool.annotations.unwrap().read_only_hint, Some(false));
    }

    #[test]
    fn test_note_params_accept_minimal_note() {
        let note: NoteParams = serde_json::from_value(json!({
            "deckName": "D",
            "modelName": "Basic",
            "fields": {"Front": "Q", "Back": "A"}
        }))
        .unwrap();
        assert!(note.tags.is_empty());
        assert!(note.options.is_none());
    }

    #[tokio::test]
    async fn test_add_note_wraps_arguments() {
        let backend = FakeBackend::new().with_result(actions::ADD_NOTE, json!(123));
        let args = object(json!({
            "deckName": "D",
            "modelName": "Basic",
            "fields": {"Front": "Q", "Back": "A"}
        }));

        let text = AddNoteTool::execute(&backend, args.clone()).await.unwrap();
        assert!(text.contains("123"));
        assert_eq!(
            backend.calls(),
            vec![("addNote".to_string(), json!({ "note": Value::Object(args) }))]
        );
    }

    #[tokio::test]
    async fn test_add_note_surfaces_duplicate_error() {
        let backend = FakeBackend::new()
            .with_error(actions::ADD_NOTE, "cannot create note because it is a duplicate");
        let args = object(json!({"deckName": "D", "modelName": "Basic", "fields": {"Front": "Q"}}));

        let err = AddNoteTool::execute(&backend, args).await.unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[tokio::test]
    async fn test_add_notes_passes_array_through() {
        let backend = FakeBackend::new().with_result(actions::ADD_NOTES, json!([11, null, 13]));
        let notes = json!([
            {"deckName": "D", "modelName": "Basic", "fields": {"Front": "1"}},
            {"deckName": "D", "modelName": "Basic", "fields": {"Front": "2"}},
            {"deckName": "D", "modelName": "Basic", "fields": {"Front": "3"}, "tags": ["t"]}
        ]);

        let text = AddNotesTool::execute(&backend, object(json!({ "notes": notes.clone() })))
            .await
            .unwrap();
        assert_eq!(text, "Notes created with IDs: 11, failed, 13");
        assert_eq!(
            backend.calls(),
            vec![("addNotes".to_string(), json!({ "notes": notes }))]
        );
    }
}

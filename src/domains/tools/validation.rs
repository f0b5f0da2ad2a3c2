//! Schema-driven argument checks applied before every tool dispatch.
//!
//! The `required` list of each tool's input schema is the single source of
//! truth; no tool re-checks its own arguments for presence.

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;

use super::error::{ToolError, ToolResult};

/// Top-level required property names declared by a JSON schema.
pub fn required_fields(schema: &JsonObject) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|required| required.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Required fields that are absent (or `null`) in `arguments`.
pub fn missing_fields<'a>(schema: &'a JsonObject, arguments: &JsonObject) -> Vec<&'a str> {
    required_fields(schema)
        .into_iter()
        .filter(|field| arguments.get(*field).is_none_or(Value::is_null))
        .collect()
}

/// Reject an invocation that lacks any field the tool declares as required.
pub fn check_required(tool: &Tool, arguments: &JsonObject) -> ToolResult<()> {
    let missing = missing_fields(&tool.input_schema, arguments);
    if missing.is_empty() {
        return Ok(());
    }

    Err(ToolError::invalid_arguments(format!(
        "{} is missing required argument(s): {}",
        tool.name,
        missing.join(", ")
    )))
}

//! Tool definitions module.
//!
//! One file per group of related tools. Each tool exposes:
//! - `NAME` / `DESCRIPTION` constants
//! - `to_tool()` building its descriptor from a typed parameter struct
//! - `execute()` doing the AnkiConnect call and formatting the reply
//!
//! Required-argument checks are not done here; the dispatcher runs them
//! uniformly from each descriptor's schema before `execute()` is reached.

pub mod decks;
pub mod models;
pub mod notes;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{Tool, ToolAnnotations};
use schemars::JsonSchema;

pub use decks::ListDecksTool;
pub use models::{GetModelParams, GetModelTool, ListModelsTool};
pub use notes::{AddNoteTool, AddNotesParams, AddNotesTool, NoteOptions, NoteParams};

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, serde::Deserialize, JsonSchema)]
pub struct NoParams {}

/// Whether a tool only reads from Anki or writes to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    Writes,
}

/// Build a tool descriptor whose input schema is generated from `P`.
pub(crate) fn build_tool<P>(name: &'static str, description: &'static str, access: Access) -> Tool
where
    P: JsonSchema + 'static,
{
    let read_only = access == Access::ReadOnly;

    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: Some(ToolAnnotations {
            title: None,
            read_only_hint: Some(read_only),
            destructive_hint: Some(false),
            idempotent_hint: Some(read_only),
            open_world_hint: Some(false),
        }),
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Render a list of names for display.
pub(crate) fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

//! Tools domain module.
//!
//! Tools are the operations an MCP client can invoke against Anki:
//! `listDecks`, `listModels`, `getModel`, `addNote` and `addNotes`.
//!
//! ## Architecture
//!
//! - `definitions/` - tool implementations, grouped by Anki entity
//! - `dispatcher.rs` - the tool table and name-based routing
//! - `validation.rs` - required-argument checks driven by input schemas
//! - `error.rs` - tool errors and their MCP mapping
//!
//! ## Adding a New Tool
//!
//! 1. Add a tool struct with `NAME`, `DESCRIPTION`, `to_tool()` and
//!    `execute()` under `definitions/`
//! 2. List it in `ToolDispatcher::all_tools()` and in the `match` of
//!    `ToolDispatcher::call()`

pub mod definitions;
mod dispatcher;
mod error;
pub mod validation;

pub use dispatcher::ToolDispatcher;
pub use error::{ToolError, ToolResult};

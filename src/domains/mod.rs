//! Domains module containing the MCP-facing business logic.
//!
//! - **resources**: Anki decks and note types addressable by `anki://` URI
//! - **tools**: operations a client can invoke against Anki

pub mod resources;
pub mod tools;

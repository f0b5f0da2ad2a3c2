//! Resources domain module.
//!
//! Resources are Anki entities a client can read by URI:
//!
//! - `anki://decks/<id>` - a deck (reads back as `{"deckId": <id>}`)
//! - `anki://models/<id>` - a note type definition from `findModelsById`
//!
//! ## Architecture
//!
//! - `uri.rs` - parsing and formatting of entity references
//! - `catalog.rs` - listing and reading through AnkiConnect
//! - `error.rs` - resource errors and their MCP mapping

mod catalog;
mod error;
pub mod uri;

pub use catalog::ResourceCatalog;
pub use error::ResourceError;
pub use uri::{EntityKind, EntityRef};

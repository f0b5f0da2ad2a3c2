//! Anki MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes an Anki collection,
//! reached through the AnkiConnect add-on, as MCP resources and tools.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the AnkiConnect gateway, the server
//!   handler and transports
//! - **domains**: MCP-facing logic
//!   - **resources**: decks and note types as `anki://` URIs
//!   - **tools**: `listDecks`, `listModels`, `getModel`, `addNote`, `addNotes`
//!
//! # Example
//!
//! ```rust,no_run
//! use anki_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

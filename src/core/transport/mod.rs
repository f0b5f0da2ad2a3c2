//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the normal way an MCP client launches
//!   this server - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over raw TCP sockets, one MCP session
//!   per connection - feature: `tcp`
//!
//! Both hand the byte stream to rmcp and delegate every request to
//! [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

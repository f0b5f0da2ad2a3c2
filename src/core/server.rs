//! MCP Server implementation.
//!
//! `McpServer` is the value rmcp drives. It owns the resource catalog and the
//! tool dispatcher, both built explicitly from a [`Config`] and an
//! [`AnkiBackend`], and translates their results and errors into MCP shapes.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::anki::{AnkiBackend, AnkiClient};
use super::config::Config;
use super::error::Result;
use crate::domains::{resources::ResourceCatalog, tools::ToolDispatcher};

const INSTRUCTIONS: &str = "This server manages an Anki collection through AnkiConnect. \
Decks and note types are listed as anki:// resources. Use listDecks and listModels to \
discover names, getModel to see a note type's fields, and addNote/addNotes to create notes. \
Anki must be running with the AnkiConnect add-on installed.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Lists and reads `anki://` resources.
    resources: Arc<ResourceCatalog>,

    /// Routes tool calls.
    tools: Arc<ToolDispatcher>,
}

impl McpServer {
    /// Create a server talking to the AnkiConnect endpoint in `config`.
    pub fn new(config: Config) -> Result<Self> {
        let backend = AnkiClient::new(&config.anki)?;
        info!("Using AnkiConnect at {}", backend.url());
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Create a server on top of an arbitrary backend.
    pub fn with_backend(config: Config, backend: Arc<dyn AnkiBackend>) -> Self {
        Self {
            config: Arc::new(config),
            resources: Arc::new(ResourceCatalog::new(backend.clone())),
            tools: Arc::new(ToolDispatcher::new(backend)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The resource catalog.
    pub fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }

    /// The tool dispatcher.
    pub fn tools(&self) -> &ToolDispatcher {
        &self.tools
    }

    /// `resources/list` without the request plumbing.
    pub async fn resource_listing(&self) -> std::result::Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.resources.list().await?,
            next_cursor: None,
            meta: None,
        })
    }

    /// `resources/read` without the request plumbing.
    pub async fn read_uri(&self, uri: &str) -> std::result::Result<ReadResourceResult, McpError> {
        Ok(self.resources.read(uri).await?)
    }

    /// `tools/call` without the request plumbing.
    pub async fn invoke_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tools.call(name, arguments).await {
            Ok(result) => Ok(result),
            Err(e) => e.into_call_result(),
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        self.resource_listing().await
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resources.templates(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.read_uri(&request.uri).await
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.invoke_tool(&request.name, request.arguments).await
    }
}

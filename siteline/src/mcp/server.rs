//! MCP server implementation for serving content query tools

use crate::store::ContentStore;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::register_all;

const SERVER_INSTRUCTIONS: &str = "Read-only access to the club's content space. Use blog_*, meeting_*, eboard_list, hackathon_*, graphic_*, and banner_list to query individual content types, content_search for cross-type substring search, and content_overview for entry counts. All tools degrade to empty results when the content space is unreachable.";

/// MCP server for serving content queries
#[derive(Clone)]
pub struct SitelineServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing the shared content store
    pub tool_context: Arc<ToolContext>,
}

impl SitelineServer {
    /// Create a new MCP server over the given content store.
    ///
    /// The store is shared read-only across tool calls; the registry is
    /// populated with the complete tool surface up front.
    pub fn new(store: ContentStore) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_all(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(Arc::new(store))),
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability { list_changed: None }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for SitelineServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        if !self.tool_context.store.is_configured() {
            tracing::warn!("content space credentials missing, all queries will return empty results");
        }

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(SERVER_INSTRUCTIONS.into()),
            server_info: Implementation {
                name: "Siteline".into(),
                version: crate::VERSION.into(),
            },
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if let Some(tool) = self.tool_registry.get_tool(&request.name) {
            tool.execute(request.arguments.unwrap_or_default(), &self.tool_context)
                .await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "Siteline".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}

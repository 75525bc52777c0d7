//! Content overview tool

use crate::mcp::responses::{create_error_response, create_json_response};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::ContentOverviewRequest;
use crate::overview::collect_overview;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Register the overview tool with the registry
pub fn register_overview_tools(registry: &mut ToolRegistry) {
    registry.register(ContentOverviewTool);
}

/// Tool reporting entry counts across all content types
#[derive(Default)]
pub struct ContentOverviewTool;

#[async_trait]
impl McpTool for ContentOverviewTool {
    fn name(&self) -> &'static str {
        "content_overview"
    }

    fn description(&self) -> &'static str {
        "Report entry counts for every content type, collected concurrently, with a timestamp."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let _request: ContentOverviewRequest = BaseToolImpl::parse_arguments(arguments)?;
        // One aggregate error beats a partial, misleading count set.
        match collect_overview(&context.store).await {
            Ok(overview) => Ok(create_json_response(&overview)),
            Err(e) => Ok(create_error_response(format!(
                "Content overview unavailable: {e}"
            ))),
        }
    }
}

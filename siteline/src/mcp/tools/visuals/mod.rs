//! Landing page graphic and banner query tools

use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::{BannerListRequest, GraphicGetRequest, GraphicListRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Register all graphic and banner tools with the registry
pub fn register_visual_tools(registry: &mut ToolRegistry) {
    registry.register(GraphicListTool);
    registry.register(GraphicGetTool);
    registry.register(BannerListTool);
}

/// Tool for listing landing page graphics
#[derive(Default)]
pub struct GraphicListTool;

#[async_trait]
impl McpTool for GraphicListTool {
    fn name(&self) -> &'static str {
        "graphic_list"
    }

    fn description(&self) -> &'static str {
        "List landing page graphics by ascending creation time. Optionally cap the number returned."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of graphics to return"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GraphicListRequest = BaseToolImpl::parse_arguments(arguments)?;
        let graphics = context.store.all_graphics(request.limit).await;
        Ok(create_json_response(&serde_json::json!({
            "count": graphics.len(),
            "graphics": graphics,
        })))
    }
}

/// Tool for retrieving a landing page graphic by title
#[derive(Default)]
pub struct GraphicGetTool;

#[async_trait]
impl McpTool for GraphicGetTool {
    fn name(&self) -> &'static str {
        "graphic_get"
    }

    fn description(&self) -> &'static str {
        "Retrieve a landing page graphic by its exact title."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Exact title of the graphic to retrieve"
                }
            },
            "required": ["title"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GraphicGetRequest = BaseToolImpl::parse_arguments(arguments)?;
        let graphic = context.store.graphic_by_title(&request.title).await;
        Ok(create_json_response(
            &serde_json::json!({ "graphic": graphic }),
        ))
    }
}

/// Tool for listing parallax banners
#[derive(Default)]
pub struct BannerListTool;

#[async_trait]
impl McpTool for BannerListTool {
    fn name(&self) -> &'static str {
        "banner_list"
    }

    fn description(&self) -> &'static str {
        "List parallax banners by ascending creation time. Optionally cap the number returned."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of banners to return"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: BannerListRequest = BaseToolImpl::parse_arguments(arguments)?;
        let banners = context.store.all_banners(request.limit).await;
        Ok(create_json_response(&serde_json::json!({
            "count": banners.len(),
            "banners": banners,
        })))
    }
}

//! Meeting query tools

use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::{MeetingListRequest, MeetingUpcomingRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Register all meeting tools with the registry
pub fn register_meeting_tools(registry: &mut ToolRegistry) {
    registry.register(MeetingListTool);
    registry.register(MeetingUpcomingTool);
}

/// Tool for listing general meetings
#[derive(Default)]
pub struct MeetingListTool;

#[async_trait]
impl McpTool for MeetingListTool {
    fn name(&self) -> &'static str {
        "meeting_list"
    }

    fn description(&self) -> &'static str {
        "List general meetings by descending date. Optionally cap the number returned."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of meetings to return"
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
        let request: MeetingListRequest = BaseToolImpl::parse_arguments(arguments)?;
        let meetings = context.store.all_meetings(request.limit).await;
        Ok(create_json_response(&serde_json::json!({
            "count": meetings.len(),
            "meetings": meetings,
        })))
    }
}

/// Tool for listing upcoming meetings
#[derive(Default)]
pub struct MeetingUpcomingTool;

#[async_trait]
impl McpTool for MeetingUpcomingTool {
    fn name(&self) -> &'static str {
        "meeting_upcoming"
    }

    fn description(&self) -> &'static str {
        "List upcoming meetings in store order. Optionally cap the number returned."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of meetings to return"
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
        let request: MeetingUpcomingRequest = BaseToolImpl::parse_arguments(arguments)?;
        let meetings = context.store.upcoming_meetings(request.limit).await;
        Ok(create_json_response(&serde_json::json!({
            "count": meetings.len(),
            "meetings": meetings,
        })))
    }
}

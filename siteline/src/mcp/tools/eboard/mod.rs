//! Board member query tools

use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::EboardListRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Register all board member tools with the registry
pub fn register_eboard_tools(registry: &mut ToolRegistry) {
    registry.register(EboardListTool);
}

/// Tool for listing board members
#[derive(Default)]
pub struct EboardListTool;

#[async_trait]
impl McpTool for EboardListTool {
    fn name(&self) -> &'static str {
        "eboard_list"
    }

    fn description(&self) -> &'static str {
        "List executive board members by tenure. Filter with member_type: current, past, or all (default). The combined view lists current members first."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "member_type": {
                    "type": "string",
                    "enum": ["current", "past", "all"],
                    "description": "Which partition to list (default all)"
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
        let request: EboardListRequest = BaseToolImpl::parse_arguments(arguments)?;
        let members = match request.member_type.as_deref() {
            Some("current") => context.store.current_members(None).await,
            Some("past") => context.store.past_members(None).await,
            Some("all") | None => context.store.all_members().await,
            Some(other) => {
                return Err(McpError::invalid_request(
                    format!("Unknown member_type '{other}', expected current, past, or all"),
                    None,
                ))
            }
        };
        Ok(create_json_response(&serde_json::json!({
            "count": members.len(),
            "members": members,
        })))
    }
}

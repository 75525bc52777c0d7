//! Hackathon query tools

use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::{HackathonByStatusRequest, HackathonGetRequest, HackathonListRequest};
use crate::store::HackathonStatus;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Register all hackathon tools with the registry
pub fn register_hackathon_tools(registry: &mut ToolRegistry) {
    registry.register(HackathonListTool);
    registry.register(HackathonByStatusTool);
    registry.register(HackathonGetTool);
}

/// Tool for listing hackathons
#[derive(Default)]
pub struct HackathonListTool;

#[async_trait]
impl McpTool for HackathonListTool {
    fn name(&self) -> &'static str {
        "hackathon_list"
    }

    fn description(&self) -> &'static str {
        "List hackathons by descending start date. Optionally cap the number returned."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of hackathons to return"
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
        let request: HackathonListRequest = BaseToolImpl::parse_arguments(arguments)?;
        let hackathons = context.store.all_hackathons(request.limit).await;
        Ok(create_json_response(&serde_json::json!({
            "count": hackathons.len(),
            "hackathons": hackathons,
        })))
    }
}

/// Tool for listing hackathons in a lifecycle status
#[derive(Default)]
pub struct HackathonByStatusTool;

#[async_trait]
impl McpTool for HackathonByStatusTool {
    fn name(&self) -> &'static str {
        "hackathon_by_status"
    }

    fn description(&self) -> &'static str {
        "List hackathons in one lifecycle status. Records without a status field count as upcoming."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "enum": ["ongoing", "upcoming", "past"],
                    "description": "Lifecycle status to list"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of hackathons to return"
                }
            },
            "required": ["status"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: HackathonByStatusRequest = BaseToolImpl::parse_arguments(arguments)?;
        let status = HackathonStatus::parse(&request.status).ok_or_else(|| {
            McpError::invalid_request(
                format!(
                    "Unknown status '{}', expected ongoing, upcoming, or past",
                    request.status
                ),
                None,
            )
        })?;
        let hackathons = context
            .store
            .hackathons_by_status(status, request.limit)
            .await;
        Ok(create_json_response(&serde_json::json!({
            "status": status.as_str(),
            "count": hackathons.len(),
            "hackathons": hackathons,
        })))
    }
}

/// Tool for retrieving a hackathon by slug
#[derive(Default)]
pub struct HackathonGetTool;

#[async_trait]
impl McpTool for HackathonGetTool {
    fn name(&self) -> &'static str {
        "hackathon_get"
    }

    fn description(&self) -> &'static str {
        "Retrieve a hackathon by slug. Store identifiers are accepted for records that predate the slug field."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "slug": {
                    "type": "string",
                    "description": "Slug of the hackathon to retrieve"
                }
            },
            "required": ["slug"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: HackathonGetRequest = BaseToolImpl::parse_arguments(arguments)?;
        let hackathon = context.store.hackathon_by_slug(&request.slug).await;
        Ok(create_json_response(
            &serde_json::json!({ "hackathon": hackathon }),
        ))
    }
}

//! Cross-type content search tool

use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::ContentSearchRequest;
use crate::search::{search, SearchScope, DEFAULT_PER_TYPE_LIMIT};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Register the search tool with the registry
pub fn register_search_tools(registry: &mut ToolRegistry) {
    registry.register(ContentSearchTool);
}

/// Tool for searching across content types
#[derive(Default)]
pub struct ContentSearchTool;

#[async_trait]
impl McpTool for ContentSearchTool {
    fn name(&self) -> &'static str {
        "content_search"
    }

    fn description(&self) -> &'static str {
        "Case-insensitive substring search across content types. Defaults to blog posts, meetings, board members, and hackathons; pass types to narrow or widen the scope."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Text to match, case-insensitive"
                },
                "types": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "enum": [
                            "blogPosts",
                            "meetings",
                            "eboardMembers",
                            "hackathons",
                            "landingPageGraphics",
                            "parallaxBanners"
                        ]
                    },
                    "description": "Type names to search (default blogPosts, meetings, eboardMembers, hackathons)"
                },
                "limit_per_type": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum hits retained per type (default 5)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ContentSearchRequest = BaseToolImpl::parse_arguments(arguments)?;

        let scope = match &request.types {
            Some(names) => {
                let mut scope = Vec::with_capacity(names.len());
                for name in names {
                    let member = SearchScope::parse(name).ok_or_else(|| {
                        McpError::invalid_request(format!("Unknown content type '{name}'"), None)
                    })?;
                    scope.push(member);
                }
                Some(scope)
            }
            None => None,
        };

        let outcome = search(
            &context.store,
            &request.query,
            scope.as_deref(),
            request.limit_per_type.unwrap_or(DEFAULT_PER_TYPE_LIMIT),
        )
        .await;

        Ok(create_json_response(&outcome))
    }
}

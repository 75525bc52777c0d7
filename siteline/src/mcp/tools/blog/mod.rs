//! Blog post query tools

use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::{BlogGetRequest, BlogListRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Register all blog tools with the registry
pub fn register_blog_tools(registry: &mut ToolRegistry) {
    registry.register(BlogListTool);
    registry.register(BlogGetTool);
}

/// Tool for listing blog posts
#[derive(Default)]
pub struct BlogListTool;

#[async_trait]
impl McpTool for BlogListTool {
    fn name(&self) -> &'static str {
        "blog_list"
    }

    fn description(&self) -> &'static str {
        "List blog posts, newest first. Optionally cap the number of posts returned."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of posts to return"
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
        let request: BlogListRequest = BaseToolImpl::parse_arguments(arguments)?;
        let posts = context.store.all_posts(request.limit).await;
        Ok(create_json_response(&serde_json::json!({
            "count": posts.len(),
            "posts": posts,
        })))
    }
}

/// Tool for retrieving a blog post by slug
#[derive(Default)]
pub struct BlogGetTool;

#[async_trait]
impl McpTool for BlogGetTool {
    fn name(&self) -> &'static str {
        "blog_get"
    }

    fn description(&self) -> &'static str {
        "Retrieve the first blog post whose slug contains the given text (case-sensitive)."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "slug": {
                    "type": "string",
                    "description": "Slug (or slug fragment) of the post to retrieve"
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
        let request: BlogGetRequest = BaseToolImpl::parse_arguments(arguments)?;
        let post = context.store.post_by_slug(&request.slug).await;
        Ok(create_json_response(&serde_json::json!({ "post": post })))
    }
}

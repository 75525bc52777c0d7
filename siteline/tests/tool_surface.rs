//! Integration tests for the MCP tool surface, driven through the tool
//! registry against a canned entry source.

use rmcp::model::{CallToolResult, RawContent};
use serde_json::{json, Map, Value};
use siteline::entries::ContentType;
use siteline::mcp::{ToolContext, ToolRegistry};
use siteline::store::ContentStore;
use siteline::test_support::{raw_entry, StaticEntrySource};
use std::sync::Arc;

const EXPECTED_TOOLS: &[&str] = &[
    "blog_list",
    "blog_get",
    "meeting_list",
    "meeting_upcoming",
    "eboard_list",
    "hackathon_list",
    "hackathon_by_status",
    "hackathon_get",
    "graphic_list",
    "graphic_get",
    "banner_list",
    "content_search",
    "content_overview",
];

fn sample_registry_and_context() -> (ToolRegistry, ToolContext) {
    let source = StaticEntrySource::new()
        .with_entries(
            ContentType::BlogPost,
            vec![
                raw_entry(
                    "p1",
                    "2024-03-01T00:00:00Z",
                    json!({ "title": "Spring Recap", "slug": "spring-recap" }),
                ),
                raw_entry(
                    "p2",
                    "2024-02-01T00:00:00Z",
                    json!({ "title": "Winter Workshop", "slug": "winter-workshop" }),
                ),
            ],
        )
        .with_entries(
            ContentType::Hackathon,
            vec![raw_entry(
                "h1",
                "2024-01-01T00:00:00Z",
                json!({ "title": "Spring Hackathon", "slug": "spring-2024" }),
            )],
        )
        .with_entries(
            ContentType::EboardMember,
            vec![
                raw_entry(
                    "e1",
                    "2021-09-01T00:00:00Z",
                    json!({ "name": "Ada", "memberType": "current" }),
                ),
                raw_entry(
                    "e2",
                    "2019-09-01T00:00:00Z",
                    json!({ "name": "Alan", "memberType": "past" }),
                ),
            ],
        );

    let mut registry = ToolRegistry::new();
    siteline::mcp::tools::register_all(&mut registry);
    let context = ToolContext::new(Arc::new(ContentStore::new(Arc::new(source))));
    (registry, context)
}

fn arguments(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("arguments must be an object"),
    }
}

fn response_json(result: &CallToolResult) -> Value {
    assert_eq!(result.is_error, Some(false));
    match &result.content[0].raw {
        RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
        _ => panic!("expected text content"),
    }
}

#[test]
fn every_expected_tool_is_registered() {
    let (registry, _context) = sample_registry_and_context();
    assert_eq!(registry.len(), EXPECTED_TOOLS.len());
    for name in EXPECTED_TOOLS {
        assert!(registry.get_tool(name).is_some(), "missing tool {name}");
    }
}

#[test]
fn every_tool_declares_an_object_schema() {
    let (registry, _context) = sample_registry_and_context();
    for tool in registry.list_tools() {
        assert_eq!(
            tool.input_schema.get("type"),
            Some(&json!("object")),
            "tool {} schema is not an object",
            tool.name
        );
        assert!(tool.description.is_some());
    }
}

#[tokio::test]
async fn blog_list_respects_limit() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("blog_list").unwrap();

    let result = tool
        .execute(arguments(json!({ "limit": 1 })), &context)
        .await
        .unwrap();
    let payload = response_json(&result);
    assert_eq!(payload["count"], json!(1));
    assert_eq!(payload["posts"][0]["id"], json!("p1"));
}

#[tokio::test]
async fn blog_get_returns_null_for_unknown_slug() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("blog_get").unwrap();

    let result = tool
        .execute(arguments(json!({ "slug": "no-such" })), &context)
        .await
        .unwrap();
    assert_eq!(response_json(&result)["post"], Value::Null);

    let result = tool
        .execute(arguments(json!({ "slug": "winter" })), &context)
        .await
        .unwrap();
    assert_eq!(response_json(&result)["post"]["id"], json!("p2"));
}

#[tokio::test]
async fn eboard_list_rejects_unknown_member_type() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("eboard_list").unwrap();

    let error = tool
        .execute(arguments(json!({ "member_type": "alumni" })), &context)
        .await
        .unwrap_err();
    assert!(format!("{error:?}").contains("alumni"));
}

#[tokio::test]
async fn eboard_list_concatenates_current_then_past() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("eboard_list").unwrap();

    let result = tool.execute(Map::new(), &context).await.unwrap();
    let payload = response_json(&result);
    assert_eq!(payload["count"], json!(2));
    assert_eq!(payload["members"][0]["memberType"], json!("current"));
    assert_eq!(payload["members"][1]["memberType"], json!("past"));
}

#[tokio::test]
async fn content_search_reports_envelope_fields() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("content_search").unwrap();

    let result = tool
        .execute(arguments(json!({ "query": "hackathon" })), &context)
        .await
        .unwrap();
    let payload = response_json(&result);
    assert_eq!(payload["query"], json!("hackathon"));
    assert_eq!(payload["total"], json!(1));
    assert_eq!(payload["results"]["hackathons"][0]["id"], json!("h1"));
    assert_eq!(
        payload["searchedTypes"],
        json!(["blogPosts", "meetings", "eboardMembers", "hackathons"])
    );
}

#[tokio::test]
async fn content_search_rejects_unknown_type() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("content_search").unwrap();

    let error = tool
        .execute(
            arguments(json!({ "query": "x", "types": ["podcasts"] })),
            &context,
        )
        .await
        .unwrap_err();
    assert!(format!("{error:?}").contains("podcasts"));
}

#[tokio::test]
async fn content_overview_counts_every_type() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("content_overview").unwrap();

    let result = tool.execute(Map::new(), &context).await.unwrap();
    let payload = response_json(&result);
    assert_eq!(payload["blogPosts"], json!(2));
    assert_eq!(payload["eboardMembers"], json!(2));
    assert_eq!(payload["hackathons"], json!(1));
    assert_eq!(payload["meetings"], json!(0));
    assert!(payload["generatedAt"].is_string());
}

#[tokio::test]
async fn hackathon_get_accepts_slug_and_identifier() {
    let (registry, context) = sample_registry_and_context();
    let tool = registry.get_tool("hackathon_get").unwrap();

    let result = tool
        .execute(arguments(json!({ "slug": "spring-2024" })), &context)
        .await
        .unwrap();
    assert_eq!(response_json(&result)["hackathon"]["id"], json!("h1"));

    let result = tool
        .execute(arguments(json!({ "slug": "h1" })), &context)
        .await
        .unwrap();
    assert_eq!(response_json(&result)["hackathon"]["id"], json!("h1"));
}

//! Content query tools for MCP operations
//!
//! Each submodule is one tool family with a dedicated registration
//! function; `register_all` wires the complete tool surface.

pub mod blog;
pub mod eboard;
pub mod hackathons;
pub mod meetings;
pub mod overview;
pub mod search;
pub mod visuals;

use crate::mcp::tool_registry::ToolRegistry;

/// Register every content tool family with the registry
pub fn register_all(registry: &mut ToolRegistry) {
    blog::register_blog_tools(registry);
    meetings::register_meeting_tools(registry);
    eboard::register_eboard_tools(registry);
    hackathons::register_hackathon_tools(registry);
    visuals::register_visual_tools(registry);
    search::register_search_tools(registry);
    overview::register_overview_tools(registry);
}

//! Model Context Protocol (MCP) server support
//!
//! This module exposes the content query resolvers, the search aggregator,
//! and the overview as named MCP tools served over stdio.

// Module declarations
pub mod responses;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

// Re-export commonly used items from submodules
pub use server::SitelineServer;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};

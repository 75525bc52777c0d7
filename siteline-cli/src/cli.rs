use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "siteline")]
#[command(version)]
#[command(about = "An MCP server exposing read-only queries over a Contentful content space")]
#[command(long_about = "
siteline is an MCP (Model Context Protocol) server that exposes read-only
query and search tools over a Contentful content space: blog posts,
meetings, board members, hackathons, and landing page visuals.

Credentials come from the environment:
  CONTENTFUL_SPACE_ID       space identifier
  CONTENTFUL_ACCESS_TOKEN   delivery API token
  CONTENTFUL_ENVIRONMENT    optional, defaults to 'master'
  CONTENTFUL_HOST           optional, defaults to 'cdn.contentful.com'

Example usage:
  siteline serve      # Run as MCP server over stdio
  siteline doctor     # Check configuration and connectivity
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs siteline as an MCP server over stdio. This is the mode MCP clients
such as Claude Code invoke. The server will:

- Acquire a handle to the configured content space; missing credentials
  degrade to empty results rather than failing startup
- Expose one tool per content query, plus cross-type search and an
  entry-count overview

Example:
  siteline serve
  # Or configure in your MCP client's settings
")]
    Serve,
    /// Diagnose configuration and connectivity issues
    #[command(long_about = "
Checks the environment configuration and, when credentials are present,
probes the content space with a single listing request.

Exit codes:
  0 - All checks passed
  1 - Warnings found (e.g. missing credentials)
  2 - Errors found (e.g. space unreachable)

Example:
  siteline doctor
")]
    Doctor,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

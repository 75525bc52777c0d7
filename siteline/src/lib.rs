//! # Siteline
//!
//! Read-only access to a Contentful content space, served as MCP tools.
//!
//! ## Features
//!
//! - **Resilient remote handle**: missing credentials degrade to a null
//!   handle that serves empty results instead of failing startup
//! - **Entity normalization**: raw delivery-API entries become stable typed
//!   records with resolved image URLs
//! - **Per-type query resolvers**: sorted listings, slug lookups, and
//!   status partitioning, all fail-open
//! - **Cross-type search**: concurrent case-insensitive substring search
//!   with per-type result caps and failure isolation
//! - **MCP Support**: Model Context Protocol server integration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use siteline::{client, config::SpaceConfig, store::ContentStore};
//!
//! # async fn run() {
//! // Read CONTENTFUL_* credentials from the environment
//! let config = SpaceConfig::from_env();
//!
//! // Acquiring a handle never fails; without credentials it serves
//! // empty results
//! let store = ContentStore::new(client::acquire(&config));
//!
//! let posts = store.all_posts(Some(3)).await;
//! println!("{} recent posts", posts.len());
//! # }
//! ```

#![warn(missing_docs)]

/// Environment-driven configuration for the content space
pub mod config;

/// Remote content delivery client and the `EntrySource` handle
pub mod client;

/// Typed content entities and the raw-to-typed normalization layer
pub mod entries;

/// Per-entity-type query resolvers
pub mod store;

/// Cross-type substring search
pub mod search;

/// Count-based content overview
pub mod overview;

/// Model Context Protocol (MCP) server support
pub mod mcp;

// Re-export core types
pub use client::{acquire, DeliveryClient, EntryQuery, EntrySource, NullEntrySource};
pub use config::SpaceConfig;
pub use entries::{
    BlogPost, ContentType, EboardMember, Hackathon, ImageAsset, LandingPageGraphic, Meeting,
    ParallaxBanner, RawEntry,
};
pub use overview::{collect_overview, ContentOverview};
pub use search::{search, SearchResults, SearchScope};
pub use store::{classify_status, ContentStore, HackathonStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Main error type for the library
    #[derive(Debug, Error)]
    pub enum SitelineError {
        /// Invalid configuration
        #[error("Configuration error: {0}")]
        Config(String),

        /// HTTP transport failure while talking to the delivery API
        #[error("HTTP error: {0}")]
        Http(#[from] reqwest::Error),

        /// The delivery API answered with a non-success status
        #[error("Content API error: HTTP {status}")]
        Api {
            /// HTTP status code returned by the remote store
            status: u16,
        },

        /// JSON serialization/deserialization error
        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),

        /// Other errors
        #[error("{0}")]
        Other(String),
    }

    /// Result type alias
    pub type Result<T> = std::result::Result<T, SitelineError>;
}

pub use error::{Result, SitelineError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        acquire, classify_status, collect_overview, search, BlogPost, ContentOverview,
        ContentStore, ContentType, EboardMember, EntryQuery, EntrySource, Hackathon,
        HackathonStatus, ImageAsset, LandingPageGraphic, Meeting, ParallaxBanner, RawEntry,
        Result, SearchResults, SearchScope, SitelineError, SpaceConfig,
    };

    pub use crate::mcp::SitelineServer;
}

/// Test utilities module for testing support
#[doc(hidden)]
pub mod test_support;

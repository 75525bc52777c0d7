//! Environment-driven configuration for the remote content space.
//!
//! Credentials are read from `CONTENTFUL_*` environment variables. Absent
//! credentials are a recoverable condition: [`crate::client::acquire`]
//! degrades to a null handle instead of aborting startup.

use std::env;

/// Default delivery API host.
pub const DEFAULT_HOST: &str = "cdn.contentful.com";

/// Default space environment.
pub const DEFAULT_ENVIRONMENT: &str = "master";

/// Connection parameters for the remote content space.
#[derive(Debug, Clone)]
pub struct SpaceConfig {
    /// Space identifier, from `CONTENTFUL_SPACE_ID`.
    pub space_id: String,
    /// Delivery API access token, from `CONTENTFUL_ACCESS_TOKEN`.
    pub access_token: String,
    /// Space environment, from `CONTENTFUL_ENVIRONMENT` (default `master`).
    pub environment: String,
    /// Delivery API host, from `CONTENTFUL_HOST` (default
    /// `cdn.contentful.com`).
    pub host: String,
}

impl SpaceConfig {
    /// Build a configuration from the process environment.
    ///
    /// Missing variables yield empty credentials rather than an error;
    /// [`SpaceConfig::is_complete`] reports whether the result is usable.
    pub fn from_env() -> Self {
        Self {
            space_id: env_string("CONTENTFUL_SPACE_ID"),
            access_token: env_string("CONTENTFUL_ACCESS_TOKEN"),
            environment: env_or("CONTENTFUL_ENVIRONMENT", DEFAULT_ENVIRONMENT),
            host: env_or("CONTENTFUL_HOST", DEFAULT_HOST),
        }
    }

    /// Build a configuration from explicit credentials, with default
    /// environment and host.
    pub fn new(space_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            access_token: access_token.into(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Whether both credentials are present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.space_id.is_empty() && !self.access_token.is_empty()
    }
}

fn env_string(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

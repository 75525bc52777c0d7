//! Doctor module for siteline diagnostics
//!
//! Checks the environment configuration and, when credentials are present,
//! probes the content space with a single listing request.
//!
//! Exit codes:
//! - 0: All checks passed
//! - 1: Warnings detected (e.g. missing credentials)
//! - 2: Errors detected (e.g. space unreachable)

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use anyhow::Result;
use siteline::client::{DeliveryClient, EntryQuery, EntrySource};
use siteline::entries::ContentType;
use siteline::SpaceConfig;

/// Outcome of a single diagnostic check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check found a recoverable problem
    Warning,
    /// Check found a critical problem
    Error,
}

/// A single diagnostic check result
#[derive(Debug)]
pub struct Check {
    /// Short name of the check
    pub name: &'static str,
    /// Outcome
    pub status: CheckStatus,
    /// Human-readable detail
    pub message: String,
}

impl Check {
    fn marker(&self) -> &'static str {
        match self.status {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning => "⚠",
            CheckStatus::Error => "✗",
        }
    }
}

fn credential_checks(config: &SpaceConfig) -> Vec<Check> {
    let mut checks = Vec::new();

    checks.push(if config.space_id.is_empty() {
        Check {
            name: "space id",
            status: CheckStatus::Warning,
            message: "CONTENTFUL_SPACE_ID is not set, queries will return empty results"
                .to_string(),
        }
    } else {
        Check {
            name: "space id",
            status: CheckStatus::Ok,
            message: format!("space '{}'", config.space_id),
        }
    });

    checks.push(if config.access_token.is_empty() {
        Check {
            name: "access token",
            status: CheckStatus::Warning,
            message: "CONTENTFUL_ACCESS_TOKEN is not set, queries will return empty results"
                .to_string(),
        }
    } else {
        Check {
            name: "access token",
            status: CheckStatus::Ok,
            message: "delivery token present".to_string(),
        }
    });

    checks
}

async fn connectivity_check(config: &SpaceConfig) -> Check {
    let client = match DeliveryClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            return Check {
                name: "connectivity",
                status: CheckStatus::Error,
                message: format!("failed to construct delivery client: {e}"),
            }
        }
    };

    let probe = EntryQuery::new(ContentType::BlogPost).limited(1);
    match client.list_entries(&probe).await {
        Ok(_) => Check {
            name: "connectivity",
            status: CheckStatus::Ok,
            message: format!("{} reachable", config.host),
        },
        Err(e) => Check {
            name: "connectivity",
            status: CheckStatus::Error,
            message: format!("probe request failed: {e}"),
        },
    }
}

/// Run all diagnostics and report the worst finding as the exit code
pub async fn run_diagnostics() -> Result<i32> {
    let config = SpaceConfig::from_env();

    let mut checks = credential_checks(&config);
    if config.is_complete() {
        checks.push(connectivity_check(&config).await);
    }

    println!("siteline doctor");
    for check in &checks {
        println!("  {} {}: {}", check.marker(), check.name, check.message);
    }

    Ok(summarize(&checks))
}

/// Fold check results into an exit code
pub fn summarize(checks: &[Check]) -> i32 {
    if checks
        .iter()
        .any(|check| check.status == CheckStatus::Error)
    {
        EXIT_ERROR
    } else if checks
        .iter()
        .any(|check| check.status == CheckStatus::Warning)
    {
        EXIT_WARNING
    } else {
        EXIT_SUCCESS
    }
}

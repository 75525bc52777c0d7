//! Remote content delivery client.
//!
//! All access to the content space goes through the [`EntrySource`] trait,
//! which models the single logical operation the store offers: list entries
//! matching a content type, optional field-equality filters, an optional
//! sort key, and an optional result ceiling. The live implementation talks
//! to the Contentful Delivery API; [`NullEntrySource`] stands in when no
//! usable credentials are configured.

use crate::config::SpaceConfig;
use crate::entries::{ContentType, RawEntry};
use crate::{Result, SitelineError};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Request timeout applied to every delivery API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A single "list entries" request against the content store.
#[derive(Debug, Clone)]
pub struct EntryQuery {
    content_type: ContentType,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<usize>,
}

impl EntryQuery {
    /// Start a query for the given content type.
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Add an equality filter on an entry field.
    pub fn with_field(mut self, field: &str, value: &str) -> Self {
        self.filters
            .push((format!("fields.{field}"), value.to_string()));
        self
    }

    /// Request server-side ordering by the given sort key.
    pub fn ordered_by(mut self, key: &str) -> Self {
        self.order = Some(key.to_string());
        self
    }

    /// Cap the number of entries returned by the store.
    pub fn limited(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The content type this query targets.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The field-equality filters attached to this query.
    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    /// The result ceiling attached to this query, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Encode the query as delivery API request parameters.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(
            "content_type".to_string(),
            self.content_type.api_id().to_string(),
        )];
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Handle to the remote content store.
///
/// Implementations must be shareable across concurrent calls; the handle
/// carries read-only configuration plus a stateless call method.
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// List entries matching the query.
    async fn list_entries(&self, query: &EntryQuery) -> Result<Vec<RawEntry>>;

    /// Whether this handle holds usable credentials.
    fn is_configured(&self) -> bool;
}

#[derive(Debug, Deserialize)]
struct EntryCollection {
    #[serde(default)]
    items: Vec<RawEntry>,
}

/// Live client against the Contentful Delivery API.
pub struct DeliveryClient {
    http: reqwest::Client,
    entries_url: String,
    access_token: String,
}

impl DeliveryClient {
    /// Build a client for the configured space.
    pub fn new(config: &SpaceConfig) -> Result<Self> {
        if !config.is_complete() {
            return Err(SitelineError::Config(
                "space id and access token are required".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let entries_url = format!(
            "https://{}/spaces/{}/environments/{}/entries",
            config.host, config.space_id, config.environment
        );
        Ok(Self {
            http,
            entries_url,
            access_token: config.access_token.clone(),
        })
    }
}

#[async_trait]
impl EntrySource for DeliveryClient {
    async fn list_entries(&self, query: &EntryQuery) -> Result<Vec<RawEntry>> {
        let response = self
            .http
            .get(&self.entries_url)
            .bearer_auth(&self.access_token)
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SitelineError::Api {
                status: status.as_u16(),
            });
        }

        let collection: EntryCollection = response.json().await?;
        Ok(collection.items)
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Handle used when no usable credentials are configured.
///
/// Every operation succeeds immediately with an empty result set, so
/// downstream resolvers never need to special-case a missing connection.
pub struct NullEntrySource;

#[async_trait]
impl EntrySource for NullEntrySource {
    async fn list_entries(&self, _query: &EntryQuery) -> Result<Vec<RawEntry>> {
        Ok(Vec::new())
    }

    fn is_configured(&self) -> bool {
        false
    }
}

/// Acquire a handle to the content space.
///
/// Never fails: when credentials are missing or client construction fails,
/// the problem is logged as a warning and a [`NullEntrySource`] is returned
/// instead.
pub fn acquire(config: &SpaceConfig) -> Arc<dyn EntrySource> {
    if !config.is_complete() {
        tracing::warn!("content space credentials missing, serving empty results");
        return Arc::new(NullEntrySource);
    }
    match DeliveryClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::warn!("failed to construct delivery client ({e}), serving empty results");
            Arc::new(NullEntrySource)
        }
    }
}

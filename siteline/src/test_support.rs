//! Test doubles for the entry source.
//!
//! Shipped alongside the library so unit tests, integration tests, and
//! downstream consumers can drive the resolvers without a live content
//! space.

use crate::client::{EntryQuery, EntrySource};
use crate::entries::{ContentType, RawEntry};
use crate::{Result, SitelineError};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Build a raw entry from its identifier, creation time, and field bag.
pub fn raw_entry(id: &str, created_at: &str, fields: Value) -> RawEntry {
    serde_json::from_value(json!({
        "sys": { "id": id, "createdAt": created_at },
        "fields": fields
    }))
    .expect("static entry must deserialize")
}

/// Entry source serving canned records from memory.
///
/// Honors the query's content type, equality filters, and limit. Ordering
/// is not simulated: records are returned in insertion order, so tests
/// feed data pre-sorted the way the store would return it.
#[derive(Default)]
pub struct StaticEntrySource {
    records: Vec<(ContentType, RawEntry)>,
}

impl StaticEntrySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add canned entries under a content type.
    pub fn with_entries(mut self, content_type: ContentType, entries: Vec<RawEntry>) -> Self {
        self.records
            .extend(entries.into_iter().map(|entry| (content_type, entry)));
        self
    }
}

fn matches_filters(entry: &RawEntry, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(key, expected)| {
        let field = match key.strip_prefix("fields.") {
            Some(field) => field,
            None => return false,
        };
        entry
            .fields
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|actual| actual == expected)
    })
}

#[async_trait]
impl EntrySource for StaticEntrySource {
    async fn list_entries(&self, query: &EntryQuery) -> Result<Vec<RawEntry>> {
        let mut items: Vec<RawEntry> = self
            .records
            .iter()
            .filter(|(content_type, _)| *content_type == query.content_type())
            .map(|(_, entry)| entry.clone())
            .filter(|entry| matches_filters(entry, query.filters()))
            .collect();
        if let Some(limit) = query.limit() {
            items.truncate(limit);
        }
        Ok(items)
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Entry source that simulates an outage for selected content types and
/// delegates the rest to an inner static source.
pub struct FailingEntrySource {
    inner: StaticEntrySource,
    failing: Vec<ContentType>,
}

impl FailingEntrySource {
    /// Wrap a static source, failing every listed content type.
    pub fn new(inner: StaticEntrySource, failing: Vec<ContentType>) -> Self {
        Self { inner, failing }
    }

    /// A source where every content type fails.
    pub fn total_outage() -> Self {
        Self {
            inner: StaticEntrySource::new(),
            failing: vec![
                ContentType::BlogPost,
                ContentType::Meeting,
                ContentType::UpcomingMeeting,
                ContentType::EboardMember,
                ContentType::Hackathon,
                ContentType::LandingPageGraphic,
                ContentType::ParallaxBanner,
            ],
        }
    }
}

#[async_trait]
impl EntrySource for FailingEntrySource {
    async fn list_entries(&self, query: &EntryQuery) -> Result<Vec<RawEntry>> {
        if self.failing.contains(&query.content_type()) {
            return Err(SitelineError::Other(format!(
                "simulated outage for {}",
                query.content_type().api_id()
            )));
        }
        self.inner.list_entries(query).await
    }

    fn is_configured(&self) -> bool {
        true
    }
}

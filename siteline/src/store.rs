//! Per-entity-type query resolvers over the content store.
//!
//! Every resolver is total: remote failures are logged through `tracing`
//! and degrade to an empty list or `None`, never an error. An unreachable
//! backing store degrades the feature instead of failing the caller; the
//! cost is that callers cannot distinguish "empty" from "unreachable"
//! without the logs.

use crate::client::{EntryQuery, EntrySource};
use crate::entries::{
    BlogPost, ContentType, EboardMember, Hackathon, LandingPageGraphic, Meeting, ParallaxBanner,
    RawEntry,
};
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

/// Bounded page used for the client-side hackathon scans.
const HACKATHON_PAGE_CAP: usize = 100;

const ORDER_NEWEST_CREATED: &str = "-sys.createdAt";
const ORDER_OLDEST_CREATED: &str = "sys.createdAt";
const ORDER_MEETING_DATE_DESC: &str = "-fields.date";
const ORDER_HACKATHON_START_DESC: &str = "-fields.startDate";

/// Lifecycle classification for hackathons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackathonStatus {
    /// Currently running
    Ongoing,
    /// Not started yet
    Upcoming,
    /// Already finished
    Past,
}

impl HackathonStatus {
    /// Parse a raw status value. Returns `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ongoing" => Some(HackathonStatus::Ongoing),
            "upcoming" => Some(HackathonStatus::Upcoming),
            "past" => Some(HackathonStatus::Past),
            _ => None,
        }
    }

    /// The wire representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            HackathonStatus::Ongoing => "ongoing",
            HackathonStatus::Upcoming => "upcoming",
            HackathonStatus::Past => "past",
        }
    }
}

/// Classify a raw `status` field into a definite category.
///
/// The `status` field does not exist on older records, so classification
/// happens client-side rather than as a store-side filter: an absent value
/// classifies as `upcoming`, and an unrecognized value is treated the same
/// way. Every record therefore lands in exactly one partition.
pub fn classify_status(raw: Option<&str>) -> HackathonStatus {
    raw.and_then(HackathonStatus::parse)
        .unwrap_or(HackathonStatus::Upcoming)
}

fn truncated<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

fn parsed_date(value: Option<&str>) -> Option<DateTime<FixedOffset>> {
    value.and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
}

/// Read-oriented query surface over the remote content space.
///
/// Holds the shared [`EntrySource`] handle; construct once and share across
/// concurrent calls.
#[derive(Clone)]
pub struct ContentStore {
    source: Arc<dyn EntrySource>,
}

impl ContentStore {
    /// Create a store over the given entry source.
    pub fn new(source: Arc<dyn EntrySource>) -> Self {
        Self { source }
    }

    /// Whether the underlying handle holds usable credentials.
    pub fn is_configured(&self) -> bool {
        self.source.is_configured()
    }

    /// Run a listing query, degrading to an empty list on failure.
    async fn fetch(&self, query: EntryQuery) -> Vec<RawEntry> {
        match self.source.list_entries(&query).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    content_type = query.content_type().api_id(),
                    error = %e,
                    "entry listing failed, returning empty result"
                );
                Vec::new()
            }
        }
    }

    /// List blog posts, newest created first.
    pub async fn all_posts(&self, limit: Option<usize>) -> Vec<BlogPost> {
        let raw = self
            .fetch(EntryQuery::new(ContentType::BlogPost).ordered_by(ORDER_NEWEST_CREATED))
            .await;
        let posts = raw
            .iter()
            .map(|entry| BlogPost::from_raw(entry, ContentType::BlogPost))
            .collect();
        truncated(posts, limit)
    }

    /// First post whose slug contains the given text (case-sensitive), or
    /// `None`.
    pub async fn post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.all_posts(None)
            .await
            .into_iter()
            .find(|post| post.slug.as_deref().is_some_and(|s| s.contains(slug)))
    }

    /// List general meetings by descending date.
    ///
    /// The listing is re-sorted client-side: the store-side date sort has
    /// proven unreliable, and this is the one place ordering is re-derived
    /// rather than trusted.
    pub async fn all_meetings(&self, limit: Option<usize>) -> Vec<Meeting> {
        let raw = self
            .fetch(EntryQuery::new(ContentType::Meeting).ordered_by(ORDER_MEETING_DATE_DESC))
            .await;
        let mut meetings: Vec<Meeting> = raw
            .iter()
            .map(|entry| Meeting::from_raw(entry, ContentType::Meeting))
            .collect();
        meetings.sort_by(|a, b| {
            parsed_date(b.date.as_deref()).cmp(&parsed_date(a.date.as_deref()))
        });
        truncated(meetings, limit)
    }

    /// List upcoming meetings in store-provided order.
    pub async fn upcoming_meetings(&self, limit: Option<usize>) -> Vec<Meeting> {
        let raw = self
            .fetch(EntryQuery::new(ContentType::UpcomingMeeting))
            .await;
        let meetings = raw
            .iter()
            .map(|entry| Meeting::from_raw(entry, ContentType::UpcomingMeeting))
            .collect();
        truncated(meetings, limit)
    }

    async fn members_by_type(&self, member_type: &str, limit: Option<usize>) -> Vec<EboardMember> {
        let raw = self
            .fetch(
                EntryQuery::new(ContentType::EboardMember)
                    .with_field("memberType", member_type)
                    .ordered_by(ORDER_OLDEST_CREATED),
            )
            .await;
        let members = raw
            .iter()
            .map(|entry| EboardMember::from_raw(entry, ContentType::EboardMember))
            .collect();
        truncated(members, limit)
    }

    /// List current board members, oldest tenure first.
    pub async fn current_members(&self, limit: Option<usize>) -> Vec<EboardMember> {
        self.members_by_type("current", limit).await
    }

    /// List past board members, oldest tenure first.
    pub async fn past_members(&self, limit: Option<usize>) -> Vec<EboardMember> {
        self.members_by_type("past", limit).await
    }

    /// List all board members, current first, then past.
    pub async fn all_members(&self) -> Vec<EboardMember> {
        let (current, past) = tokio::join!(self.current_members(None), self.past_members(None));
        current.into_iter().chain(past).collect()
    }

    /// List hackathons by descending start date.
    pub async fn all_hackathons(&self, limit: Option<usize>) -> Vec<Hackathon> {
        let raw = self
            .fetch(EntryQuery::new(ContentType::Hackathon).ordered_by(ORDER_HACKATHON_START_DESC))
            .await;
        let hackathons = raw
            .iter()
            .map(|entry| Hackathon::from_raw(entry, ContentType::Hackathon))
            .collect();
        truncated(hackathons, limit)
    }

    async fn hackathon_page(&self) -> Vec<Hackathon> {
        let raw = self
            .fetch(EntryQuery::new(ContentType::Hackathon).limited(HACKATHON_PAGE_CAP))
            .await;
        raw.iter()
            .map(|entry| Hackathon::from_raw(entry, ContentType::Hackathon))
            .collect()
    }

    /// List hackathons in the given lifecycle status.
    ///
    /// Classification uses [`classify_status`] over a bounded page, so
    /// records without a `status` field land in `upcoming`.
    pub async fn hackathons_by_status(
        &self,
        status: HackathonStatus,
        limit: Option<usize>,
    ) -> Vec<Hackathon> {
        let matched = self
            .hackathon_page()
            .await
            .into_iter()
            .filter(|hackathon| classify_status(hackathon.status.as_deref()) == status)
            .collect();
        truncated(matched, limit)
    }

    /// Look up a hackathon by slug, falling back to the store identifier
    /// for records that predate the `slug` field.
    pub async fn hackathon_by_slug(&self, slug: &str) -> Option<Hackathon> {
        let mut page = self.hackathon_page().await;
        if let Some(index) = page
            .iter()
            .position(|hackathon| hackathon.slug.as_deref() == Some(slug))
        {
            return Some(page.swap_remove(index));
        }
        let index = page.iter().position(|hackathon| hackathon.id == slug)?;
        Some(page.swap_remove(index))
    }

    /// List landing page graphics by ascending creation time.
    pub async fn all_graphics(&self, limit: Option<usize>) -> Vec<LandingPageGraphic> {
        let raw = self
            .fetch(EntryQuery::new(ContentType::LandingPageGraphic).ordered_by(ORDER_OLDEST_CREATED))
            .await;
        let graphics = raw
            .iter()
            .map(|entry| LandingPageGraphic::from_raw(entry, ContentType::LandingPageGraphic))
            .collect();
        truncated(graphics, limit)
    }

    /// Look up a landing page graphic by exact title.
    ///
    /// Short-circuits to `None` without a remote call when no credentials
    /// are configured.
    pub async fn graphic_by_title(&self, title: &str) -> Option<LandingPageGraphic> {
        if !self.source.is_configured() {
            return None;
        }
        let raw = self
            .fetch(EntryQuery::new(ContentType::LandingPageGraphic).with_field("title", title))
            .await;
        raw.first()
            .map(|entry| LandingPageGraphic::from_raw(entry, ContentType::LandingPageGraphic))
    }

    /// List parallax banners by ascending creation time.
    pub async fn all_banners(&self, limit: Option<usize>) -> Vec<ParallaxBanner> {
        let raw = self
            .fetch(EntryQuery::new(ContentType::ParallaxBanner).ordered_by(ORDER_OLDEST_CREATED))
            .await;
        let banners = raw
            .iter()
            .map(|entry| ParallaxBanner::from_raw(entry, ContentType::ParallaxBanner))
            .collect();
        truncated(banners, limit)
    }
}

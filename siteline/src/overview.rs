//! Count-based overview across all entity types.

use crate::store::ContentStore;
use crate::Result;
use serde::Serialize;

/// Per-type entry counts plus the collection timestamp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOverview {
    /// Number of blog posts
    pub blog_posts: usize,
    /// Number of general meetings
    pub meetings: usize,
    /// Number of board members, current and past
    pub eboard_members: usize,
    /// Number of hackathons
    pub hackathons: usize,
    /// Number of landing page graphics
    pub landing_page_graphics: usize,
    /// Number of parallax banners
    pub parallax_banners: usize,
    /// When the counts were collected, RFC 3339
    pub generated_at: String,
}

/// Collect entry counts for every entity type concurrently.
///
/// The fail-open resolvers make a failure here unexpected, but the
/// fallible signature lets the caller surface one aggregate error instead
/// of a partial, misleading count set.
pub async fn collect_overview(store: &ContentStore) -> Result<ContentOverview> {
    let (posts, meetings, members, hackathons, graphics, banners) = tokio::join!(
        store.all_posts(None),
        store.all_meetings(None),
        store.all_members(),
        store.all_hackathons(None),
        store.all_graphics(None),
        store.all_banners(None),
    );

    Ok(ContentOverview {
        blog_posts: posts.len(),
        meetings: meetings.len(),
        eboard_members: members.len(),
        hackathons: hackathons.len(),
        landing_page_graphics: graphics.len(),
        parallax_banners: banners.len(),
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

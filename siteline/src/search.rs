//! Cross-type substring search.
//!
//! Fans out over a selectable subset of entity types, fetching each type's
//! full listing concurrently and matching the query case-insensitively
//! against a fixed per-type list of text fields. A failed fetch degrades
//! that type to an empty list without disturbing the others; there is no
//! relevance ranking, the first `per_type_limit` matches in listing order
//! win.

use crate::store::ContentStore;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Number of hits retained per entity type unless the caller overrides it.
pub const DEFAULT_PER_TYPE_LIMIT: usize = 5;

/// Entity types addressable by the search aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Blog posts, matched on title, excerpt, and author
    BlogPosts,
    /// General meetings, matched on title and description
    Meetings,
    /// Board members, matched on name, position, and description
    EboardMembers,
    /// Hackathons, matched on title and description
    Hackathons,
    /// Landing page graphics, matched on title and description
    LandingPageGraphics,
    /// Parallax banners, matched on title
    ParallaxBanners,
}

impl SearchScope {
    /// Key under which this type's hits appear in the result envelope.
    pub fn key(self) -> &'static str {
        match self {
            SearchScope::BlogPosts => "blogPosts",
            SearchScope::Meetings => "meetings",
            SearchScope::EboardMembers => "eboardMembers",
            SearchScope::Hackathons => "hackathons",
            SearchScope::LandingPageGraphics => "landingPageGraphics",
            SearchScope::ParallaxBanners => "parallaxBanners",
        }
    }

    /// Parse a caller-supplied type name (the envelope key).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "blogPosts" => Some(SearchScope::BlogPosts),
            "meetings" => Some(SearchScope::Meetings),
            "eboardMembers" => Some(SearchScope::EboardMembers),
            "hackathons" => Some(SearchScope::Hackathons),
            "landingPageGraphics" => Some(SearchScope::LandingPageGraphics),
            "parallaxBanners" => Some(SearchScope::ParallaxBanners),
            _ => None,
        }
    }

    /// Types searched when the caller does not narrow the scope.
    ///
    /// Graphics and banners carry no meaningful prose beyond a title, so
    /// they are excluded by default but honored when requested explicitly.
    pub fn default_scope() -> Vec<SearchScope> {
        vec![
            SearchScope::BlogPosts,
            SearchScope::Meetings,
            SearchScope::EboardMembers,
            SearchScope::Hackathons,
        ]
    }
}

/// Aggregated search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// The query as received.
    pub query: String,
    /// The type subset actually searched, in request order.
    pub searched_types: Vec<&'static str>,
    /// Sum of all per-type result counts.
    pub total: usize,
    /// Per-type hits, keyed by type name.
    pub results: BTreeMap<&'static str, Vec<Value>>,
}

fn matches(needle: &str, fields: &[Option<&str>]) -> bool {
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn hits<T: Serialize>(
    items: Vec<T>,
    cap: usize,
    predicate: impl Fn(&T) -> bool,
) -> Vec<Value> {
    items
        .into_iter()
        .filter(|item| predicate(item))
        .take(cap)
        .filter_map(|item| serde_json::to_value(item).ok())
        .collect()
}

async fn search_posts(store: &ContentStore, enabled: bool, needle: &str, cap: usize) -> Vec<Value> {
    if !enabled {
        return Vec::new();
    }
    hits(store.all_posts(None).await, cap, |post| {
        matches(
            needle,
            &[
                post.title.as_deref(),
                post.excerpt.as_deref(),
                post.author.as_deref(),
            ],
        )
    })
}

async fn search_meetings(
    store: &ContentStore,
    enabled: bool,
    needle: &str,
    cap: usize,
) -> Vec<Value> {
    if !enabled {
        return Vec::new();
    }
    hits(store.all_meetings(None).await, cap, |meeting| {
        matches(
            needle,
            &[meeting.title.as_deref(), meeting.description.as_deref()],
        )
    })
}

async fn search_members(
    store: &ContentStore,
    enabled: bool,
    needle: &str,
    cap: usize,
) -> Vec<Value> {
    if !enabled {
        return Vec::new();
    }
    hits(store.all_members().await, cap, |member| {
        matches(
            needle,
            &[
                member.name.as_deref(),
                member.position.as_deref(),
                member.description.as_deref(),
            ],
        )
    })
}

async fn search_hackathons(
    store: &ContentStore,
    enabled: bool,
    needle: &str,
    cap: usize,
) -> Vec<Value> {
    if !enabled {
        return Vec::new();
    }
    hits(store.all_hackathons(None).await, cap, |hackathon| {
        matches(
            needle,
            &[hackathon.title.as_deref(), hackathon.description.as_deref()],
        )
    })
}

async fn search_graphics(
    store: &ContentStore,
    enabled: bool,
    needle: &str,
    cap: usize,
) -> Vec<Value> {
    if !enabled {
        return Vec::new();
    }
    hits(store.all_graphics(None).await, cap, |graphic| {
        matches(
            needle,
            &[graphic.title.as_deref(), graphic.description.as_deref()],
        )
    })
}

async fn search_banners(
    store: &ContentStore,
    enabled: bool,
    needle: &str,
    cap: usize,
) -> Vec<Value> {
    if !enabled {
        return Vec::new();
    }
    hits(store.all_banners(None).await, cap, |banner| {
        matches(needle, &[banner.title.as_deref()])
    })
}

/// Search the content space for a case-insensitive substring.
///
/// `scope` narrows the searched types; `None` or an empty slice means the
/// default scope. All in-scope fetches run concurrently and settle
/// independently, so one unreachable type still leaves the others' results
/// intact.
pub async fn search(
    store: &ContentStore,
    query: &str,
    scope: Option<&[SearchScope]>,
    per_type_limit: usize,
) -> SearchResults {
    let requested: Vec<SearchScope> = match scope {
        Some(scope) if !scope.is_empty() => {
            let mut deduped = Vec::new();
            for member in scope {
                if !deduped.contains(member) {
                    deduped.push(*member);
                }
            }
            deduped
        }
        _ => SearchScope::default_scope(),
    };
    let needle = query.to_lowercase();
    let in_scope = |member: SearchScope| requested.contains(&member);

    let (posts, meetings, members, hackathons, graphics, banners) = tokio::join!(
        search_posts(
            store,
            in_scope(SearchScope::BlogPosts),
            &needle,
            per_type_limit
        ),
        search_meetings(
            store,
            in_scope(SearchScope::Meetings),
            &needle,
            per_type_limit
        ),
        search_members(
            store,
            in_scope(SearchScope::EboardMembers),
            &needle,
            per_type_limit
        ),
        search_hackathons(
            store,
            in_scope(SearchScope::Hackathons),
            &needle,
            per_type_limit
        ),
        search_graphics(
            store,
            in_scope(SearchScope::LandingPageGraphics),
            &needle,
            per_type_limit
        ),
        search_banners(
            store,
            in_scope(SearchScope::ParallaxBanners),
            &needle,
            per_type_limit
        ),
    );

    let mut results = BTreeMap::new();
    for (member, typed_hits) in [
        (SearchScope::BlogPosts, posts),
        (SearchScope::Meetings, meetings),
        (SearchScope::EboardMembers, members),
        (SearchScope::Hackathons, hackathons),
        (SearchScope::LandingPageGraphics, graphics),
        (SearchScope::ParallaxBanners, banners),
    ] {
        if requested.contains(&member) {
            results.insert(member.key(), typed_hits);
        }
    }

    SearchResults {
        query: query.to_string(),
        searched_types: requested.iter().map(|member| member.key()).collect(),
        total: results.values().map(Vec::len).sum(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::ContentType;
    use crate::test_support::{raw_entry, FailingEntrySource, StaticEntrySource};
    use serde_json::json;
    use std::sync::Arc;

    fn sample_source() -> StaticEntrySource {
        StaticEntrySource::new()
            .with_entries(
                ContentType::Hackathon,
                vec![raw_entry(
                    "h1",
                    "2024-01-01T00:00:00Z",
                    json!({ "title": "Spring Hackathon" }),
                )],
            )
            .with_entries(
                ContentType::BlogPost,
                vec![raw_entry(
                    "p1",
                    "2024-02-01T00:00:00Z",
                    json!({ "title": "Reading Group", "excerpt": "Papers" }),
                )],
            )
            .with_entries(
                ContentType::EboardMember,
                vec![raw_entry(
                    "e1",
                    "2021-09-01T00:00:00Z",
                    json!({ "name": "Ada", "memberType": "current" }),
                )],
            )
    }

    #[tokio::test]
    async fn lone_match_lands_under_its_own_key_only() {
        let store = ContentStore::new(Arc::new(sample_source()));
        let outcome = search(&store, "hackathon", None, DEFAULT_PER_TYPE_LIMIT).await;

        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.results["hackathons"].len(), 1);
        assert_eq!(
            outcome.results["hackathons"][0]["title"],
            json!("Spring Hackathon")
        );
        for (key, typed_hits) in &outcome.results {
            if *key != "hackathons" {
                assert!(typed_hits.is_empty(), "unexpected hits under {key}");
            }
        }
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let store = ContentStore::new(Arc::new(sample_source()));
        let outcome = search(&store, "SPRING", None, DEFAULT_PER_TYPE_LIMIT).await;
        assert_eq!(outcome.total, 1);
    }

    #[tokio::test]
    async fn default_scope_spans_four_types() {
        let store = ContentStore::new(Arc::new(sample_source()));
        let outcome = search(&store, "x", None, DEFAULT_PER_TYPE_LIMIT).await;
        assert_eq!(
            outcome.searched_types,
            vec!["blogPosts", "meetings", "eboardMembers", "hackathons"]
        );
    }

    #[tokio::test]
    async fn explicit_scope_is_honored_and_echoed() {
        let store = ContentStore::new(Arc::new(sample_source()));
        let outcome = search(
            &store,
            "ada",
            Some(&[SearchScope::EboardMembers]),
            DEFAULT_PER_TYPE_LIMIT,
        )
        .await;

        assert_eq!(outcome.searched_types, vec!["eboardMembers"]);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.total, 1);
    }

    #[tokio::test]
    async fn one_failing_type_leaves_the_rest_intact() {
        let source = FailingEntrySource::new(sample_source(), vec![ContentType::BlogPost]);
        let store = ContentStore::new(Arc::new(source));
        let outcome = search(&store, "hackathon", None, DEFAULT_PER_TYPE_LIMIT).await;

        assert!(outcome.results["blogPosts"].is_empty());
        assert_eq!(outcome.results["hackathons"].len(), 1);
        assert_eq!(outcome.total, 1);
    }

    #[tokio::test]
    async fn per_type_cap_keeps_first_matches_in_listing_order() {
        let posts = (0..5)
            .map(|n| {
                raw_entry(
                    &format!("p{n}"),
                    "2024-01-01T00:00:00Z",
                    json!({ "title": format!("Club update {n}") }),
                )
            })
            .collect();
        let source = StaticEntrySource::new().with_entries(ContentType::BlogPost, posts);
        let store = ContentStore::new(Arc::new(source));

        let outcome = search(&store, "club", Some(&[SearchScope::BlogPosts]), 2).await;
        let ids: Vec<&str> = outcome.results["blogPosts"]
            .iter()
            .map(|post| post["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["p0", "p1"]);
    }
}

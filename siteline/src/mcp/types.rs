//! Request types for the content query MCP operations

use serde::{Deserialize, Serialize};

/// Request to list blog posts
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct BlogListRequest {
    /// Maximum number of posts to return
    pub limit: Option<usize>,
}

/// Request to look up a blog post by slug
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct BlogGetRequest {
    /// Slug (or slug fragment) of the post to retrieve
    pub slug: String,
}

/// Request to list general meetings
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct MeetingListRequest {
    /// Maximum number of meetings to return
    pub limit: Option<usize>,
}

/// Request to list upcoming meetings
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct MeetingUpcomingRequest {
    /// Maximum number of meetings to return
    pub limit: Option<usize>,
}

/// Request to list board members
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct EboardListRequest {
    /// `current`, `past`, or `all` (default)
    pub member_type: Option<String>,
}

/// Request to list hackathons
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct HackathonListRequest {
    /// Maximum number of hackathons to return
    pub limit: Option<usize>,
}

/// Request to list hackathons in a lifecycle status
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct HackathonByStatusRequest {
    /// `ongoing`, `upcoming`, or `past`
    pub status: String,
    /// Maximum number of hackathons to return
    pub limit: Option<usize>,
}

/// Request to look up a hackathon by slug
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct HackathonGetRequest {
    /// Slug of the hackathon; store identifiers are accepted for records
    /// that predate the slug field
    pub slug: String,
}

/// Request to list landing page graphics
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GraphicListRequest {
    /// Maximum number of graphics to return
    pub limit: Option<usize>,
}

/// Request to look up a landing page graphic by title
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GraphicGetRequest {
    /// Exact title of the graphic to retrieve
    pub title: String,
}

/// Request to list parallax banners
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct BannerListRequest {
    /// Maximum number of banners to return
    pub limit: Option<usize>,
}

/// Request to search across content types
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ContentSearchRequest {
    /// Text to match, case-insensitive
    pub query: String,
    /// Type names to search; defaults to blogPosts, meetings,
    /// eboardMembers, and hackathons
    pub types: Option<Vec<String>>,
    /// Maximum hits retained per type (default 5)
    pub limit_per_type: Option<usize>,
}

/// Request for the content overview
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ContentOverviewRequest {
    // No parameters needed for the overview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_get_request_serialization() {
        let request = BlogGetRequest {
            slug: "spring-recap".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: BlogGetRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.slug, deserialized.slug);
    }

    #[test]
    fn list_request_limit_is_optional() {
        let request: BlogListRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.limit, None);

        let request: BlogListRequest = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
        assert_eq!(request.limit, Some(3));
    }

    #[test]
    fn search_request_defaults() {
        let request: ContentSearchRequest =
            serde_json::from_str(r#"{"query": "hackathon"}"#).unwrap();
        assert_eq!(request.query, "hackathon");
        assert_eq!(request.types, None);
        assert_eq!(request.limit_per_type, None);
    }

    #[test]
    fn overview_request_accepts_empty_object() {
        let json = serde_json::to_string(&ContentOverviewRequest {}).unwrap();
        let _request: ContentOverviewRequest = serde_json::from_str(&json).unwrap();
    }
}

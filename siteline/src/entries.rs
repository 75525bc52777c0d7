//! Typed content entities and the raw-to-typed normalization layer.
//!
//! The delivery API returns entries as untyped attribute bags
//! ([`RawEntry`]). Each entity type has a `from_raw` constructor that maps
//! matching fields across, resolves asset links to file URLs, and stamps
//! the record with the content type the resolver queried for. Normalization
//! is pure and total: a missing field becomes an absent field, never an
//! error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Logical content types served by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Published blog posts
    BlogPost,
    /// General meetings
    Meeting,
    /// Upcoming meetings, maintained as a distinct category in the store
    UpcomingMeeting,
    /// Executive board members, current and past
    EboardMember,
    /// Hackathon events
    Hackathon,
    /// Landing page graphics
    LandingPageGraphic,
    /// Parallax banner images
    ParallaxBanner,
}

impl ContentType {
    /// Identifier used as the `content_type` discriminator on the wire and
    /// as the `contentTypeId` tag on normalized records.
    pub fn api_id(self) -> &'static str {
        match self {
            ContentType::BlogPost => "blogPost",
            ContentType::Meeting => "meeting",
            ContentType::UpcomingMeeting => "upcomingMeeting",
            ContentType::EboardMember => "eboardMember",
            ContentType::Hackathon => "hackathon",
            ContentType::LandingPageGraphic => "landingPageGraphics",
            ContentType::ParallaxBanner => "parallaxBanner",
        }
    }
}

/// System metadata attached to every raw entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EntrySys {
    /// Store-assigned immutable identifier.
    pub id: String,
    /// Creation timestamp, RFC 3339.
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// An untyped entry as returned by the delivery API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    /// System metadata.
    pub sys: EntrySys,
    /// Attribute bag keyed by field name.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl RawEntry {
    fn str_field(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    fn asset_field(&self, name: &str) -> Option<ImageAsset> {
        self.fields.get(name).and_then(ImageAsset::from_link)
    }

    fn asset_url_field(&self, name: &str) -> Option<String> {
        self.asset_field(name).map(|asset| asset.url)
    }
}

/// A resolved asset: canonical file URL plus pixel dimensions when the
/// store recorded them.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    /// Canonical file URL.
    pub url: String,
    /// Pixel width, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    /// Pixel height, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
}

impl ImageAsset {
    /// Resolve an asset link value to its file URL.
    ///
    /// Returns `None` when the value does not carry a resolvable file URL.
    /// Protocol-relative URLs, the delivery API's native form, are
    /// normalized to `https`.
    pub fn from_link(value: &Value) -> Option<Self> {
        let file = value.get("fields")?.get("file")?;
        let raw_url = file.get("url")?.as_str()?;
        if raw_url.is_empty() {
            return None;
        }
        let url = if raw_url.starts_with("//") {
            format!("https:{raw_url}")
        } else {
            raw_url.to_string()
        };
        let dimensions = file.get("details").and_then(|details| details.get("image"));
        Some(Self {
            url,
            width: dimensions
                .and_then(|image| image.get("width"))
                .and_then(Value::as_u64),
            height: dimensions
                .and_then(|image| image.get("height"))
                .and_then(Value::as_u64),
        })
    }
}

/// Pick the canonical image for a landing page graphic.
///
/// Priority order: `image` wins over `graphic`. When only `graphic`
/// resolves, it backfills the `image` slot so downstream consumers have
/// one field to read. Returns the backfilled image and the canonical URL.
pub fn resolve_graphic_image(
    image: Option<ImageAsset>,
    graphic: Option<ImageAsset>,
) -> (Option<ImageAsset>, Option<String>) {
    let chosen = image.or(graphic);
    let url = chosen.as_ref().map(|asset| asset.url.clone());
    (chosen, url)
}

/// A published blog post.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Store-assigned identifier
    pub id: String,
    /// Logical type tag stamped by the resolver
    pub content_type_id: &'static str,
    /// Post title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URL slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Body content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Short summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    /// Cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<ImageAsset>,
}

impl BlogPost {
    /// Normalize a raw entry, stamping it with the queried content type.
    pub fn from_raw(raw: &RawEntry, queried: ContentType) -> Self {
        Self {
            id: raw.sys.id.clone(),
            content_type_id: queried.api_id(),
            title: raw.str_field("title"),
            slug: raw.str_field("slug"),
            content: raw.str_field("content"),
            excerpt: raw.str_field("excerpt"),
            author: raw.str_field("author"),
            publish_date: raw.str_field("publishDate"),
            cover_image: raw.asset_field("coverImage"),
        }
    }
}

/// A meeting, general or upcoming.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Store-assigned identifier
    pub id: String,
    /// Logical type tag stamped by the resolver
    pub content_type_id: &'static str,
    /// Meeting title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meeting date, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Meeting description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Promotional image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAsset>,
    /// Where the meeting takes place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_location: Option<String>,
    /// Uploaded slide deck, resolved to its file URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides: Option<String>,
    /// External slide link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_url: Option<String>,
    /// Recording link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording: Option<String>,
    /// Additional resources link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_url: Option<String>,
}

impl Meeting {
    /// Normalize a raw entry, stamping it with the queried content type.
    ///
    /// The tag distinguishes the general and upcoming meeting categories;
    /// it always reflects the category the resolver queried, never the raw
    /// record.
    pub fn from_raw(raw: &RawEntry, queried: ContentType) -> Self {
        Self {
            id: raw.sys.id.clone(),
            content_type_id: queried.api_id(),
            title: raw.str_field("title"),
            date: raw.str_field("date"),
            description: raw.str_field("description"),
            image: raw.asset_field("image"),
            meeting_location: raw.str_field("meetingLocation"),
            slides: raw.asset_url_field("slides"),
            slides_url: raw.str_field("slidesUrl"),
            recording: raw.str_field("recording"),
            resources_url: raw.str_field("resourcesUrl"),
        }
    }
}

/// An executive board member.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EboardMember {
    /// Store-assigned identifier
    pub id: String,
    /// Logical type tag stamped by the resolver
    pub content_type_id: &'static str,
    /// Member name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Board position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Short bio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// LinkedIn profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// `current` or `past`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,
    /// GitHub profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Tenure year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Portrait image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAsset>,
}

impl EboardMember {
    /// Normalize a raw entry, stamping it with the queried content type.
    pub fn from_raw(raw: &RawEntry, queried: ContentType) -> Self {
        Self {
            id: raw.sys.id.clone(),
            content_type_id: queried.api_id(),
            name: raw.str_field("name"),
            position: raw.str_field("position"),
            description: raw.str_field("description"),
            linkedin: raw.str_field("linkedin"),
            member_type: raw.str_field("memberType"),
            github: raw.str_field("github"),
            year: year_field(raw),
            image: raw.asset_field("image"),
        }
    }
}

// Older member records store the year as a number, newer ones as a string.
fn year_field(raw: &RawEntry) -> Option<String> {
    match raw.fields.get("year") {
        Some(Value::String(year)) => Some(year.clone()),
        Some(Value::Number(year)) => Some(year.to_string()),
        _ => None,
    }
}

/// A hackathon event.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    /// Store-assigned identifier
    pub id: String,
    /// Logical type tag stamped by the resolver
    pub content_type_id: &'static str,
    /// Event title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Event description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL slug; absent on records predating the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Raw lifecycle status; classification into a definite category is
    /// the resolver's concern, so an absent value stays absent here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Registration form link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    /// Extended details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Promotional image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAsset>,
}

impl Hackathon {
    /// Normalize a raw entry, stamping it with the queried content type.
    pub fn from_raw(raw: &RawEntry, queried: ContentType) -> Self {
        Self {
            id: raw.sys.id.clone(),
            content_type_id: queried.api_id(),
            title: raw.str_field("title"),
            description: raw.str_field("description"),
            slug: raw.str_field("slug"),
            start_date: raw.str_field("startDate"),
            end_date: raw.str_field("endDate"),
            status: raw.str_field("status"),
            registration_link: raw.str_field("registrationLink"),
            details: raw.str_field("details"),
            image: raw.asset_field("image"),
        }
    }
}

/// A landing page graphic.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageGraphic {
    /// Store-assigned identifier
    pub id: String,
    /// Logical type tag stamped by the resolver
    pub content_type_id: &'static str,
    /// Graphic title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Graphic description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image asset; backfilled from `graphic` when only that field
    /// resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAsset>,
    /// Legacy image field, carried as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic: Option<ImageAsset>,
    /// Canonical image URL resolved from whichever field won
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LandingPageGraphic {
    /// Normalize a raw entry, stamping it with the queried content type.
    pub fn from_raw(raw: &RawEntry, queried: ContentType) -> Self {
        let graphic = raw.asset_field("graphic");
        let (image, image_url) = resolve_graphic_image(raw.asset_field("image"), graphic.clone());
        Self {
            id: raw.sys.id.clone(),
            content_type_id: queried.api_id(),
            title: raw.str_field("title"),
            description: raw.str_field("description"),
            image,
            graphic,
            image_url,
        }
    }
}

/// A parallax banner.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParallaxBanner {
    /// Store-assigned identifier
    pub id: String,
    /// Logical type tag stamped by the resolver
    pub content_type_id: &'static str,
    /// Banner title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Banner image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAsset>,
    /// Click-through link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ParallaxBanner {
    /// Normalize a raw entry, stamping it with the queried content type.
    pub fn from_raw(raw: &RawEntry, queried: ContentType) -> Self {
        Self {
            id: raw.sys.id.clone(),
            content_type_id: queried.api_id(),
            title: raw.str_field("title"),
            image: raw.asset_field("image"),
            link: raw.str_field("link"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::raw_entry;
    use serde_json::json;

    fn asset_link(url: &str) -> Value {
        json!({
            "fields": {
                "file": {
                    "url": url,
                    "details": { "image": { "width": 800, "height": 600 } }
                }
            }
        })
    }

    #[test]
    fn blog_post_maps_all_fields() {
        let raw = raw_entry(
            "post1",
            "2024-01-10T08:00:00Z",
            json!({
                "title": "Hello",
                "slug": "hello-world",
                "content": "Body",
                "excerpt": "Summary",
                "author": "Ada",
                "publishDate": "2024-01-10",
                "coverImage": asset_link("//img.example/cover.png")
            }),
        );

        let post = BlogPost::from_raw(&raw, ContentType::BlogPost);
        assert_eq!(post.id, "post1");
        assert_eq!(post.content_type_id, "blogPost");
        assert_eq!(post.title.as_deref(), Some("Hello"));
        assert_eq!(post.slug.as_deref(), Some("hello-world"));
        assert_eq!(post.author.as_deref(), Some("Ada"));

        let cover = post.cover_image.unwrap();
        assert_eq!(cover.url, "https://img.example/cover.png");
        assert_eq!(cover.width, Some(800));
        assert_eq!(cover.height, Some(600));
    }

    #[test]
    fn missing_required_fields_stay_absent() {
        let raw = raw_entry("post2", "2024-01-10T08:00:00Z", json!({}));
        let post = BlogPost::from_raw(&raw, ContentType::BlogPost);
        assert_eq!(post.title, None);
        assert_eq!(post.slug, None);

        let serialized = serde_json::to_value(&post).unwrap();
        assert!(serialized.get("title").is_none());
    }

    #[test]
    fn meeting_tag_reflects_queried_category() {
        let raw = raw_entry("m1", "2024-02-01T00:00:00Z", json!({ "title": "Kickoff" }));
        let general = Meeting::from_raw(&raw, ContentType::Meeting);
        let upcoming = Meeting::from_raw(&raw, ContentType::UpcomingMeeting);
        assert_eq!(general.content_type_id, "meeting");
        assert_eq!(upcoming.content_type_id, "upcomingMeeting");
    }

    #[test]
    fn meeting_resolves_slides_asset_to_url() {
        let raw = raw_entry(
            "m2",
            "2024-02-01T00:00:00Z",
            json!({
                "slides": asset_link("//files.example/deck.pdf"),
                "slidesUrl": "https://docs.example/deck"
            }),
        );
        let meeting = Meeting::from_raw(&raw, ContentType::Meeting);
        assert_eq!(
            meeting.slides.as_deref(),
            Some("https://files.example/deck.pdf")
        );
        assert_eq!(
            meeting.slides_url.as_deref(),
            Some("https://docs.example/deck")
        );
    }

    #[test]
    fn member_year_accepts_number_and_string() {
        let numeric = raw_entry("e1", "2021-09-01T00:00:00Z", json!({ "year": 2021 }));
        let textual = raw_entry("e2", "2022-09-01T00:00:00Z", json!({ "year": "2022" }));
        assert_eq!(
            EboardMember::from_raw(&numeric, ContentType::EboardMember).year,
            Some("2021".to_string())
        );
        assert_eq!(
            EboardMember::from_raw(&textual, ContentType::EboardMember).year,
            Some("2022".to_string())
        );
    }

    #[test]
    fn hackathon_status_passes_through_unclassified() {
        let raw = raw_entry("h1", "2023-03-01T00:00:00Z", json!({ "title": "Hack" }));
        let hackathon = Hackathon::from_raw(&raw, ContentType::Hackathon);
        assert_eq!(hackathon.status, None);
    }

    #[test]
    fn graphic_image_takes_priority_over_graphic() {
        let raw = raw_entry(
            "g1",
            "2023-05-01T00:00:00Z",
            json!({
                "title": "Hero",
                "image": asset_link("https://img.example/image.png"),
                "graphic": asset_link("https://img.example/graphic.png")
            }),
        );
        let graphic = LandingPageGraphic::from_raw(&raw, ContentType::LandingPageGraphic);
        assert_eq!(
            graphic.image_url.as_deref(),
            Some("https://img.example/image.png")
        );
        assert_eq!(
            graphic.image.unwrap().url,
            "https://img.example/image.png"
        );
    }

    #[test]
    fn graphic_only_backfills_image_from_graphic() {
        let raw = raw_entry(
            "g2",
            "2023-05-01T00:00:00Z",
            json!({
                "title": "Hero",
                "graphic": asset_link("https://img.example/graphic.png")
            }),
        );
        let graphic = LandingPageGraphic::from_raw(&raw, ContentType::LandingPageGraphic);
        assert_eq!(
            graphic.image.as_ref().unwrap().url,
            "https://img.example/graphic.png"
        );
        assert_eq!(graphic.image, graphic.graphic);
        assert_eq!(
            graphic.image_url.as_deref(),
            Some("https://img.example/graphic.png")
        );
    }

    #[test]
    fn graphic_without_resolvable_image_has_no_url() {
        let raw = raw_entry(
            "g3",
            "2023-05-01T00:00:00Z",
            json!({ "title": "Hero", "image": { "fields": {} } }),
        );
        let graphic = LandingPageGraphic::from_raw(&raw, ContentType::LandingPageGraphic);
        assert_eq!(graphic.image, None);
        assert_eq!(graphic.image_url, None);
    }

    #[test]
    fn asset_link_without_file_url_is_unresolvable() {
        assert_eq!(ImageAsset::from_link(&json!({})), None);
        assert_eq!(ImageAsset::from_link(&json!({ "fields": {} })), None);
        assert_eq!(
            ImageAsset::from_link(&json!({ "fields": { "file": { "url": "" } } })),
            None
        );
    }

    #[test]
    fn asset_dimensions_are_optional() {
        let asset =
            ImageAsset::from_link(&json!({ "fields": { "file": { "url": "https://x/y.png" } } }))
                .unwrap();
        assert_eq!(asset.width, None);
        assert_eq!(asset.height, None);
    }
}

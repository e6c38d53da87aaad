//! Type definitions for the Shlink client.
//!
//! Request inputs are optional-heavy value objects with the service defaults
//! baked into their `Default` impls; response types mirror the server's
//! camelCase wire format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input for creating a short URL.
///
/// Only `long_url` is required. Booleans carry the service defaults and are
/// always transmitted; everything else is omitted from the request unless
/// supplied.
///
/// # Example
///
/// ```
/// use shlink_client::ShortUrlSpec;
///
/// let spec = ShortUrlSpec {
///     long_url: "https://example.com/some/long/path".to_string(),
///     tags: vec!["docs".to_string()],
///     ..Default::default()
/// };
/// assert!(spec.crawlable);
/// ```
#[derive(Debug, Clone)]
pub struct ShortUrlSpec {
    /// URL the short URL resolves to. Must be non-empty.
    pub long_url: String,
    /// Per-platform long URL overrides.
    pub device_long_urls: DeviceLongUrls,
    /// ISO 8601 date the short URL becomes valid.
    pub valid_since: Option<String>,
    /// ISO 8601 date the short URL stops being valid.
    pub valid_until: Option<String>,
    /// Maximum number of visits before the short URL expires. Zero means
    /// unlimited and is never transmitted.
    pub max_visits: Option<u32>,
    /// Tags to attach, transmitted in the order given.
    pub tags: Vec<String>,
    /// Title for the short URL.
    pub title: Option<String>,
    /// Whether search engines may crawl the short URL. Default `true`.
    pub crawlable: bool,
    /// Whether query parameters are forwarded to the long URL. Default `true`.
    pub forward_query: bool,
    /// Custom slug instead of a generated short code.
    pub custom_slug: Option<String>,
    /// Domain to create the short URL on.
    pub domain: Option<String>,
    /// Whether to return an existing short URL for the same long URL instead
    /// of creating a new one. Default `true`.
    pub find_if_exists: bool,
    /// Length of the generated short code. Values of 3 or below are treated
    /// as unset.
    pub short_code_length: Option<u32>,
}

impl Default for ShortUrlSpec {
    fn default() -> Self {
        Self {
            long_url: String::new(),
            device_long_urls: DeviceLongUrls::default(),
            valid_since: None,
            valid_until: None,
            max_visits: None,
            tags: Vec::new(),
            title: None,
            crawlable: true,
            forward_query: true,
            custom_slug: None,
            domain: None,
            find_if_exists: true,
            short_code_length: None,
        }
    }
}

/// Per-platform long URL overrides.
///
/// Each platform is carried independently; platforms left unset are omitted
/// from the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceLongUrls {
    /// Override for Android devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<String>,
    /// Override for iOS devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<String>,
    /// Override for desktop devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
}

impl DeviceLongUrls {
    /// Whether no platform override is set.
    pub fn is_empty(&self) -> bool {
        self.android.is_none() && self.ios.is_none() && self.desktop.is_none()
    }
}

/// Partial update for an existing short URL.
///
/// Every field is optional; fields left unset are omitted from the request
/// and keep their server-side value. The same unset sentinels as
/// [`ShortUrlSpec`] apply to `max_visits`.
#[derive(Debug, Clone, Default)]
pub struct EditShortUrl {
    /// New long URL.
    pub long_url: Option<String>,
    /// Per-platform long URL overrides.
    pub device_long_urls: DeviceLongUrls,
    /// ISO 8601 date the short URL becomes valid.
    pub valid_since: Option<String>,
    /// ISO 8601 date the short URL stops being valid.
    pub valid_until: Option<String>,
    /// Maximum number of visits before the short URL expires.
    pub max_visits: Option<u32>,
    /// Replacement tag set. An empty set leaves the tags untouched.
    pub tags: Vec<String>,
    /// New title.
    pub title: Option<String>,
    /// Whether search engines may crawl the short URL.
    pub crawlable: Option<bool>,
    /// Whether query parameters are forwarded to the long URL.
    pub forward_query: Option<bool>,
}

/// How a tag filter combines multiple tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagsMode {
    /// Match short URLs carrying any of the tags.
    #[default]
    Any,
    /// Match short URLs carrying all of the tags.
    All,
}

impl TagsMode {
    /// Wire representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagsMode::Any => "any",
            TagsMode::All => "all",
        }
    }
}

impl fmt::Display for TagsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagsMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "any" => Ok(TagsMode::Any),
            "all" => Ok(TagsMode::All),
            other => Err(format!("tags mode must be 'any' or 'all', got: {}", other)),
        }
    }
}

/// Query for listing short URLs.
#[derive(Debug, Clone)]
pub struct ListShortUrlsQuery {
    /// Page to fetch, starting at 1.
    pub page: u32,
    /// Number of items per page.
    pub items_per_page: u32,
    /// Free-text search over long URLs, slugs and titles.
    pub search_term: Option<String>,
    /// Only list short URLs carrying these tags.
    pub tags: Vec<String>,
    /// How the tag filter combines multiple tags.
    pub tags_mode: TagsMode,
    /// Sort order, e.g. "dateCreated-DESC".
    pub order_by: String,
    /// Only list short URLs created after this ISO 8601 date.
    pub start_date: Option<String>,
    /// Only list short URLs created before this ISO 8601 date.
    pub end_date: Option<String>,
    /// Skip short URLs that reached their visit limit.
    pub exclude_max_visits_reached: bool,
    /// Skip short URLs past their valid-until date.
    pub exclude_past_valid_until: bool,
}

impl Default for ListShortUrlsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: 10,
            search_term: None,
            tags: Vec::new(),
            tags_mode: TagsMode::Any,
            order_by: "dateCreated-DESC".to_string(),
            start_date: None,
            end_date: None,
            exclude_max_visits_reached: false,
            exclude_past_valid_until: false,
        }
    }
}

/// Query for listing tags.
#[derive(Debug, Clone)]
pub struct ListTagsQuery {
    /// Page to fetch, starting at 1.
    pub page: u32,
    /// Number of items per page.
    pub items_per_page: u32,
    /// Free-text search over tag names.
    pub search_term: Option<String>,
    /// Sort order, e.g. "tag-ASC".
    pub order_by: String,
}

impl Default for ListTagsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: 10,
            search_term: None,
            order_by: "tag-ASC".to_string(),
        }
    }
}

/// A short URL resource returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    /// Short code identifying the resource.
    pub short_code: String,
    /// Full short URL.
    pub short_url: String,
    /// URL the short URL resolves to.
    pub long_url: String,
    /// ISO 8601 timestamp when the short URL was created.
    pub date_created: String,
    /// Tags attached to the short URL.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Validity window and visit limit.
    #[serde(default)]
    pub meta: ShortUrlMeta,
    /// Domain the short URL lives on, if not the default.
    pub domain: Option<String>,
    /// Title of the short URL.
    pub title: Option<String>,
    /// Whether search engines may crawl the short URL.
    #[serde(default)]
    pub crawlable: bool,
    /// Whether query parameters are forwarded to the long URL.
    #[serde(default)]
    pub forward_query: bool,
    /// Number of visits so far.
    #[serde(default)]
    pub visits_count: u64,
    /// Per-platform long URL overrides.
    #[serde(default)]
    pub device_long_urls: DeviceLongUrls,
}

/// Validity window and visit limit of a short URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlMeta {
    /// ISO 8601 date the short URL becomes valid.
    pub valid_since: Option<String>,
    /// ISO 8601 date the short URL stops being valid.
    pub valid_until: Option<String>,
    /// Maximum number of visits before the short URL expires.
    pub max_visits: Option<u32>,
}

/// One page of results from a list operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page.
    pub data: Vec<T>,
    /// Position of this page within the full result set.
    pub pagination: Pagination,
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page that was returned, starting at 1.
    pub current_page: u32,
    /// Total number of pages.
    pub pages_count: u32,
    /// Requested page size.
    pub items_per_page: u32,
    /// Number of items in the returned page.
    pub items_in_current_page: u32,
    /// Total number of items across all pages.
    pub total_items: u64,
}

//! Short URL management operations.

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::types::{DeviceLongUrls, EditShortUrl, ListShortUrlsQuery, Page, ShortUrl, ShortUrlSpec};
use serde::{Deserialize, Serialize};

/// Short codes of this length or below are treated as unset.
const MIN_SHORT_CODE_LENGTH: u32 = 3;

/// Request body for creating a short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateShortUrlBody {
    long_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_long_urls: Option<DeviceLongUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_visits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    crawlable: bool,
    forward_query: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    find_if_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_code_length: Option<u32>,
}

/// Request body for editing a short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditShortUrlBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    long_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_long_urls: Option<DeviceLongUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_visits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crawlable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forward_query: Option<bool>,
}

/// Response from listing short URLs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    short_urls: Page<ShortUrl>,
}

/// Build the create payload from a spec.
///
/// Applies the per-field inclusion policy: optional scalars only when
/// supplied non-empty, booleans always with their effective value,
/// `max_visits` only when positive and `short_code_length` only above the
/// service minimum.
fn create_body(spec: &ShortUrlSpec) -> Result<CreateShortUrlBody> {
    if spec.long_url.is_empty() {
        return Err(ClientError::Validation(
            "longUrl must not be empty".to_string(),
        ));
    }

    Ok(CreateShortUrlBody {
        long_url: spec.long_url.clone(),
        device_long_urls: filter_device_urls(&spec.device_long_urls),
        valid_since: filter_str(&spec.valid_since),
        valid_until: filter_str(&spec.valid_until),
        max_visits: spec.max_visits.filter(|&visits| visits > 0),
        tags: filter_tags(&spec.tags),
        title: filter_str(&spec.title),
        crawlable: spec.crawlable,
        forward_query: spec.forward_query,
        custom_slug: filter_str(&spec.custom_slug),
        domain: filter_str(&spec.domain),
        find_if_exists: spec.find_if_exists,
        short_code_length: spec
            .short_code_length
            .filter(|&length| length > MIN_SHORT_CODE_LENGTH),
    })
}

/// Build the edit payload. Unset fields are omitted entirely.
fn edit_body(edit: &EditShortUrl) -> EditShortUrlBody {
    EditShortUrlBody {
        long_url: filter_str(&edit.long_url),
        device_long_urls: filter_device_urls(&edit.device_long_urls),
        valid_since: filter_str(&edit.valid_since),
        valid_until: filter_str(&edit.valid_until),
        max_visits: edit.max_visits.filter(|&visits| visits > 0),
        tags: filter_tags(&edit.tags),
        title: filter_str(&edit.title),
        crawlable: edit.crawlable,
        forward_query: edit.forward_query,
    }
}

/// Build the query for the list endpoint.
///
/// Booleans and paging fields are always transmitted; optional scalars only
/// when supplied. Tags become repeated `tags[]` keys in the order given.
fn list_query(query: &ListShortUrlsQuery) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("page".to_string(), query.page.to_string()),
        ("itemsPerPage".to_string(), query.items_per_page.to_string()),
    ];

    if let Some(term) = filter_str(&query.search_term) {
        pairs.push(("searchTerm".to_string(), term));
    }
    for tag in &query.tags {
        pairs.push(("tags[]".to_string(), tag.clone()));
    }
    pairs.push(("tagsMode".to_string(), query.tags_mode.to_string()));
    pairs.push(("orderBy".to_string(), query.order_by.clone()));
    if let Some(date) = filter_str(&query.start_date) {
        pairs.push(("startDate".to_string(), date));
    }
    if let Some(date) = filter_str(&query.end_date) {
        pairs.push(("endDate".to_string(), date));
    }
    pairs.push((
        "excludeMaxVisitsReached".to_string(),
        query.exclude_max_visits_reached.to_string(),
    ));
    pairs.push((
        "excludePastValidUntil".to_string(),
        query.exclude_past_valid_until.to_string(),
    ));

    pairs
}

fn filter_str(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn filter_tags(tags: &[String]) -> Option<Vec<String>> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.to_vec())
    }
}

fn filter_device_urls(urls: &DeviceLongUrls) -> Option<DeviceLongUrls> {
    if urls.is_empty() {
        None
    } else {
        Some(urls.clone())
    }
}

impl Client {
    /// Create a new short URL.
    ///
    /// # Arguments
    ///
    /// * `spec` - Short URL to create; only `long_url` is required
    ///
    /// # Returns
    ///
    /// Returns the created short URL as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if `long_url` is empty, before any
    /// request is sent. Returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use shlink_client::{Client, ShortUrlSpec};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://s.example.com", "key")?;
    /// let spec = ShortUrlSpec {
    ///     long_url: "https://example.com/landing".to_string(),
    ///     custom_slug: Some("landing".to_string()),
    ///     ..Default::default()
    /// };
    /// let short_url = client.create_short_url(&spec).await?;
    /// println!("Created: {}", short_url.short_url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_short_url(&self, spec: &ShortUrlSpec) -> Result<ShortUrl> {
        let body = create_body(spec)?;
        let response = self.post("short-urls", &body).await?;
        self.handle_response(response).await
    }

    /// Delete a short URL by its short code.
    ///
    /// # Errors
    ///
    /// Returns an error if the short URL is not found or the request fails.
    pub async fn delete_short_url(&self, short_code: &str) -> Result<()> {
        if short_code.is_empty() {
            return Err(ClientError::Validation(
                "shortCode must not be empty".to_string(),
            ));
        }

        let path = format!("short-urls/{}", short_code);
        let response = self.delete(&path).await?;
        self.handle_empty_response(response).await
    }

    /// Look up a short URL by its short code.
    ///
    /// # Arguments
    ///
    /// * `short_code` - Short code to look up
    /// * `domain` - Domain the short URL lives on, if not the default
    ///
    /// # Errors
    ///
    /// Returns an error if the short URL is not found or the request fails.
    pub async fn get_url_info(&self, short_code: &str, domain: Option<&str>) -> Result<ShortUrl> {
        if short_code.is_empty() {
            return Err(ClientError::Validation(
                "shortCode must not be empty".to_string(),
            ));
        }

        let mut query = vec![("shortCode".to_string(), short_code.to_string())];
        if let Some(domain) = domain.filter(|domain| !domain.is_empty()) {
            query.push(("domain".to_string(), domain.to_string()));
        }

        let response = self.get("short-urls", &query).await?;
        self.handle_response(response).await
    }

    /// List short URLs.
    ///
    /// # Returns
    ///
    /// Returns one page of short URLs matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use shlink_client::{Client, ListShortUrlsQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://s.example.com", "key")?;
    /// let query = ListShortUrlsQuery {
    ///     search_term: Some("docs".to_string()),
    ///     ..Default::default()
    /// };
    /// let page = client.list_short_urls(&query).await?;
    /// for short_url in page.data {
    ///     println!("{}: {}", short_url.short_code, short_url.long_url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_short_urls(&self, query: &ListShortUrlsQuery) -> Result<Page<ShortUrl>> {
        let response = self.get("short-urls", &list_query(query)).await?;
        let list_response: ListResponse = self.handle_response(response).await?;

        Ok(list_response.short_urls)
    }

    /// Edit an existing short URL.
    ///
    /// Fields left unset in `edit` keep their current value on the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the short URL is not found or the request fails.
    pub async fn edit_short_url(&self, short_code: &str, edit: &EditShortUrl) -> Result<ShortUrl> {
        if short_code.is_empty() {
            return Err(ClientError::Validation(
                "shortCode must not be empty".to_string(),
            ));
        }

        let path = format!("short-urls/{}", short_code);
        let response = self.patch(&path, &edit_body(edit)).await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_create_body() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            ..Default::default()
        };

        let body = create_body(&spec).unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "longUrl": "https://example.com",
                "crawlable": true,
                "forwardQuery": true,
                "findIfExists": true,
            })
        );
    }

    #[test]
    fn test_empty_long_url_rejected() {
        let spec = ShortUrlSpec::default();
        assert!(matches!(
            create_body(&spec),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_max_visits_zero_is_unset() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            max_visits: Some(0),
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert!(value.get("maxVisits").is_none());
    }

    #[test]
    fn test_max_visits_positive_is_transmitted() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            max_visits: Some(5),
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert_eq!(value["maxVisits"], json!(5));
    }

    #[test]
    fn test_short_code_length_at_threshold_is_unset() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            short_code_length: Some(3),
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert!(value.get("shortCodeLength").is_none());
    }

    #[test]
    fn test_short_code_length_above_threshold_is_transmitted() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            short_code_length: Some(4),
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert_eq!(value["shortCodeLength"], json!(4));
    }

    #[test]
    fn test_device_urls_copied_per_platform() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            device_long_urls: DeviceLongUrls {
                android: Some("https://example.com/android".to_string()),
                ios: None,
                desktop: None,
            },
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert_eq!(
            value["deviceLongUrls"],
            json!({ "android": "https://example.com/android" })
        );
    }

    #[test]
    fn test_empty_device_urls_omitted() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert!(value.get("deviceLongUrls").is_none());
    }

    #[test]
    fn test_optional_scalars_carried_verbatim() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            title: Some("Landing".to_string()),
            custom_slug: Some("landing".to_string()),
            domain: Some("s.example.com".to_string()),
            valid_since: Some("2026-01-01T00:00:00+00:00".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert_eq!(value["title"], json!("Landing"));
        assert_eq!(value["customSlug"], json!("landing"));
        assert_eq!(value["domain"], json!("s.example.com"));
        assert_eq!(value["validSince"], json!("2026-01-01T00:00:00+00:00"));
        assert!(value.get("validUntil").is_none());
    }

    #[test]
    fn test_tags_preserve_order() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            tags: vec!["zeta".to_string(), "alpha".to_string()],
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert_eq!(value["tags"], json!(["zeta", "alpha"]));
    }

    #[test]
    fn test_boolean_overrides_transmitted() {
        let spec = ShortUrlSpec {
            long_url: "https://example.com".to_string(),
            crawlable: false,
            find_if_exists: false,
            ..Default::default()
        };

        let value = serde_json::to_value(create_body(&spec).unwrap()).unwrap();
        assert_eq!(value["crawlable"], json!(false));
        assert_eq!(value["forwardQuery"], json!(true));
        assert_eq!(value["findIfExists"], json!(false));
    }

    #[test]
    fn test_list_query_defaults() {
        let pairs = list_query(&ListShortUrlsQuery::default());
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("itemsPerPage".to_string(), "10".to_string()),
                ("tagsMode".to_string(), "any".to_string()),
                ("orderBy".to_string(), "dateCreated-DESC".to_string()),
                ("excludeMaxVisitsReached".to_string(), "false".to_string()),
                ("excludePastValidUntil".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_tags_repeated_in_order() {
        let query = ListShortUrlsQuery {
            tags: vec!["b".to_string(), "a".to_string()],
            ..Default::default()
        };

        let pairs = list_query(&query);
        let tags: Vec<&str> = pairs
            .iter()
            .filter(|(key, _)| key == "tags[]")
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(tags, vec!["b", "a"]);
    }

    #[test]
    fn test_list_query_optional_scalars() {
        let query = ListShortUrlsQuery {
            search_term: Some("docs".to_string()),
            start_date: Some("2026-01-01".to_string()),
            end_date: None,
            ..Default::default()
        };

        let pairs = list_query(&query);
        assert!(pairs.contains(&("searchTerm".to_string(), "docs".to_string())));
        assert!(pairs.contains(&("startDate".to_string(), "2026-01-01".to_string())));
        assert!(!pairs.iter().any(|(key, _)| key == "endDate"));
    }

    #[test]
    fn test_edit_body_omits_unset_fields() {
        let edit = EditShortUrl {
            title: Some("Renamed".to_string()),
            crawlable: Some(false),
            ..Default::default()
        };

        let value = serde_json::to_value(edit_body(&edit)).unwrap();
        assert_eq!(
            value,
            json!({ "title": "Renamed", "crawlable": false })
        );
    }

    #[test]
    fn test_edit_body_max_visits_sentinel() {
        let edit = EditShortUrl {
            max_visits: Some(0),
            ..Default::default()
        };

        let value = serde_json::to_value(edit_body(&edit)).unwrap();
        assert_eq!(value, json!({}));
    }
}

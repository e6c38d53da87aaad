//! Core Shlink client implementation.

use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, USER_AGENT};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shlink REST API version this client targets.
const API_VERSION: u8 = 3;

/// Identity string sent in the `User-Agent` header.
const USER_AGENT_STRING: &str = concat!("shlink-client/v", env!("CARGO_PKG_VERSION"));

/// A client for interacting with the Shlink REST API.
///
/// # Example
///
/// ```no_run
/// use shlink_client::Client;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("https://s.example.com", "my-api-key")?
///     .with_timeout(Duration::from_secs(10))?;
///
/// let tags = client.list_tags(&Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL of the Shlink server.
    base_url: String,
    /// HTTP client carrying the fixed header set.
    http: HttpClient,
    /// API key, kept to rebuild the header set on reconfiguration.
    api_key: String,
}

impl Client {
    /// Create a new Shlink client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Shlink server (e.g., "https://s.example.com")
    /// * `api_key` - API key issued by the server, sent in the `X-Api-Key` header
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the API key cannot be carried
    /// in a header, or the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        // Validate URL format
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(default_headers(&base_url, &api_key)?)
            .build()?;

        Ok(Self {
            base_url,
            http,
            api_key,
        })
    }

    /// Set a custom timeout for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = HttpClient::builder()
            .timeout(timeout)
            .default_headers(default_headers(&self.base_url, &self.api_key)?)
            .build()?;
        Ok(self)
    }

    /// Build a full URL from a path.
    ///
    /// A path that already carries a scheme is used verbatim; anything else
    /// is resolved against the versioned API root.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.strip_prefix('/').unwrap_or(path);
        format!(
            "{}/rest/v{}/{}",
            self.base_url.trim_end_matches('/'),
            API_VERSION,
            path
        )
    }

    /// Execute a GET request with query parameters.
    pub(crate) async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Response> {
        let url = self.url(path);
        let request = self.http.get(&url).query(query);

        request.send().await.map_err(ClientError::Http)
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        let request = self.http.post(&url).json(body);

        request.send().await.map_err(ClientError::Http)
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        let request = self.http.put(&url).json(body);

        request.send().await.map_err(ClientError::Http)
    }

    /// Execute a PATCH request with a JSON body.
    pub(crate) async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        let request = self.http.patch(&url).json(body);

        request.send().await.map_err(ClientError::Http)
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        let request = self.http.delete(&url);

        request.send().await.map_err(ClientError::Http)
    }

    /// Execute a DELETE request with a JSON body.
    pub(crate) async fn delete_with_body<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let url = self.url(path);
        let request = self.http.delete(&url).json(body);

        request.send().await.map_err(ClientError::Http)
    }

    /// Check a response against the expected success status.
    ///
    /// A response fails when its status differs from `expected` or when the
    /// server used the `application/problem+json` content type, whichever
    /// comes first.
    async fn check_response(&self, response: Response, expected: StatusCode) -> Result<Response> {
        let status = response.status();

        if status == expected && !is_problem(&response) {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }

    /// Handle a response expected to carry a JSON body (200 OK).
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let response = self.check_response(response, StatusCode::OK).await?;
        let body = response.text().await.map_err(ClientError::Http)?;

        serde_json::from_str(&body).map_err(ClientError::Deserialize)
    }

    /// Handle a response that returns no body (204 No Content).
    pub(crate) async fn handle_empty_response(&self, response: Response) -> Result<()> {
        self.check_response(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

/// Build the fixed header set installed on every request.
fn default_headers(base_url: &str, api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let key = HeaderValue::from_str(api_key).map_err(|_| {
        ClientError::Validation("API key contains characters not allowed in a header".to_string())
    })?;
    headers.insert("X-Api-Key", key);
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let origin = HeaderValue::from_str(base_url).map_err(|_| {
        ClientError::InvalidUrl(format!("URL cannot be carried as Origin: {}", base_url))
    })?;
    headers.insert(ORIGIN, origin);

    Ok(headers)
}

/// Whether the server answered with a structured problem document.
fn is_problem(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/problem+json")
        })
        .unwrap_or(false)
}

/// Extract a human-readable message from an error body.
///
/// The server answers with either a plain error object or an RFC 7807
/// problem document nesting the message under "detail". Try the nested
/// field first, fall back to the full body.
fn extract_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json["detail"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = Client::new("https://s.example.com", "secret").unwrap();
        assert_eq!(client.base_url, "https://s.example.com");
        assert_eq!(client.api_key, "secret");
    }

    #[test]
    fn test_client_invalid_url() {
        let result = Client::new("not-a-url", "secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_client_invalid_api_key() {
        let result = Client::new("https://s.example.com", "bad\nkey");
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_url_building() {
        let client = Client::new("https://s.example.com", "secret").unwrap();
        assert_eq!(
            client.url("short-urls"),
            "https://s.example.com/rest/v3/short-urls"
        );
        assert_eq!(
            client.url("/short-urls"),
            "https://s.example.com/rest/v3/short-urls"
        );
    }

    #[test]
    fn test_url_building_with_trailing_slash() {
        let client = Client::new("https://s.example.com/", "secret").unwrap();
        assert_eq!(client.url("tags"), "https://s.example.com/rest/v3/tags");
    }

    #[test]
    fn test_url_with_scheme_used_verbatim() {
        let client = Client::new("https://s.example.com", "secret").unwrap();
        assert_eq!(
            client.url("https://other.example.com/rest/v3/tags"),
            "https://other.example.com/rest/v3/tags"
        );
    }

    #[test]
    fn test_extract_message_prefers_detail() {
        let body = r#"{"type": "INVALID_ARGUMENT", "title": "bad", "detail": "longUrl is invalid"}"#;
        assert_eq!(extract_message(body), "longUrl is invalid");
    }

    #[test]
    fn test_extract_message_falls_back_to_body() {
        let body = r#"{"error": "boom"}"#;
        assert_eq!(extract_message(body), body);
    }

    #[test]
    fn test_extract_message_non_json_body() {
        assert_eq!(extract_message("gateway timeout"), "gateway timeout");
    }
}

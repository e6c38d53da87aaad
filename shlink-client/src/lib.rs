//! Type-safe Rust client for the Shlink REST API.
//!
//! This crate provides a high-level, ergonomic interface to a Shlink
//! URL-shortener server: it builds well-formed requests for short-URL and
//! tag operations from typed, optional-heavy inputs and normalizes the
//! server's error responses into a single failure contract.
//!
//! # Features
//!
//! - Type-safe API client with per-field request inclusion
//! - API key authentication (`X-Api-Key` header)
//! - Short URL management (create, look up, list, edit, delete)
//! - Tag operations (list, rename, delete)
//! - Comprehensive error handling
//!
//! # Example
//!
//! ```no_run
//! use shlink_client::{Client, ShortUrlSpec};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = Client::new("https://s.example.com", "my-api-key")?;
//!
//! // Shorten a URL
//! let spec = ShortUrlSpec {
//!     long_url: "https://example.com/very/long/path".to_string(),
//!     tags: vec!["campaign".to_string()],
//!     ..Default::default()
//! };
//! let short_url = client.create_short_url(&spec).await?;
//! println!("Created: {}", short_url.short_url);
//!
//! // Look it up again
//! let info = client.get_url_info(&short_url.short_code, None).await?;
//! println!("Visits: {}", info.visits_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! Every request carries the API key issued by the server:
//!
//! ```no_run
//! # use shlink_client::Client;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://s.example.com", std::env::var("SHLINK_API_KEY")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! ```no_run
//! # use shlink_client::{Client, ClientError};
//! # async fn example() -> Result<(), ClientError> {
//! # let client = Client::new("https://s.example.com", "key")?;
//! match client.get_url_info("abc123", None).await {
//!     Ok(short_url) => println!("Found: {}", short_url.long_url),
//!     Err(ClientError::Api { status: 404, .. }) => println!("Short URL not found"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod short_urls;
mod tags;
mod types;

// Re-export the main types
pub use client::Client;
pub use error::{ClientError, Result};
pub use types::{
    DeviceLongUrls, EditShortUrl, ListShortUrlsQuery, ListTagsQuery, Page, Pagination, ShortUrl,
    ShortUrlMeta, ShortUrlSpec, TagsMode,
};

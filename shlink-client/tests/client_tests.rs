//! Integration tests for shlink-client.
//!
//! These tests verify the client API surface without requiring a running server.

use shlink_client::{Client, ClientError, TagsMode};

#[test]
fn test_client_construction() {
    // Valid URL
    let client = Client::new("http://localhost:8080", "secret");
    assert!(client.is_ok());

    // HTTPS URL
    let client = Client::new("https://s.example.com", "secret");
    assert!(client.is_ok());
}

#[test]
fn test_client_invalid_url() {
    // Missing protocol
    let result = Client::new("localhost:8080", "secret");
    assert!(result.is_err());

    match result {
        Err(ClientError::InvalidUrl(msg)) => {
            assert!(msg.contains("http://"));
        }
        _ => panic!("Expected InvalidUrl error"),
    }
}

#[test]
fn test_client_invalid_api_key() {
    // Header values cannot carry control characters
    let result = Client::new("http://localhost:8080", "line\nbreak");
    assert!(matches!(result, Err(ClientError::Validation(_))));
}

#[test]
fn test_client_builder_pattern() {
    use std::time::Duration;

    let client = Client::new("http://localhost:8080", "secret")
        .unwrap()
        .with_timeout(Duration::from_secs(60));

    assert!(client.is_ok());
}

#[test]
fn test_url_normalization() {
    // Trailing slash should be handled
    let client1 = Client::new("http://localhost:8080", "secret");
    let client2 = Client::new("http://localhost:8080/", "secret");

    assert!(client1.is_ok());
    assert!(client2.is_ok());
}

#[test]
fn test_tags_mode_parsing() {
    assert_eq!("any".parse::<TagsMode>().unwrap(), TagsMode::Any);
    assert_eq!("all".parse::<TagsMode>().unwrap(), TagsMode::All);
}

#[test]
fn test_tags_mode_rejects_unknown_values() {
    assert!("some".parse::<TagsMode>().is_err());
    assert!("ANY".parse::<TagsMode>().is_err());
    assert!("".parse::<TagsMode>().is_err());
}

#[test]
fn test_tags_mode_display() {
    assert_eq!(TagsMode::Any.to_string(), "any");
    assert_eq!(TagsMode::All.to_string(), "all");
}

#[test]
fn test_error_display() {
    let error = ClientError::InvalidUrl("test error".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid URL"));
    assert!(display.contains("test error"));
}

#[test]
fn test_api_error_display() {
    let error = ClientError::Api {
        status: 404,
        message: "Not found".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("404"));
    assert!(display.contains("Not found"));
}

#[test]
fn test_validation_error_display() {
    let error = ClientError::Validation("longUrl must not be empty".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Validation failed"));
    assert!(display.contains("longUrl"));
}

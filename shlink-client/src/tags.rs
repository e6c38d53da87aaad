//! Tag management operations.

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::types::{ListTagsQuery, Page};
use serde::{Deserialize, Serialize};

/// Request body for renaming a tag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenameTagBody {
    old_name: String,
    new_name: String,
}

/// Request body for deleting tags.
#[derive(Debug, Serialize)]
struct DeleteTagsBody {
    tags: Vec<String>,
}

/// Response from listing tags.
#[derive(Debug, Deserialize)]
struct ListTagsResponse {
    tags: Page<String>,
}

/// Build the query for the tag list endpoint.
fn list_query(query: &ListTagsQuery) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("page".to_string(), query.page.to_string()),
        ("itemsPerPage".to_string(), query.items_per_page.to_string()),
    ];

    if let Some(term) = query.search_term.as_deref().filter(|term| !term.is_empty()) {
        pairs.push(("searchTerm".to_string(), term.to_string()));
    }
    pairs.push(("orderBy".to_string(), query.order_by.clone()));

    pairs
}

impl Client {
    /// List the tags used by any short URL.
    ///
    /// # Returns
    ///
    /// Returns one page of tag names matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use shlink_client::{Client, ListTagsQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://s.example.com", "key")?;
    /// let page = client.list_tags(&ListTagsQuery::default()).await?;
    /// for tag in page.data {
    ///     println!("{}", tag);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_tags(&self, query: &ListTagsQuery) -> Result<Page<String>> {
        let response = self.get("tags", &list_query(query)).await?;
        let list_response: ListTagsResponse = self.handle_response(response).await?;

        Ok(list_response.tags)
    }

    /// Rename a tag across all short URLs carrying it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if either name is empty, before
    /// any request is sent. Returns an error if the tag is not found or the
    /// request fails.
    pub async fn rename_tag(&self, old_name: &str, new_name: &str) -> Result<()> {
        if old_name.is_empty() {
            return Err(ClientError::Validation(
                "oldName must not be empty".to_string(),
            ));
        }
        if new_name.is_empty() {
            return Err(ClientError::Validation(
                "newName must not be empty".to_string(),
            ));
        }

        let body = RenameTagBody {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
        };
        let response = self.put("tags", &body).await?;
        self.handle_empty_response(response).await
    }

    /// Delete tags from every short URL carrying them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if the tag set is empty, before
    /// any request is sent. Returns an error if the request fails.
    pub async fn delete_tags(&self, tags: &[String]) -> Result<()> {
        if tags.is_empty() {
            return Err(ClientError::Validation(
                "at least one tag is required".to_string(),
            ));
        }

        let body = DeleteTagsBody {
            tags: tags.to_vec(),
        };
        let response = self.delete_with_body("tags", &body).await?;
        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_query_defaults() {
        let pairs = list_query(&ListTagsQuery::default());
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("itemsPerPage".to_string(), "10".to_string()),
                ("orderBy".to_string(), "tag-ASC".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_search_term() {
        let query = ListTagsQuery {
            search_term: Some("doc".to_string()),
            ..Default::default()
        };

        let pairs = list_query(&query);
        assert!(pairs.contains(&("searchTerm".to_string(), "doc".to_string())));
    }

    #[test]
    fn test_list_query_empty_search_term_omitted() {
        let query = ListTagsQuery {
            search_term: Some(String::new()),
            ..Default::default()
        };

        let pairs = list_query(&query);
        assert!(!pairs.iter().any(|(key, _)| key == "searchTerm"));
    }

    #[test]
    fn test_rename_body_wire_format() {
        let body = RenameTagBody {
            old_name: "old".to_string(),
            new_name: "new".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "oldName": "old", "newName": "new" })
        );
    }
}

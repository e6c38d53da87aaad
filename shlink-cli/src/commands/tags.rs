//! Tag CLI commands.

use anyhow::Result;
use shlink_client::{Client, ListTagsQuery};

/// Run the list command.
pub async fn list(client: &Client, query: ListTagsQuery) -> Result<()> {
    tracing::info!(page = query.page, "Listing tags");

    let page = client.list_tags(&query).await?;

    if page.data.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    println!("TAGS");
    println!("----");
    for tag in &page.data {
        println!("{}", tag);
    }

    println!();
    println!(
        "Page {} of {} ({} tags total)",
        page.pagination.current_page, page.pagination.pages_count, page.pagination.total_items
    );

    Ok(())
}

/// Run the rename command.
pub async fn rename(client: &Client, old_name: &str, new_name: &str) -> Result<()> {
    tracing::info!(old_name = %old_name, new_name = %new_name, "Renaming tag");

    client.rename_tag(old_name, new_name).await?;

    println!("✓ Tag renamed: {} → {}", old_name, new_name);

    Ok(())
}

/// Run the delete command.
pub async fn delete(client: &Client, tags: &[String]) -> Result<()> {
    tracing::info!(count = tags.len(), "Deleting tags");

    client.delete_tags(tags).await?;

    println!("✓ Tags deleted: {}", tags.join(", "));

    Ok(())
}

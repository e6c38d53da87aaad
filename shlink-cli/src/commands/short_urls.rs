//! Short URL CLI commands.

use anyhow::Result;
use shlink_client::{Client, EditShortUrl, ListShortUrlsQuery, ShortUrl, ShortUrlSpec};

/// Run the create command.
pub async fn create(client: &Client, spec: ShortUrlSpec) -> Result<()> {
    tracing::info!(long_url = %spec.long_url, "Creating short URL");

    let short_url = client.create_short_url(&spec).await?;

    println!("✓ Short URL created");
    print_short_url(&short_url);

    Ok(())
}

/// Run the delete command.
pub async fn delete(client: &Client, short_code: &str) -> Result<()> {
    tracing::info!(short_code = %short_code, "Deleting short URL");

    client.delete_short_url(short_code).await?;

    println!("✓ Short URL deleted: {}", short_code);

    Ok(())
}

/// Run the info command.
pub async fn info(client: &Client, short_code: &str, domain: Option<&str>) -> Result<()> {
    let short_url = client.get_url_info(short_code, domain).await?;

    print_short_url(&short_url);

    Ok(())
}

/// Run the edit command.
pub async fn edit(client: &Client, short_code: &str, edit: EditShortUrl) -> Result<()> {
    tracing::info!(short_code = %short_code, "Editing short URL");

    let short_url = client.edit_short_url(short_code, &edit).await?;

    println!("✓ Short URL updated");
    print_short_url(&short_url);

    Ok(())
}

/// Run the list command.
pub async fn list(client: &Client, query: ListShortUrlsQuery) -> Result<()> {
    tracing::info!(page = query.page, "Listing short URLs");

    let page = client.list_short_urls(&query).await?;

    if page.data.is_empty() {
        println!("No short URLs found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<44} {:>8}  {}",
        "SHORT CODE", "LONG URL", "VISITS", "TAGS"
    );
    println!(
        "{:<12} {:<44} {:>8}  {}",
        "----------", "--------", "------", "----"
    );
    for short_url in &page.data {
        println!(
            "{:<12} {:<44} {:>8}  {}",
            short_url.short_code,
            truncate(&short_url.long_url, 44),
            short_url.visits_count,
            short_url.tags.join(",")
        );
    }

    println!();
    println!(
        "Page {} of {} ({} short URLs total)",
        page.pagination.current_page, page.pagination.pages_count, page.pagination.total_items
    );

    Ok(())
}

/// Print the details of a single short URL.
fn print_short_url(short_url: &ShortUrl) {
    println!("  Short URL: {}", short_url.short_url);
    println!("  Short code: {}", short_url.short_code);
    println!("  Long URL: {}", short_url.long_url);
    println!("  Created: {}", short_url.date_created);
    println!("  Visits: {}", short_url.visits_count);

    if let Some(ref title) = short_url.title {
        println!("  Title: {}", title);
    }
    if let Some(ref domain) = short_url.domain {
        println!("  Domain: {}", domain);
    }
    if !short_url.tags.is_empty() {
        println!("  Tags: {}", short_url.tags.join(", "));
    }
    if let Some(ref since) = short_url.meta.valid_since {
        println!("  Valid since: {}", since);
    }
    if let Some(ref until) = short_url.meta.valid_until {
        println!("  Valid until: {}", until);
    }
    if let Some(max_visits) = short_url.meta.max_visits {
        println!("  Max visits: {}", max_visits);
    }
    if let Some(ref android) = short_url.device_long_urls.android {
        println!("  Android URL: {}", android);
    }
    if let Some(ref ios) = short_url.device_long_urls.ios {
        println!("  iOS URL: {}", ios);
    }
    if let Some(ref desktop) = short_url.device_long_urls.desktop {
        println!("  Desktop URL: {}", desktop);
    }
}

/// Shorten a string for column display.
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let head: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

//! Shlink CLI - command-line management client for Shlink servers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shlink_client::{
    Client, DeviceLongUrls, EditShortUrl, ListShortUrlsQuery, ListTagsQuery, ShortUrlSpec,
    TagsMode,
};

/// Manage a Shlink URL-shortener server from the command line.
#[derive(Parser)]
#[command(name = "shlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shlink server URL (e.g., "https://s.example.com")
    #[arg(long, env = "SHLINK_SERVER_URL")]
    server_url: String,

    /// API key issued by the server
    #[arg(long, env = "SHLINK_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage short URLs
    ShortUrls {
        #[command(subcommand)]
        action: ShortUrlsAction,
    },

    /// Manage tags
    Tags {
        #[command(subcommand)]
        action: TagsAction,
    },
}

#[derive(Subcommand)]
enum ShortUrlsAction {
    /// Create a short URL
    Create {
        /// Long URL to shorten
        long_url: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Title for the short URL
        #[arg(long)]
        title: Option<String>,

        /// Custom slug instead of a generated short code
        #[arg(long)]
        custom_slug: Option<String>,

        /// Domain to create the short URL on
        #[arg(long)]
        domain: Option<String>,

        /// ISO 8601 date the short URL becomes valid
        #[arg(long)]
        valid_since: Option<String>,

        /// ISO 8601 date the short URL stops being valid
        #[arg(long)]
        valid_until: Option<String>,

        /// Maximum number of visits before the short URL expires
        #[arg(long)]
        max_visits: Option<u32>,

        /// Length of the generated short code (minimum 4)
        #[arg(long)]
        short_code_length: Option<u32>,

        /// Override long URL for Android devices
        #[arg(long)]
        android_url: Option<String>,

        /// Override long URL for iOS devices
        #[arg(long)]
        ios_url: Option<String>,

        /// Override long URL for desktop devices
        #[arg(long)]
        desktop_url: Option<String>,

        /// Do not let search engines crawl the short URL
        #[arg(long)]
        no_crawlable: bool,

        /// Do not forward query parameters to the long URL
        #[arg(long)]
        no_forward_query: bool,

        /// Always create a new short URL instead of reusing an existing one
        #[arg(long)]
        no_find_if_exists: bool,
    },

    /// Delete a short URL
    Delete {
        /// Short code of the short URL
        short_code: String,
    },

    /// Show details of a short URL
    Info {
        /// Short code of the short URL
        short_code: String,

        /// Domain the short URL lives on, if not the default
        #[arg(long)]
        domain: Option<String>,
    },

    /// Edit a short URL; unset fields keep their current value
    Edit {
        /// Short code of the short URL
        short_code: String,

        /// New long URL
        #[arg(long)]
        long_url: Option<String>,

        /// Replacement tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// ISO 8601 date the short URL becomes valid
        #[arg(long)]
        valid_since: Option<String>,

        /// ISO 8601 date the short URL stops being valid
        #[arg(long)]
        valid_until: Option<String>,

        /// Maximum number of visits before the short URL expires
        #[arg(long)]
        max_visits: Option<u32>,

        /// Override long URL for Android devices
        #[arg(long)]
        android_url: Option<String>,

        /// Override long URL for iOS devices
        #[arg(long)]
        ios_url: Option<String>,

        /// Override long URL for desktop devices
        #[arg(long)]
        desktop_url: Option<String>,

        /// Whether search engines may crawl the short URL
        #[arg(long, value_name = "BOOL")]
        crawlable: Option<bool>,

        /// Whether query parameters are forwarded to the long URL
        #[arg(long, value_name = "BOOL")]
        forward_query: Option<bool>,
    },

    /// List short URLs
    List {
        /// Page to fetch
        #[arg(long, default_value = "1")]
        page: u32,

        /// Number of items per page
        #[arg(long, default_value = "10")]
        items_per_page: u32,

        /// Free-text search over long URLs, slugs and titles
        #[arg(long)]
        search_term: Option<String>,

        /// Only list short URLs carrying this tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// How the tag filter combines multiple tags (any, all)
        #[arg(long, default_value = "any")]
        tags_mode: TagsMode,

        /// Sort order
        #[arg(long, default_value = "dateCreated-DESC")]
        order_by: String,

        /// Only list short URLs created after this ISO 8601 date
        #[arg(long)]
        start_date: Option<String>,

        /// Only list short URLs created before this ISO 8601 date
        #[arg(long)]
        end_date: Option<String>,

        /// Skip short URLs that reached their visit limit
        #[arg(long)]
        exclude_max_visits_reached: bool,

        /// Skip short URLs past their valid-until date
        #[arg(long)]
        exclude_past_valid_until: bool,
    },
}

#[derive(Subcommand)]
enum TagsAction {
    /// List tags
    List {
        /// Page to fetch
        #[arg(long, default_value = "1")]
        page: u32,

        /// Number of items per page
        #[arg(long, default_value = "10")]
        items_per_page: u32,

        /// Free-text search over tag names
        #[arg(long)]
        search_term: Option<String>,

        /// Sort order
        #[arg(long, default_value = "tag-ASC")]
        order_by: String,
    },

    /// Rename a tag across all short URLs carrying it
    Rename {
        /// Current tag name
        old_name: String,

        /// New tag name
        new_name: String,
    },

    /// Delete tags from every short URL carrying them
    Delete {
        /// Tags to delete
        #[arg(required = true)]
        tags: Vec<String>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Respect RUST_LOG if set
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| filter.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let client = Client::new(&cli.server_url, &cli.api_key)?;

    match cli.command {
        Commands::ShortUrls { action } => match action {
            ShortUrlsAction::Create {
                long_url,
                tags,
                title,
                custom_slug,
                domain,
                valid_since,
                valid_until,
                max_visits,
                short_code_length,
                android_url,
                ios_url,
                desktop_url,
                no_crawlable,
                no_forward_query,
                no_find_if_exists,
            } => {
                let spec = ShortUrlSpec {
                    long_url,
                    device_long_urls: DeviceLongUrls {
                        android: android_url,
                        ios: ios_url,
                        desktop: desktop_url,
                    },
                    valid_since,
                    valid_until,
                    max_visits,
                    tags,
                    title,
                    crawlable: !no_crawlable,
                    forward_query: !no_forward_query,
                    custom_slug,
                    domain,
                    find_if_exists: !no_find_if_exists,
                    short_code_length,
                };
                commands::short_urls::create(&client, spec).await
            }
            ShortUrlsAction::Delete { short_code } => {
                commands::short_urls::delete(&client, &short_code).await
            }
            ShortUrlsAction::Info { short_code, domain } => {
                commands::short_urls::info(&client, &short_code, domain.as_deref()).await
            }
            ShortUrlsAction::Edit {
                short_code,
                long_url,
                tags,
                title,
                valid_since,
                valid_until,
                max_visits,
                android_url,
                ios_url,
                desktop_url,
                crawlable,
                forward_query,
            } => {
                let edit = EditShortUrl {
                    long_url,
                    device_long_urls: DeviceLongUrls {
                        android: android_url,
                        ios: ios_url,
                        desktop: desktop_url,
                    },
                    valid_since,
                    valid_until,
                    max_visits,
                    tags,
                    title,
                    crawlable,
                    forward_query,
                };
                commands::short_urls::edit(&client, &short_code, edit).await
            }
            ShortUrlsAction::List {
                page,
                items_per_page,
                search_term,
                tags,
                tags_mode,
                order_by,
                start_date,
                end_date,
                exclude_max_visits_reached,
                exclude_past_valid_until,
            } => {
                let query = ListShortUrlsQuery {
                    page,
                    items_per_page,
                    search_term,
                    tags,
                    tags_mode,
                    order_by,
                    start_date,
                    end_date,
                    exclude_max_visits_reached,
                    exclude_past_valid_until,
                };
                commands::short_urls::list(&client, query).await
            }
        },
        Commands::Tags { action } => match action {
            TagsAction::List {
                page,
                items_per_page,
                search_term,
                order_by,
            } => {
                let query = ListTagsQuery {
                    page,
                    items_per_page,
                    search_term,
                    order_by,
                };
                commands::tags::list(&client, query).await
            }
            TagsAction::Rename { old_name, new_name } => {
                commands::tags::rename(&client, &old_name, &new_name).await
            }
            TagsAction::Delete { tags } => commands::tags::delete(&client, &tags).await,
        },
    }
}

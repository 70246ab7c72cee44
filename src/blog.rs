//! Blog article fetching.
//!
//! Pulls recent posts from dev.to or a Medium feed (through the rss2json
//! bridge) for the Articles section. Strictly best-effort: the caller
//! treats any failure here as an empty list, never as a page error.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{BlogSettings, BlogSource};

/// dev.to articles API base URL.
pub const DEV_API_BASE: &str = "https://dev.to/api";

/// rss2json bridge base URL used for Medium feeds.
pub const RSS2JSON_BASE: &str = "https://api.rss2json.com/v1";

/// Per-request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One blog article shown in the Articles section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_at: String,
    pub description: String,
}

/// Errors from the blog fetch path.
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    /// Transport failure or non-2xx response.
    #[error("Network error: {0}")]
    Network(String),
    /// Response body did not decode as the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// One article as returned by the dev.to API.
#[derive(Debug, Clone, Deserialize)]
struct DevArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    description: String,
}

/// rss2json envelope for a Medium feed.
#[derive(Debug, Clone, Deserialize)]
struct MediumFeed {
    #[serde(default)]
    items: Vec<MediumItem>,
}

/// One feed item from rss2json.
#[derive(Debug, Clone, Deserialize)]
struct MediumItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default, rename = "pubDate")]
    pub_date: String,
    #[serde(default)]
    description: String,
}

/// Fetches recent articles for the configured source.
///
/// Returns an empty list without any network call when the blog username
/// is empty.
///
/// # Errors
/// Returns error on transport or decode failure.
pub fn fetch_articles(settings: &BlogSettings) -> Result<Vec<Article>, BlogError> {
    if settings.username.is_empty() {
        info!("[BLOG] No blog username configured, skipping articles");
        return Ok(Vec::new());
    }

    match settings.source {
        BlogSource::Dev => fetch_dev_articles(DEV_API_BASE, &settings.username, settings.limit),
        BlogSource::Medium => {
            fetch_medium_articles(RSS2JSON_BASE, &settings.username, settings.limit)
        }
    }
}

/// Fetches articles from the dev.to API at the given base URL.
///
/// # Errors
/// Returns error on transport or decode failure.
pub fn fetch_dev_articles(
    base_url: &str,
    username: &str,
    limit: u32,
) -> Result<Vec<Article>, BlogError> {
    let url = format!(
        "{}/articles?username={}&per_page={}",
        base_url.trim_end_matches('/'),
        username,
        limit
    );
    info!("[BLOG] fetch_dev_articles: GET {}", url);

    let articles: Vec<DevArticle> = get_json(&url)?;
    Ok(articles
        .into_iter()
        .map(|a| Article {
            title: a.title,
            url: a.url,
            published_at: a.published_at,
            description: strip_tags(&a.description),
        })
        .collect())
}

/// Fetches articles from a Medium feed through the rss2json bridge at the
/// given base URL, truncated to `limit` (the feed is not limitable
/// upstream).
///
/// # Errors
/// Returns error on transport or decode failure.
pub fn fetch_medium_articles(
    base_url: &str,
    username: &str,
    limit: u32,
) -> Result<Vec<Article>, BlogError> {
    let url = format!(
        "{}/api.json?rss_url=https://medium.com/feed/@{}",
        base_url.trim_end_matches('/'),
        username
    );
    info!("[BLOG] fetch_medium_articles: GET {}", url);

    let feed: MediumFeed = get_json(&url)?;
    Ok(feed
        .items
        .into_iter()
        .take(limit as usize)
        .map(|item| Article {
            title: item.title,
            url: item.link,
            published_at: item.pub_date,
            description: strip_tags(&item.description),
        })
        .collect())
}

/// Issues a GET and decodes the JSON body.
fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, BlogError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("gitfolio")
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| reqwest::blocking::Client::new());

    let response = client.get(url).send().map_err(|e| {
        warn!("[BLOG] HTTP request failed: {}", e);
        BlogError::Network(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("[BLOG] API error: {}", status);
        return Err(BlogError::Network(format!("HTTP {status}")));
    }

    response.json().map_err(|e| {
        warn!("[BLOG] Failed to parse JSON: {}", e);
        BlogError::Decode(e.to_string())
    })
}

/// Removes HTML tags from feed excerpts and collapses runs of whitespace.
/// Medium descriptions arrive as markup.
#[must_use]
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! GitHub data fetching for the portfolio page.
//!
//! One identity lookup, then one project fetch per the configured
//! strategy, executed in strict sequence on a background thread.

pub mod client;
pub mod fetcher;
pub mod query;
pub mod types;

pub use client::{DEFAULT_API_BASE, GithubClient};
pub use fetcher::{BackgroundFetcher, FetchRequest, FetchResult, FetcherStatus, PortfolioData};
pub use query::{build_search_query, build_search_url};
pub use types::{GithubError, GithubRepo, Profile, SearchResponse, UserResponse};

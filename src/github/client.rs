//! GitHub API client for the portfolio page.
//!
//! Blocking reqwest client issuing the fixed request sequence: one identity
//! lookup, then one project fetch per the configured strategy. No retries;
//! a failed call surfaces its typed error immediately.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::query::build_search_url;
use super::types::{GithubError, GithubRepo, SearchResponse, UserResponse};
use crate::config::{GithubProjectsSettings, ProjectMode};

/// Public GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Per-request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking GitHub API client.
///
/// The base URL is injectable so tests can point the client at a local
/// stub server.
pub struct GithubClient {
    /// HTTP client.
    client: reqwest::blocking::Client,
    /// API base URL without a trailing slash.
    base_url: String,
}

impl GithubClient {
    /// Creates a client against the public GitHub API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates a client against a specific API base URL.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent("gitfolio")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the identity record for a username.
    ///
    /// # Errors
    /// Returns error on transport failure, non-2xx status, or a body that
    /// does not decode.
    pub fn fetch_profile(&self, username: &str) -> Result<UserResponse, GithubError> {
        let url = format!("{}/users/{}", self.base_url, username);
        info!("[GITHUB] fetch_profile: GET {}", url);

        let response = self.get(&url)?;
        Self::decode(response)
    }

    /// Fetches the project list for the configured strategy.
    ///
    /// Automatic mode skips the call entirely (empty result) when the
    /// account has no public repositories; manual mode when the declared
    /// list is empty.
    ///
    /// # Errors
    /// Returns error when the search call fails. Manual mode tolerates
    /// individual lookup failures and never errors.
    pub fn fetch_projects(
        &self,
        username: &str,
        settings: &GithubProjectsSettings,
        public_repo_count: u32,
    ) -> Result<Vec<GithubRepo>, GithubError> {
        match settings.mode {
            ProjectMode::Automatic => {
                self.fetch_automatic(username, settings, public_repo_count)
            }
            ProjectMode::Manual => Ok(self.fetch_manual(&settings.manual.projects)),
        }
    }

    /// Automatic strategy: one search call, items returned verbatim
    /// (already sorted and limited upstream).
    fn fetch_automatic(
        &self,
        username: &str,
        settings: &GithubProjectsSettings,
        public_repo_count: u32,
    ) -> Result<Vec<GithubRepo>, GithubError> {
        if public_repo_count == 0 {
            info!("[GITHUB] Account has no public repositories, skipping search");
            return Ok(Vec::new());
        }

        let url = build_search_url(&self.base_url, username, &settings.automatic);
        info!("[GITHUB] fetch_projects: GET {}", url);

        let response = self.get(&url)?;
        let search: SearchResponse = Self::decode(response)?;
        Ok(search.items)
    }

    /// Manual strategy: one lookup per declared repository, successes
    /// collected in declaration order.
    fn fetch_manual(&self, projects: &[String]) -> Vec<GithubRepo> {
        if projects.is_empty() {
            info!("[GITHUB] Manual project list is empty, skipping lookups");
            return Vec::new();
        }

        let mut repos = Vec::with_capacity(projects.len());
        for full_name in projects {
            let url = format!("{}/repos/{}", self.base_url, full_name);
            debug!("[GITHUB] repository lookup: GET {}", url);

            // One bad name must not poison the rest of the list
            match self.get(&url).and_then(Self::decode::<GithubRepo>) {
                Ok(repo) => repos.push(repo),
                Err(e) => warn!("[GITHUB] Skipping repository '{}': {}", full_name, e),
            }
        }

        info!(
            "[GITHUB] Manual lookups done: {}/{} repositories",
            repos.len(),
            projects.len()
        );
        repos
    }

    /// Issues a GET with the v3 JSON media type and maps non-2xx statuses
    /// to typed errors, capturing the rate-limit reset header when present.
    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, GithubError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .map_err(|e| {
                warn!("[GITHUB] HTTP request failed: {}", e);
                GithubError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("[GITHUB] Response: {}", status);

        if !status.is_success() {
            let ratelimit_reset = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string());
            warn!(
                "[GITHUB] API error: {} (ratelimit_reset={:?})",
                status, ratelimit_reset
            );
            return Err(GithubError::Status {
                status: status.as_u16(),
                ratelimit_reset,
            });
        }

        Ok(response)
    }

    /// Decodes a JSON response body.
    fn decode<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, GithubError> {
        response.json().map_err(|e| {
            warn!("[GITHUB] Failed to parse JSON: {}", e);
            GithubError::Decode(e.to_string())
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

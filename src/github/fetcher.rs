//! Background fetcher for the page load cycle.
//!
//! Runs the strictly sequenced profile → projects → articles cycle on a
//! dedicated thread so the UI can render skeleton placeholders meanwhile.
//! The UI requests one load and polls for the result every tick; nothing
//! blocks the render loop.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use super::client::{DEFAULT_API_BASE, GithubClient};
use super::types::{GithubError, GithubRepo, Profile};
use crate::blog::{self, Article};
use crate::config::SanitizedConfig;

/// Everything one successful load cycle produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioData {
    /// Identity record for the hero section.
    pub profile: Profile,
    /// GitHub project list per the configured strategy.
    pub projects: Vec<GithubRepo>,
    /// Blog articles; empty when disabled or when their fetch failed.
    pub articles: Vec<Article>,
}

/// Request for a background fetch operation.
#[derive(Debug, Clone)]
pub enum FetchRequest {
    /// Run one full load cycle.
    Load,
}

/// Result of a background fetch operation.
#[derive(Debug)]
pub enum FetchResult {
    /// Load cycle finished; render state can be replaced wholesale.
    Loaded(PortfolioData),
    /// Load cycle failed; the error drives the full-page error state.
    Failed(GithubError),
}

/// Step the background thread is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetcherStatus {
    /// No operation in progress.
    Idle,
    /// Fetching the identity record.
    FetchingProfile,
    /// Fetching the project list.
    FetchingProjects,
    /// Fetching blog articles.
    FetchingArticles,
}

impl FetcherStatus {
    /// Short label for the status bar, `None` when idle.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::FetchingProfile => Some("profile"),
            Self::FetchingProjects => Some("projects"),
            Self::FetchingArticles => Some("articles"),
        }
    }
}

/// Background fetcher owning the HTTP client on its own thread.
pub struct BackgroundFetcher {
    /// Sender for requests to the background thread.
    request_tx: Sender<FetchRequest>,
    /// Receiver for results from the background thread.
    result_rx: Receiver<FetchResult>,
    /// Current step.
    status: Arc<Mutex<FetcherStatus>>,
    /// Handle to the background thread.
    _thread_handle: JoinHandle<()>,
}

impl BackgroundFetcher {
    /// Creates a fetcher against the public GitHub API.
    #[must_use]
    pub fn new(config: SanitizedConfig) -> Self {
        Self::with_base_url(config, DEFAULT_API_BASE)
    }

    /// Creates a fetcher against a specific API base URL.
    #[must_use]
    pub fn with_base_url(config: SanitizedConfig, base_url: &str) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (result_tx, result_rx) = mpsc::channel::<FetchResult>();
        let status = Arc::new(Mutex::new(FetcherStatus::Idle));
        let status_clone = Arc::clone(&status);

        let base = base_url.to_string();

        let thread_handle = thread::spawn(move || {
            info!("[FETCHER] Background thread started");
            let client = GithubClient::with_base_url(&base);

            Self::run_fetch_loop(&request_rx, &result_tx, &status_clone, &client, &config);

            info!("[FETCHER] Background thread exiting");
        });

        Self {
            request_tx,
            result_rx,
            status,
            _thread_handle: thread_handle,
        }
    }

    /// Runs the fetch loop in the background thread.
    fn run_fetch_loop(
        request_rx: &Receiver<FetchRequest>,
        result_tx: &Sender<FetchResult>,
        status: &Arc<Mutex<FetcherStatus>>,
        client: &GithubClient,
        config: &SanitizedConfig,
    ) {
        // Process requests until the channel is closed
        while let Ok(request) = request_rx.recv() {
            debug!("[FETCHER] Received request: {:?}", request);

            let result = match request {
                FetchRequest::Load => match Self::run_load(status, client, config) {
                    Ok(data) => {
                        info!(
                            "[FETCHER] Load cycle done: {} projects, {} articles",
                            data.projects.len(),
                            data.articles.len()
                        );
                        FetchResult::Loaded(data)
                    }
                    Err(e) => {
                        warn!("[FETCHER] Load cycle failed: {}", e);
                        FetchResult::Failed(e)
                    }
                },
            };

            Self::set_status(status, FetcherStatus::Idle);

            // Send result back
            if result_tx.send(result).is_err() {
                warn!("[FETCHER] Result channel closed, exiting");
                break;
            }
        }
    }

    /// One complete load cycle, strictly sequenced: the profile must
    /// arrive first because its public repository count gates the project
    /// search. A profile or project failure aborts the cycle; an article
    /// failure only empties the Articles section.
    fn run_load(
        status: &Arc<Mutex<FetcherStatus>>,
        client: &GithubClient,
        config: &SanitizedConfig,
    ) -> Result<PortfolioData, GithubError> {
        Self::set_status(status, FetcherStatus::FetchingProfile);
        let user = client.fetch_profile(&config.github.username)?;
        let public_repos = user.public_repos;
        let profile = Profile::from(user);

        let projects = if config.projects.github.display {
            Self::set_status(status, FetcherStatus::FetchingProjects);
            client.fetch_projects(&config.github.username, &config.projects.github, public_repos)?
        } else {
            info!("[FETCHER] GitHub projects disabled, skipping fetch");
            Vec::new()
        };

        let articles = if config.blog.username.is_empty() {
            Vec::new()
        } else {
            Self::set_status(status, FetcherStatus::FetchingArticles);
            match blog::fetch_articles(&config.blog) {
                Ok(articles) => articles,
                Err(e) => {
                    warn!("[FETCHER] Blog fetch failed (non-fatal): {}", e);
                    Vec::new()
                }
            }
        };

        Ok(PortfolioData {
            profile,
            projects,
            articles,
        })
    }

    fn set_status(status: &Arc<Mutex<FetcherStatus>>, value: FetcherStatus) {
        if let Ok(mut s) = status.lock() {
            *s = value;
        }
    }

    /// Requests one load cycle.
    ///
    /// Non-blocking; call `poll_result()` to check for completion.
    pub fn request_load(&self) {
        info!("[FETCHER] Requesting load cycle");

        if let Err(e) = self.request_tx.send(FetchRequest::Load) {
            warn!("[FETCHER] Failed to send request: {}", e);
        }
    }

    /// Polls for a result from the background thread.
    ///
    /// Returns `Some(result)` if one is available. Non-blocking.
    pub fn poll_result(&self) -> Option<FetchResult> {
        match self.result_rx.try_recv() {
            Ok(result) => {
                debug!("[FETCHER] Received result");
                Some(result)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                warn!("[FETCHER] Result channel disconnected");
                None
            }
        }
    }

    /// Returns the step the background thread is currently on.
    #[must_use]
    pub fn status(&self) -> FetcherStatus {
        self.status.lock().map(|s| *s).unwrap_or(FetcherStatus::Idle)
    }

    /// Returns true while a load cycle is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status() != FetcherStatus::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_status_labels() {
        assert_eq!(FetcherStatus::Idle.label(), None);
        assert_eq!(FetcherStatus::FetchingProfile.label(), Some("profile"));
        assert_eq!(FetcherStatus::FetchingProjects.label(), Some("projects"));
        assert_eq!(FetcherStatus::FetchingArticles.label(), Some("articles"));
    }

    #[test]
    fn test_fetch_request_debug() {
        let req = FetchRequest::Load;
        let debug_str = format!("{:?}", req);
        assert!(debug_str.contains("Load"));
    }
}

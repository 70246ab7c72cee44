//! Page-level error classification.
//!
//! Maps fetch failures onto a fixed set of user-facing error descriptors
//! that drive the full-page error state. Classification never fails:
//! internal parsing problems downgrade to the generic descriptor.

use chrono::{DateTime, Utc};

use crate::github::GithubError;

/// Kind of page-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required username missing at sanitize time.
    InvalidConfig,
    /// Upstream 403 with a parsable rate-limit reset header.
    RateLimited,
    /// Upstream 404.
    InvalidUsername,
    /// Everything else.
    Generic,
}

/// User-facing error descriptor for the full-page error state.
///
/// One of a fixed set; only the rate-limit variant interpolates a computed
/// relative-time phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    /// HTTP status that triggered the failure, when there was one.
    pub status: Option<u16>,
    pub title: String,
    pub subtitle: String,
}

impl ErrorDescriptor {
    /// Descriptor for a config that failed sanitization.
    #[must_use]
    pub fn invalid_config() -> Self {
        Self {
            kind: ErrorKind::InvalidConfig,
            status: None,
            title: "Invalid config".to_string(),
            subtitle: "Set github.username in gitfolio.toml and restart.".to_string(),
        }
    }

    /// Descriptor for an exhausted API quota.
    #[must_use]
    pub fn rate_limited(reset_phrase: &str) -> Self {
        Self {
            kind: ErrorKind::RateLimited,
            status: Some(403),
            title: "Too many requests".to_string(),
            subtitle: format!(
                "You hit the GitHub API rate limit. It resets {reset_phrase}."
            ),
        }
    }

    /// Descriptor for a username the API does not know.
    #[must_use]
    pub fn invalid_username() -> Self {
        Self {
            kind: ErrorKind::InvalidUsername,
            status: Some(404),
            title: "Not found".to_string(),
            subtitle: "Invalid GitHub username in the config.".to_string(),
        }
    }

    /// Descriptor for every remaining failure shape.
    #[must_use]
    pub fn generic(status: Option<u16>) -> Self {
        Self {
            kind: ErrorKind::Generic,
            status,
            title: "Something went wrong".to_string(),
            subtitle: "Could not load data from the GitHub API. See the log file for details."
                .to_string(),
        }
    }
}

/// Classifies a fetch failure into its page-level descriptor.
///
/// 403 with a parsable `x-ratelimit-reset` header becomes the rate-limit
/// descriptor with a relative reset time; 403 without one downgrades to
/// generic. 404 is the invalid-username case. Anything else, including
/// transport and decode failures, is generic.
#[must_use]
pub fn classify(error: &GithubError) -> ErrorDescriptor {
    match error {
        GithubError::Status {
            status: 403,
            ratelimit_reset,
        } => match parse_reset(ratelimit_reset.as_deref()) {
            Some(reset) => ErrorDescriptor::rate_limited(&relative_time(reset, Utc::now())),
            None => ErrorDescriptor::generic(Some(403)),
        },
        GithubError::Status { status: 404, .. } => ErrorDescriptor::invalid_username(),
        GithubError::Status { status, .. } => ErrorDescriptor::generic(Some(*status)),
        GithubError::Network(_) | GithubError::Decode(_) => ErrorDescriptor::generic(None),
    }
}

/// Parses a rate-limit reset header value (Unix seconds) into a timestamp.
fn parse_reset(value: Option<&str>) -> Option<DateTime<Utc>> {
    let secs: i64 = value?.trim().parse().ok()?;
    DateTime::from_timestamp(secs, 0)
}

/// Formats the distance between two timestamps as a human phrase,
/// suffixed with "in ..." for future targets and "... ago" for past ones.
#[must_use]
pub fn relative_time(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = target - now;
    let future = delta >= chrono::Duration::zero();
    let secs = delta.num_seconds().unsigned_abs();

    let minutes = secs / 60;
    let hours = secs / 3600;
    let days = secs / 86_400;

    let phrase = if secs < 60 {
        "less than a minute".to_string()
    } else if minutes < 2 {
        "1 minute".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if hours < 24 {
        format!("about {hours} hours")
    } else if hours < 42 {
        "1 day".to_string()
    } else if days < 30 {
        format!("{days} days")
    } else if days < 45 {
        "about 1 month".to_string()
    } else if days < 365 {
        format!("{} months", days / 30)
    } else {
        format!("about {} years", days / 365)
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

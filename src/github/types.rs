//! GitHub API wire types and fetch errors.
//!
//! Only the response fields the page actually reads are declared; serde
//! ignores the rest.

use serde::Deserialize;
use thiserror::Error;

/// Identity endpoint response (`/users/{username}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
    /// Display name; null upstream when the user never set one.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// Public repository count; gates the automatic project search.
    #[serde(default)]
    pub public_repos: u32,
}

/// One repository as returned by the search and lookup endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Search endpoint envelope (`/search/repositories`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<GithubRepo>,
}

/// Profile shown in the hero section.
///
/// Replaced wholesale after a successful identity fetch, never updated
/// partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub avatar_url: String,
    /// Never empty: a missing upstream name becomes a single space so the
    /// name slot keeps its height.
    pub name: String,
    pub bio: String,
    pub location: String,
    pub company: String,
}

impl From<UserResponse> for Profile {
    fn from(user: UserResponse) -> Self {
        Self {
            avatar_url: user.avatar_url,
            name: user
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| " ".to_string()),
            bio: user.bio.unwrap_or_default(),
            location: user.location.unwrap_or_default(),
            company: user.company.unwrap_or_default(),
        }
    }
}

/// Errors from the GitHub fetch path.
///
/// Failure shape matters downstream: the error classifier pattern-matches
/// on these variants to pick the page-level error descriptor.
#[derive(Debug, Clone, Error)]
pub enum GithubError {
    /// Non-2xx response from the API.
    #[error("GitHub API error: HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw `x-ratelimit-reset` header value, when the response carried
        /// one. Parsed only by the classifier.
        ratelimit_reset: Option<String>,
    },
    /// Transport failure before a response was received.
    #[error("Network error: {0}")]
    Network(String),
    /// Response body did not decode as the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl GithubError {
    /// Returns the HTTP status code, when the failure carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_full_user() {
        let user = UserResponse {
            avatar_url: "https://example.com/a.png".to_string(),
            name: Some("Mona Lisa".to_string()),
            bio: Some("Art".to_string()),
            location: Some("Paris".to_string()),
            company: Some("@github".to_string()),
            public_repos: 3,
        };
        let profile = Profile::from(user);
        assert_eq!(profile.name, "Mona Lisa");
        assert_eq!(profile.bio, "Art");
        assert_eq!(profile.company, "@github");
    }

    #[test]
    fn test_profile_name_never_empty() {
        let profile = Profile::from(UserResponse::default());
        assert_eq!(profile.name, " ");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.location, "");

        let profile = Profile::from(UserResponse {
            name: Some(String::new()),
            ..UserResponse::default()
        });
        assert_eq!(profile.name, " ");
    }

    #[test]
    fn test_repo_decodes_with_nulls() {
        let json = r#"{
            "name": "Hello-World",
            "description": null,
            "html_url": "https://github.com/octocat/Hello-World",
            "stargazers_count": 80,
            "forks_count": 9,
            "language": null,
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2011-01-26T19:14:43Z"
        }"#;
        let repo: GithubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert!(repo.topics.is_empty());
        assert_eq!(repo.stargazers_count, 80);
    }

    #[test]
    fn test_error_status_accessor() {
        let err = GithubError::Status {
            status: 403,
            ratelimit_reset: Some("1700000000".to_string()),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(GithubError::Network("timeout".to_string()).status(), None);
    }
}
